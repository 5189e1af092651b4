use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand, StatusFlags};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_brk(&mut self, _operand: &ResolvedOperand) -> u8 {
        // 1. Push the return address. PC is already past the opcode; the
        // byte after it is a signature byte BRK skips over.
        self.push_u16(self.program_counter.wrapping_add(1));

        // 2. Push the status register. The stacked copy marks its source:
        // B and the unused bit both read 1 for a software break.
        let pushed = self.status_register | StatusFlags::BREAK | StatusFlags::UNUSED;
        self.push_u8(pushed.bits());

        // 3. Mask further IRQs.
        self.set_flag(StatusFlags::IRQ_DISABLE, true);

        // 4. BRK shares the IRQ vector.
        self.program_counter = self.read_u16(Self::IRQ_VECTOR_ADDRESS);
        0
    }
}
