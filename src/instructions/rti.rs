use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand, StatusFlags};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_rti(&mut self, _operand: &ResolvedOperand) -> u8 {
        // Status comes off the stack with B forced clear and the unused bit
        // forced set; neither has storage on the chip. The popped PC is used
        // as-is (no +1, unlike RTS).
        let popped = StatusFlags::from_bits_truncate(self.pop_u8());
        self.status_register = (popped - StatusFlags::BREAK) | StatusFlags::UNUSED;
        self.program_counter = self.pop_u16();
        0
    }
}
