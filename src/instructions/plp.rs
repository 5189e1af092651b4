use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand, StatusFlags};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_plp(&mut self, _operand: &ResolvedOperand) -> u8 {
        // B and the unused bit have no storage; whatever the stacked copy
        // says, the register keeps B clear and unused set.
        let popped = StatusFlags::from_bits_truncate(self.pop_u8());
        self.status_register = (popped - StatusFlags::BREAK) | StatusFlags::UNUSED;
        0
    }
}
