use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand, StatusFlags};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_bvc(&mut self, operand: &ResolvedOperand) -> u8 {
        self.branch_on(!self.get_flag(StatusFlags::OVERFLOW), operand)
    }
}
