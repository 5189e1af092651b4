use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand, StatusFlags};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_sec(&mut self, _operand: &ResolvedOperand) -> u8 {
        self.set_flag(StatusFlags::CARRY, true);
        0
    }
}
