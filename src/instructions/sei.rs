use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand, StatusFlags};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_sei(&mut self, _operand: &ResolvedOperand) -> u8 {
        self.set_flag(StatusFlags::IRQ_DISABLE, true);
        0
    }
}
