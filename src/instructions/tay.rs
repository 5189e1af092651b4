use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_tay(&mut self, _operand: &ResolvedOperand) -> u8 {
        self.y_register = self.accumulator;
        self.update_nz(self.y_register);
        0
    }
}
