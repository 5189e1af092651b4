use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_tax(&mut self, _operand: &ResolvedOperand) -> u8 {
        self.x_register = self.accumulator;
        self.update_nz(self.x_register);
        0
    }
}
