use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_tsx(&mut self, _operand: &ResolvedOperand) -> u8 {
        self.x_register = self.stack_pointer;
        self.update_nz(self.x_register);
        0
    }
}
