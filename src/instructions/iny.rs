use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_iny(&mut self, _operand: &ResolvedOperand) -> u8 {
        self.y_register = self.y_register.wrapping_add(1);
        self.update_nz(self.y_register);
        0
    }
}
