use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_pla(&mut self, _operand: &ResolvedOperand) -> u8 {
        let value = self.pop_u8();
        self.accumulator = value;
        self.update_nz(value);
        0
    }
}
