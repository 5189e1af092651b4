use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_eor(&mut self, operand: &ResolvedOperand) -> u8 {
        let value = operand
            .value
            .expect("BUG: memory value of EOR should be present");
        self.accumulator ^= value;
        self.update_nz(self.accumulator);
        0
    }
}
