use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand, StatusFlags};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_cmp(&mut self, operand: &ResolvedOperand) -> u8 {
        let value = operand
            .value
            .expect("BUG: memory value of CMP should be present");

        // A - M is computed and discarded; only the flags remain.
        let result = self.accumulator.wrapping_sub(value);
        self.set_flag(StatusFlags::CARRY, self.accumulator >= value);
        self.update_nz(result);
        0
    }
}
