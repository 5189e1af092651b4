use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand, StatusFlags};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_cpx(&mut self, operand: &ResolvedOperand) -> u8 {
        let value = operand
            .value
            .expect("BUG: memory value of CPX should be present");
        let result = self.x_register.wrapping_sub(value);
        self.set_flag(StatusFlags::CARRY, self.x_register >= value);
        self.update_nz(result);
        0
    }
}
