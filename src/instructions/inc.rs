use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_inc(&mut self, operand: &ResolvedOperand) -> u8 {
        let address = operand
            .address
            .expect("BUG: address of INC should be present");
        let value = operand
            .value
            .expect("BUG: memory value of INC should be present");

        let result = value.wrapping_add(1);
        self.write_u8(address, result);
        self.update_nz(result);
        0
    }
}
