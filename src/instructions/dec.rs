use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_dec(&mut self, operand: &ResolvedOperand) -> u8 {
        let address = operand
            .address
            .expect("BUG: address of DEC should be present");
        let value = operand
            .value
            .expect("BUG: memory value of DEC should be present");

        let result = value.wrapping_sub(1);
        self.write_u8(address, result);
        self.update_nz(result);
        0
    }
}
