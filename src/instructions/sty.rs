use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_sty(&mut self, operand: &ResolvedOperand) -> u8 {
        let address = operand
            .address
            .expect("BUG: address of STY should be present");
        self.write_u8(address, self.y_register);
        0
    }
}
