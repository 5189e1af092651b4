use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_jmp(&mut self, operand: &ResolvedOperand) -> u8 {
        let address = operand
            .address
            .expect("BUG: address of JMP should be present");
        self.program_counter = address;
        0
    }
}
