use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand, StatusFlags};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_lsr(&mut self, operand: &ResolvedOperand) -> u8 {
        let value = operand
            .value
            .expect("BUG: memory value of LSR should be present");
        let result = value >> 1;

        // Carry takes the bit shifted out of the bottom. N can never be set
        // since a zero comes in at the top.
        self.set_flag(StatusFlags::CARRY, value & 0x01 != 0);
        self.update_nz(result);
        self.write_back(operand, result);
        0
    }
}
