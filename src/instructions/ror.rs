use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand, StatusFlags};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_ror(&mut self, operand: &ResolvedOperand) -> u8 {
        let value = operand
            .value
            .expect("BUG: memory value of ROR should be present");
        let carry_in: u8 = if self.get_flag(StatusFlags::CARRY) { 1 } else { 0 };

        // Rotate right through Carry: C enters at bit 7, bit 0 leaves into C.
        let result = (value >> 1) | (carry_in << 7);
        self.set_flag(StatusFlags::CARRY, value & 0x01 != 0);
        self.update_nz(result);
        self.write_back(operand, result);
        0
    }
}
