use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand, StatusFlags};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_bit(&mut self, operand: &ResolvedOperand) -> u8 {
        let value = operand
            .value
            .expect("BUG: memory value of BIT should be present");

        // Z reflects the AND with A; N and V are copied straight from the
        // operand's top two bits, regardless of A.
        self.set_flag(StatusFlags::ZERO, self.accumulator & value == 0);
        self.set_flag(StatusFlags::NEGATIVE, value & 0x80 != 0);
        self.set_flag(StatusFlags::OVERFLOW, value & 0x40 != 0);
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::FlatMemory;
    use crate::cpu6502::new_cpu;

    #[test]
    fn test_bit_copies_top_bits_and_tests_mask() {
        let mut cpu = new_cpu(FlatMemory::new());
        cpu.accumulator = 0x01;
        cpu.handle_bit(&ResolvedOperand::with_value(0b1100_0001));
        assert_eq!(cpu.get_flag(StatusFlags::ZERO), false);
        assert_eq!(cpu.get_flag(StatusFlags::NEGATIVE), true);
        assert_eq!(cpu.get_flag(StatusFlags::OVERFLOW), true);
        assert_eq!(cpu.accumulator, 0x01, "A is not modified");
    }

    #[test]
    fn test_bit_sets_zero_on_disjoint_mask() {
        let mut cpu = new_cpu(FlatMemory::new());
        cpu.accumulator = 0x0F;
        cpu.handle_bit(&ResolvedOperand::with_value(0x30));
        assert_eq!(cpu.get_flag(StatusFlags::ZERO), true);
        assert_eq!(cpu.get_flag(StatusFlags::NEGATIVE), false);
        assert_eq!(cpu.get_flag(StatusFlags::OVERFLOW), false);
    }
}
