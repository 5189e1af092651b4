use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand, StatusFlags};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_rol(&mut self, operand: &ResolvedOperand) -> u8 {
        let value = operand
            .value
            .expect("BUG: memory value of ROL should be present");
        let carry_in: u8 = if self.get_flag(StatusFlags::CARRY) { 1 } else { 0 };

        // Rotate left through Carry: C enters at bit 0, bit 7 leaves into C.
        let result = (value << 1) | carry_in;
        self.set_flag(StatusFlags::CARRY, value & 0x80 != 0);
        self.update_nz(result);
        self.write_back(operand, result);
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::FlatMemory;
    use crate::cpu6502::new_cpu;

    #[test]
    fn test_rol_rotates_carry_into_bit_0() {
        let mut cpu = new_cpu(FlatMemory::new());
        cpu.set_flag(StatusFlags::CARRY, true);
        cpu.accumulator = 0x40;
        cpu.handle_rol(&ResolvedOperand::with_value(0x40));
        assert_eq!(cpu.accumulator, 0x81);
        assert_eq!(cpu.get_flag(StatusFlags::CARRY), false);
        assert_eq!(cpu.get_flag(StatusFlags::NEGATIVE), true);
    }

    #[test]
    fn test_rol_moves_bit_7_into_carry() {
        let mut cpu = new_cpu(FlatMemory::new());
        cpu.accumulator = 0x80;
        cpu.handle_rol(&ResolvedOperand::with_value(0x80));
        assert_eq!(cpu.accumulator, 0x00);
        assert_eq!(cpu.get_flag(StatusFlags::CARRY), true);
        assert_eq!(cpu.get_flag(StatusFlags::ZERO), true);
    }

    #[test]
    fn test_rol_memory_operand_writes_back() {
        let mut cpu = new_cpu(FlatMemory::new());
        let operand = ResolvedOperand {
            value: Some(0x01),
            address: Some(0x0040),
            page_crossed: false,
        };
        cpu.handle_rol(&operand);
        assert_eq!(cpu.read_u8(0x0040), 0x02);
    }
}
