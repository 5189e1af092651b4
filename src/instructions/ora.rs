use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_ora(&mut self, operand: &ResolvedOperand) -> u8 {
        let value = operand
            .value
            .expect("BUG: memory value of ORA should be present");
        self.accumulator |= value;
        self.update_nz(self.accumulator);
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::FlatMemory;
    use crate::cpu6502::{StatusFlags, new_cpu};

    #[test]
    fn test_ora_instruction() {
        let mut cpu = new_cpu(FlatMemory::new());
        cpu.accumulator = 0b1010_1010;
        cpu.handle_ora(&ResolvedOperand::with_value(0b1111_0000));
        assert_eq!(cpu.accumulator, 0b1111_1010);
        assert_eq!(cpu.get_flag(StatusFlags::NEGATIVE), true);
    }

    #[test]
    fn test_ora_zero_with_zero() {
        let mut cpu = new_cpu(FlatMemory::new());
        cpu.accumulator = 0x00;
        cpu.handle_ora(&ResolvedOperand::with_value(0x00));
        assert_eq!(cpu.accumulator, 0x00);
        assert_eq!(cpu.get_flag(StatusFlags::ZERO), true);
    }
}
