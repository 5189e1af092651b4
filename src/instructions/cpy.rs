use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand, StatusFlags};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_cpy(&mut self, operand: &ResolvedOperand) -> u8 {
        let value = operand
            .value
            .expect("BUG: memory value of CPY should be present");
        let result = self.y_register.wrapping_sub(value);
        self.set_flag(StatusFlags::CARRY, self.y_register >= value);
        self.update_nz(result);
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::FlatMemory;
    use crate::cpu6502::new_cpu;

    #[test]
    fn test_cpy_compares_against_y() {
        let mut cpu = new_cpu(FlatMemory::new());
        cpu.y_register = 0x80;
        cpu.handle_cpy(&ResolvedOperand::with_value(0x01));
        assert_eq!(cpu.get_flag(StatusFlags::CARRY), true);
        assert_eq!(cpu.get_flag(StatusFlags::ZERO), false);
        assert_eq!(cpu.get_flag(StatusFlags::NEGATIVE), false, "0x80 - 0x01 = 0x7F");
    }
}
