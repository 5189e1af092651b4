use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_ldx(&mut self, operand: &ResolvedOperand) -> u8 {
        let value = operand
            .value
            .expect("BUG: memory value of LDX should be present");
        self.x_register = value;
        self.update_nz(value);
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::FlatMemory;
    use crate::cpu6502::{StatusFlags, new_cpu};

    #[test]
    fn test_ldx_loads_x_register() {
        let mut cpu = new_cpu(FlatMemory::new());
        cpu.handle_ldx(&ResolvedOperand::with_value(0xC0));
        assert_eq!(cpu.x_register, 0xC0);
        assert_eq!(cpu.get_flag(StatusFlags::NEGATIVE), true);
    }
}
