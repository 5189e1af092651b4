use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_ldy(&mut self, operand: &ResolvedOperand) -> u8 {
        let value = operand
            .value
            .expect("BUG: memory value of LDY should be present");
        self.y_register = value;
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
    fn test_ldy_loads_y_register() {
        let mut cpu = new_cpu(FlatMemory::new());
        cpu.handle_ldy(&ResolvedOperand::with_value(0x00));
        assert_eq!(cpu.y_register, 0x00);
        assert_eq!(cpu.get_flag(StatusFlags::ZERO), true);
    }
}
