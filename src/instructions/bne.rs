use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand, StatusFlags};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_bne(&mut self, operand: &ResolvedOperand) -> u8 {
        self.branch_on(!self.get_flag(StatusFlags::ZERO), operand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::FlatMemory;
    use crate::cpu6502::new_cpu;

    #[test]
    fn test_bne_taken_when_zero_clear() {
        let mut cpu = new_cpu(FlatMemory::new());
        cpu.program_counter = 0x00F0;
        let operand = ResolvedOperand {
            value: None,
            address: Some(0x0110),
            page_crossed: true,
        };
        let cycles = cpu.handle_bne(&operand);
        assert_eq!(cpu.program_counter, 0x0110);
        assert_eq!(cycles, 2, "taken across a page boundary");
    }

    #[test]
    fn test_bne_not_taken_when_zero_set() {
        let mut cpu = new_cpu(FlatMemory::new());
        cpu.program_counter = 0x00F0;
        cpu.set_flag(StatusFlags::ZERO, true);
        let cycles = cpu.handle_bne(&ResolvedOperand::with_address(0x0110));
        assert_eq!(cpu.program_counter, 0x00F0);
        assert_eq!(cycles, 0);
    }
}
