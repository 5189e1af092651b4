use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand, StatusFlags};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_bvs(&mut self, operand: &ResolvedOperand) -> u8 {
        self.branch_on(self.get_flag(StatusFlags::OVERFLOW), operand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::FlatMemory;
    use crate::cpu6502::new_cpu;

    #[test]
    fn test_bvs_taken_when_overflow_set() {
        let mut cpu = new_cpu(FlatMemory::new());
        cpu.program_counter = 0x6002;
        cpu.set_flag(StatusFlags::OVERFLOW, true);
        let cycles = cpu.handle_bvs(&ResolvedOperand::with_address(0x6030));
        assert_eq!(cpu.program_counter, 0x6030);
        assert_eq!(cycles, 1);
    }

    #[test]
    fn test_bvs_not_taken_when_overflow_clear() {
        let mut cpu = new_cpu(FlatMemory::new());
        cpu.program_counter = 0x6002;
        let cycles = cpu.handle_bvs(&ResolvedOperand::with_address(0x6030));
        assert_eq!(cpu.program_counter, 0x6002);
        assert_eq!(cycles, 0);
    }
}
