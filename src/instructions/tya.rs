use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_tya(&mut self, _operand: &ResolvedOperand) -> u8 {
        self.accumulator = self.y_register;
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
    fn test_tya_copies_y_to_a() {
        let mut cpu = new_cpu(FlatMemory::new());
        cpu.y_register = 0x90;
        cpu.handle_tya(&ResolvedOperand::none());
        assert_eq!(cpu.accumulator, 0x90);
        assert_eq!(cpu.get_flag(StatusFlags::NEGATIVE), true);
    }
}
