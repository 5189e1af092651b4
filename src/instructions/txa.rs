use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_txa(&mut self, _operand: &ResolvedOperand) -> u8 {
        self.accumulator = self.x_register;
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
    fn test_txa_copies_x_to_a() {
        let mut cpu = new_cpu(FlatMemory::new());
        cpu.x_register = 0x42;
        cpu.handle_txa(&ResolvedOperand::none());
        assert_eq!(cpu.accumulator, 0x42);
        assert_eq!(cpu.get_flag(StatusFlags::ZERO), false);
    }
}
