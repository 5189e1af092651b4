use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand, StatusFlags};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_adc(&mut self, operand: &ResolvedOperand) -> u8 {
        let value = operand
            .value
            .expect("BUG: memory value of ADC should be present");
        let carry_in: u8 = if self.get_flag(StatusFlags::CARRY) { 1 } else { 0 };
        let accumulator = self.accumulator;

        // Perform the addition in 16 bits so the carry out survives.
        let sum = accumulator as u16 + value as u16 + carry_in as u16;
        let binary = sum as u8;

        // Set Overflow (V) - the operands agree in sign but the result does not.
        let overflow = (accumulator ^ binary) & (value ^ binary) & 0x80 != 0;
        self.set_flag(StatusFlags::OVERFLOW, overflow);

        // N and Z always reflect the binary sum, even in decimal mode.
        self.update_nz(binary);

        if self.decimal_arithmetic() {
            // BCD path: adjust each nibble back into 0-9. The accumulator
            // takes the decimal result and Carry the decimal carry out.
            let mut low = (accumulator & 0x0F) + (value & 0x0F) + carry_in;
            let mut high = (accumulator >> 4) + (value >> 4);
            if low > 0x09 {
                low += 0x06;
            }
            if low > 0x0F {
                high += 1;
            }
            if high > 0x09 {
                high += 0x06;
            }
            self.set_flag(StatusFlags::CARRY, high > 0x0F);
            self.accumulator = ((high & 0x0F) << 4) | (low & 0x0F);
        } else {
            // Set Carry (C) - the addition overflowed 8 bits.
            self.set_flag(StatusFlags::CARRY, sum > 0xFF);
            self.accumulator = binary;
        }

        0
    }
}
