use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand, StatusFlags};

impl<B: MemoryBus> CPU<B> {
    pub(crate) fn handle_sbc(&mut self, operand: &ResolvedOperand) -> u8 {
        let value = operand
            .value
            .expect("BUG: memory value of SBC should be present");
        let carry_in: u8 = if self.get_flag(StatusFlags::CARRY) { 1 } else { 0 };
        let accumulator = self.accumulator;

        // SBC is ADC of the one's complement: A + !M + C. Carry doubles as
        // "no borrow" going in and coming out.
        let inverted = value ^ 0xFF;
        let sum = accumulator as u16 + inverted as u16 + carry_in as u16;
        let binary = sum as u8;

        let overflow = (accumulator ^ binary) & (inverted ^ binary) & 0x80 != 0;
        self.set_flag(StatusFlags::OVERFLOW, overflow);
        self.update_nz(binary);
        // The decimal borrow matches the binary one, so Carry is settled
        // here for both paths.
        self.set_flag(StatusFlags::CARRY, sum > 0xFF);

        if self.decimal_arithmetic() {
            // BCD path: subtract nibble-wise with a decimal adjust on each
            // borrow. Only the accumulator differs from the binary path.
            let borrow = (1 - carry_in) as i16;
            let mut low = (accumulator & 0x0F) as i16 - (value & 0x0F) as i16 - borrow;
            let mut high = (accumulator >> 4) as i16 - (value >> 4) as i16;
            if low < 0 {
                low -= 0x06;
                high -= 1;
            }
            if high < 0 {
                high -= 0x06;
            }
            self.accumulator = (((high as u8) & 0x0F) << 4) | ((low as u8) & 0x0F);
        } else {
            self.accumulator = binary;
        }

        0
    }
}
