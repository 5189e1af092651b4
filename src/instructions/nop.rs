use crate::bus::MemoryBus;
use crate::cpu6502::{CPU, ResolvedOperand};

impl<B: MemoryBus> CPU<B> {
    // Also the placeholder semantics for every undocumented opcode in
    // lenient mode; the decoder gives those the length and cost their
    // encoding row implies.
    pub(crate) fn handle_nop(&mut self, _operand: &ResolvedOperand) -> u8 {
        0
    }
}
