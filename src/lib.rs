//! A deterministic interpreter core for the MOS 6502.
//!
//! The CPU sees the outside world as a flat 16-bit address space through the
//! [`bus::MemoryBus`] capability; everything else (registers, status flags,
//! the page-1 stack, the opcode table, the thirteen addressing modes and
//! their quirks, NMI/IRQ/RESET handling) lives in this crate. One call to
//! [`cpu6502::CPU::step`] runs exactly one instruction and advances the
//! cycle counter by its documented cost.

pub mod bus;
pub mod cpu6502;
mod instructions;
pub mod opcodes;

pub use bus::{FlatMemory, MemoryBus};
pub use cpu6502::{
    CPU, CpuConfig, CpuError, InterruptLines, Snapshot, StatusFlags, TraceEvent, Variant, new_cpu,
    new_cpu_with_config,
};
pub use opcodes::{AddressingMode, Mnemonic, Operand, decode};
