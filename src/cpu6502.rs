use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use bitflags::bitflags;
use thiserror::Error;

use crate::bus::{FlatMemory, MemoryBus};
use crate::opcodes::{AddressingMode, Mnemonic, decode};

bitflags! {
    /// The status register P, one architectural flag per bit:
    ///
    ///   7  bit  0
    ///   ---- ----
    ///   NV-B DIZC
    ///
    /// Bit 5 has no storage on the chip and always reads back as 1; bit 4
    /// ("B") only ever exists in the copies of P pushed to the stack, where
    /// it records whether the push came from an instruction (BRK/PHP) or
    /// from interrupt entry.
    pub struct StatusFlags: u8 {
        const CARRY       = 0b0000_0001;
        const ZERO        = 0b0000_0010;
        const IRQ_DISABLE = 0b0000_0100;
        const DECIMAL     = 0b0000_1000;
        const BREAK       = 0b0001_0000;
        const UNUSED      = 0b0010_0000;
        const OVERFLOW    = 0b0100_0000;
        const NEGATIVE    = 0b1000_0000;
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// Strict decoding only: an undocumented opcode was fetched. `pc` is the
    /// address the byte was fetched from; the CPU state is unchanged.
    #[error("illegal opcode {opcode:#04X} at {pc:#06X}")]
    IllegalOpcode { opcode: u8, pc: u16 },

    /// `step` was called on a CPU that has never been reset.
    #[error("step called before reset")]
    ResetNotPerformed,
}

/// Which silicon the core behaves like. The Ricoh 2A03 (NES/Famicom) is a
/// 6502 with the BCD unit disconnected: the D flag still exists and can be
/// set and pushed, but ADC/SBC always add in binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Nmos6502,
    Ricoh2A03,
}

#[derive(Debug, Clone, Copy)]
pub struct CpuConfig {
    pub variant: Variant,
    /// When set, fetching an undocumented opcode is an error instead of a
    /// NOP of the decoded length.
    pub strict_decode: bool,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Nmos6502,
            strict_decode: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    ResetPending,
    Ready,
}

/// The NMI latch and the IRQ level, shared with the host behind an `Arc` so
/// device threads can signal the CPU without holding a reference to it. The
/// step loop samples both at instruction boundaries only.
#[derive(Debug, Default)]
pub struct InterruptLines {
    nmi_latch: AtomicBool,
    irq_line: AtomicBool,
}

impl InterruptLines {
    /// Latches an NMI edge. The latch stays set until the CPU services it,
    /// so a pulse raised between steps is never lost.
    pub fn raise_nmi(&self) {
        self.nmi_latch.store(true, Ordering::SeqCst);
    }

    /// Drives the level-triggered IRQ line. The interrupt keeps firing as
    /// long as the line is high and the I flag is clear.
    pub fn set_irq(&self, level: bool) {
        self.irq_line.store(level, Ordering::SeqCst);
    }

    pub fn nmi_pending(&self) -> bool {
        self.nmi_latch.load(Ordering::SeqCst)
    }

    pub fn irq_asserted(&self) -> bool {
        self.irq_line.load(Ordering::SeqCst)
    }

    fn take_nmi(&self) -> bool {
        self.nmi_latch.swap(false, Ordering::SeqCst)
    }
}

/// Everything the trace hook gets to see: the machine state as it stood
/// when the opcode at `pc` was decoded, before the operand was resolved.
#[derive(Debug, Clone, Copy)]
pub struct TraceEvent {
    pub pc: u16,
    pub opcode: u8,
    pub mnemonic: Mnemonic,
    pub addressing_mode: AddressingMode,
    pub accumulator: u8,
    pub x_register: u8,
    pub y_register: u8,
    pub stack_pointer: u8,
    pub status: u8,
    pub cycles_so_far: u64,
}

type TraceHook = Box<dyn FnMut(&TraceEvent)>;

/// The operand of the current instruction after the addressing mode has been
/// applied: where it lives (if anywhere), what was read (if anything), and
/// whether the address calculation carried into the next page.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedOperand {
    pub value: Option<u8>,
    pub address: Option<u16>,
    pub page_crossed: bool,
}

impl ResolvedOperand {
    pub(crate) fn none() -> Self {
        Self {
            value: None,
            address: None,
            page_crossed: false,
        }
    }

    pub(crate) fn with_value(value: u8) -> Self {
        Self {
            value: Some(value),
            ..Self::none()
        }
    }

    pub(crate) fn with_address(address: u16) -> Self {
        Self {
            address: Some(address),
            ..Self::none()
        }
    }
}

/// A resumable copy of the whole machine: registers, cycle counter, memory
/// image and interrupt lines. Restoring one yields a bit-exact continuation.
#[derive(Clone)]
pub struct Snapshot {
    pub accumulator: u8,
    pub x_register: u8,
    pub y_register: u8,
    pub stack_pointer: u8,
    pub program_counter: u16,
    pub status: u8,
    pub cycles: u64,
    pub memory: Box<[u8; 0x10000]>,
    pub nmi_pending: bool,
    pub irq_asserted: bool,
    pub reset_performed: bool,
}

pub struct CPU<B: MemoryBus> {
    // More info about the 6502 registers can be found here:
    // https://www.nesdev.org/obelisk-6502-guide/registers.html

    // The program counter is a 16 bit register that holds the memory address
    // of the next instruction to be executed.
    pub(crate) program_counter: u16,

    // The stack pointer is an 8 bit register holding the low 8 bits of the
    // next free location on the stack. The stack itself is fixed at page 1
    // (0x0100 - 0x01FF) and grows downwards.
    pub(crate) stack_pointer: u8,

    // The accumulator is an 8 bit register used for arithmetic and logical
    // operations.
    pub(crate) accumulator: u8,

    // The index registers, most commonly used for counters and memory
    // offsets.
    pub(crate) x_register: u8,
    pub(crate) y_register: u8,

    pub(crate) status_register: StatusFlags,

    // Global cycle counter. Monotonically increasing, never reset.
    pub(crate) cycles: u64,

    pub(crate) bus: B,

    config: CpuConfig,
    run_state: RunState,
    interrupts: Arc<InterruptLines>,
    trace_hook: Option<TraceHook>,
}

/// Builds a CPU in its power-on state with the default (NMOS, lenient)
/// configuration. It must be `reset()` before it can step.
pub fn new_cpu<B: MemoryBus>(bus: B) -> CPU<B> {
    CPU::new(bus)
}

pub fn new_cpu_with_config<B: MemoryBus>(bus: B, config: CpuConfig) -> CPU<B> {
    CPU::with_config(bus, config)
}

impl<B: MemoryBus> CPU<B> {
    pub(crate) const STACK_BASE_ADDRESS: u16 = 0x0100;
    pub(crate) const STACK_POINTER_AFTER_RESET: u8 = 0xFD;
    pub(crate) const NMI_VECTOR_ADDRESS: u16 = 0xFFFA;
    pub(crate) const RESET_VECTOR_ADDRESS: u16 = 0xFFFC;
    pub(crate) const IRQ_VECTOR_ADDRESS: u16 = 0xFFFE;
    // Vector entry always costs 7 cycles, reset included.
    pub(crate) const INTERRUPT_ENTRY_CYCLES: u8 = 7;

    pub fn new(bus: B) -> Self {
        Self::with_config(bus, CpuConfig::default())
    }

    pub fn with_config(bus: B, config: CpuConfig) -> Self {
        Self {
            program_counter: 0x0000,
            stack_pointer: 0x00,
            accumulator: 0x00,
            x_register: 0x00,
            y_register: 0x00,
            status_register: StatusFlags::UNUSED | StatusFlags::IRQ_DISABLE,
            cycles: 0,
            bus,
            config,
            run_state: RunState::ResetPending,
            interrupts: Arc::new(InterruptLines::default()),
            trace_hook: None,
        }
    }

    // Read-only inspectors.

    pub fn accumulator(&self) -> u8 {
        self.accumulator
    }

    pub fn x_register(&self) -> u8 {
        self.x_register
    }

    pub fn y_register(&self) -> u8 {
        self.y_register
    }

    pub fn program_counter(&self) -> u16 {
        self.program_counter
    }

    pub fn stack_pointer(&self) -> u8 {
        self.stack_pointer
    }

    /// The packed status register. Bit 5 always reads 1, bit 4 always 0.
    pub fn status(&self) -> u8 {
        self.status_register.bits()
    }

    pub fn cycles_total(&self) -> u64 {
        self.cycles
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// A handle to the NMI/IRQ lines that can be moved to another thread.
    pub fn interrupt_lines(&self) -> Arc<InterruptLines> {
        Arc::clone(&self.interrupts)
    }

    pub fn raise_nmi(&self) {
        self.interrupts.raise_nmi();
    }

    pub fn set_irq(&self, level: bool) {
        self.interrupts.set_irq(level);
    }

    /// Installs an observer called once per instruction, after decode and
    /// before execution. The hook sees a snapshot of the registers and
    /// cannot mutate the CPU; installing one does not change cycle
    /// accounting or instruction behavior.
    pub fn register_trace_hook(&mut self, hook: impl FnMut(&TraceEvent) + 'static) {
        self.trace_hook = Some(Box::new(hook));
    }

    pub fn clear_trace_hook(&mut self) {
        self.trace_hook = None;
    }

    // Bus access helpers. All CPU reads and writes funnel through these.

    pub(crate) fn read_u8(&mut self, addr: u16) -> u8 {
        self.bus.read_u8(addr)
    }

    pub(crate) fn write_u8(&mut self, addr: u16, value: u8) {
        self.bus.write_u8(addr, value);
    }

    pub(crate) fn read_u16(&mut self, addr: u16) -> u16 {
        // Little-endian: low byte at addr, high byte at addr + 1.
        let low = self.read_u8(addr);
        let high = self.read_u8(addr.wrapping_add(1));
        u16::from_le_bytes([low, high])
    }

    /// Reads the byte at PC and advances PC past it.
    fn fetch_u8(&mut self) -> u8 {
        let value = self.read_u8(self.program_counter);
        self.program_counter = self.program_counter.wrapping_add(1);
        value
    }

    fn fetch_u16(&mut self) -> u16 {
        let low = self.fetch_u8();
        let high = self.fetch_u8();
        u16::from_le_bytes([low, high])
    }

    // Status flag helpers.

    pub(crate) fn get_flag(&self, flag: StatusFlags) -> bool {
        self.status_register.contains(flag)
    }

    pub(crate) fn set_flag(&mut self, flag: StatusFlags, value: bool) {
        self.status_register.set(flag, value);
    }

    /// Sets N from bit 7 of the value and Z from the value being zero.
    /// Nearly every instruction that produces a result ends with this.
    pub(crate) fn update_nz(&mut self, value: u8) {
        self.set_flag(StatusFlags::ZERO, value == 0);
        self.set_flag(StatusFlags::NEGATIVE, value & 0x80 != 0);
    }

    /// True when ADC/SBC should run their BCD path: the D flag is set and
    /// the variant actually wired up the decimal unit.
    pub(crate) fn decimal_arithmetic(&self) -> bool {
        if !self.get_flag(StatusFlags::DECIMAL) {
            return false;
        }
        match self.config.variant {
            Variant::Nmos6502 => true,
            Variant::Ricoh2A03 => {
                log::warn!("decimal flag is set but the 2A03 has no BCD unit; adding in binary");
                false
            }
        }
    }

    // Stack engine. The stack lives in page 1 and SP wraps silently within
    // it; running the stack past either end is architectural, not an error.

    /// Pushes a byte onto the stack.
    pub(crate) fn push_u8(&mut self, value: u8) {
        let stack_addr = Self::STACK_BASE_ADDRESS | self.stack_pointer as u16;
        self.write_u8(stack_addr, value);
        self.stack_pointer = self.stack_pointer.wrapping_sub(1);
    }

    /// Pushes a 16-bit word onto the stack, high byte first, so the word
    /// ends up stored little-endian at the lower address.
    pub(crate) fn push_u16(&mut self, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.push_u8(high);
        self.push_u8(low);
    }

    /// Pops a byte from the stack.
    pub(crate) fn pop_u8(&mut self) -> u8 {
        self.stack_pointer = self.stack_pointer.wrapping_add(1);
        let stack_addr = Self::STACK_BASE_ADDRESS | self.stack_pointer as u16;
        self.read_u8(stack_addr)
    }

    /// Pops a 16-bit word from the stack: low byte first, then high.
    pub(crate) fn pop_u16(&mut self) -> u16 {
        let low = self.pop_u8();
        let high = self.pop_u8();
        u16::from_le_bytes([low, high])
    }

    /// Hardware reset: load PC from the reset vector, park SP at 0xFD and
    /// mask IRQs. A, X, Y and the other flags keep whatever they held.
    pub fn reset(&mut self) {
        self.stack_pointer = Self::STACK_POINTER_AFTER_RESET;
        self.status_register.insert(StatusFlags::IRQ_DISABLE);
        self.program_counter = self.read_u16(Self::RESET_VECTOR_ADDRESS);
        self.cycles += Self::INTERRUPT_ENTRY_CYCLES as u64;
        self.run_state = RunState::Ready;
    }

    /// Executes exactly one instruction, or one interrupt entry, and returns
    /// the cycles it consumed.
    pub fn step(&mut self) -> Result<u8, CpuError> {
        if self.run_state != RunState::Ready {
            return Err(CpuError::ResetNotPerformed);
        }

        // Interrupts are only sampled at instruction boundaries. NMI wins
        // over IRQ, and the NMI latch clears as it is serviced; the IRQ line
        // stays up and will fire again unless the handler quiets it.
        if self.interrupts.take_nmi() {
            log::debug!("servicing NMI at pc={:#06X}", self.program_counter);
            return Ok(self.service_interrupt(Self::NMI_VECTOR_ADDRESS));
        }
        if self.interrupts.irq_asserted() && !self.get_flag(StatusFlags::IRQ_DISABLE) {
            log::debug!("servicing IRQ at pc={:#06X}", self.program_counter);
            return Ok(self.service_interrupt(Self::IRQ_VECTOR_ADDRESS));
        }

        let pc_at_fetch = self.program_counter;
        let opcode = self.read_u8(pc_at_fetch);
        let operand_info = decode(opcode);

        if self.config.strict_decode && !operand_info.documented {
            return Err(CpuError::IllegalOpcode {
                opcode,
                pc: pc_at_fetch,
            });
        }

        self.program_counter = pc_at_fetch.wrapping_add(1);

        if let Some(hook) = self.trace_hook.as_mut() {
            let event = TraceEvent {
                pc: pc_at_fetch,
                opcode,
                mnemonic: operand_info.mnemonic,
                addressing_mode: operand_info.addressing_mode,
                accumulator: self.accumulator,
                x_register: self.x_register,
                y_register: self.y_register,
                stack_pointer: self.stack_pointer,
                status: self.status_register.bits(),
                cycles_so_far: self.cycles,
            };
            hook(&event);
        }

        let mut operand = self.resolve_operand(operand_info.addressing_mode);

        // Fetch the operand byte for instructions that consume one. Stores,
        // jumps and branches never issue this read.
        if operand.value.is_none() && operand_info.mnemonic.reads_operand() {
            if let Some(address) = operand.address {
                operand.value = Some(self.read_u8(address));
            }
        }

        let extra_cycles = self.dispatch(operand_info.mnemonic, &operand);

        let mut consumed = operand_info.cycles + extra_cycles;
        if operand.page_crossed && operand_info.page_cross_extra {
            consumed += 1;
        }
        self.cycles += consumed as u64;

        Ok(consumed)
    }

    /// Steps until at least `budget` cycles have been consumed and returns
    /// the exact amount, which may overshoot by the tail of the last
    /// instruction.
    pub fn step_for(&mut self, budget: u64) -> Result<u64, CpuError> {
        let mut consumed: u64 = 0;
        while consumed < budget {
            consumed += self.step()? as u64;
        }
        Ok(consumed)
    }

    /// Common entry sequence for NMI and IRQ: the return address and a copy
    /// of P (B clear, unused set) go to the stack, further IRQs are masked,
    /// and execution continues at the handler named by the vector.
    fn service_interrupt(&mut self, vector: u16) -> u8 {
        self.push_u16(self.program_counter);
        let pushed = (self.status_register - StatusFlags::BREAK) | StatusFlags::UNUSED;
        self.push_u8(pushed.bits());
        self.set_flag(StatusFlags::IRQ_DISABLE, true);
        self.program_counter = self.read_u16(vector);
        self.cycles += Self::INTERRUPT_ENTRY_CYCLES as u64;
        Self::INTERRUPT_ENTRY_CYCLES
    }

    /// Applies an addressing mode: fetches the operand bytes after the
    /// opcode, computes the effective address and flags page crossings.
    /// PC ends up past the whole instruction.
    fn resolve_operand(&mut self, mode: AddressingMode) -> ResolvedOperand {
        match mode {
            // No operand; the instruction's target is implied.
            AddressingMode::Implicit => ResolvedOperand::none(),

            // The operand is the accumulator itself.
            AddressingMode::Accumulator => ResolvedOperand::with_value(self.accumulator),

            // The operand byte follows the opcode directly.
            AddressingMode::Immediate => {
                let address = self.program_counter;
                let value = self.fetch_u8();
                ResolvedOperand {
                    value: Some(value),
                    address: Some(address),
                    page_crossed: false,
                }
            }

            AddressingMode::ZeroPage => ResolvedOperand::with_address(self.fetch_u8() as u16),

            // Zero page indexing wraps within page 0: the carry out of the
            // 8-bit add is discarded.
            AddressingMode::ZeroPageX => {
                let base = self.fetch_u8();
                ResolvedOperand::with_address(base.wrapping_add(self.x_register) as u16)
            }

            AddressingMode::ZeroPageY => {
                let base = self.fetch_u8();
                ResolvedOperand::with_address(base.wrapping_add(self.y_register) as u16)
            }

            // Branch target: a signed offset from the address of the next
            // instruction. Crossing a page relative to that address costs
            // the branch an extra cycle if taken.
            AddressingMode::Relative => {
                let offset = self.fetch_u8() as i8;
                let base = self.program_counter;
                let target = base.wrapping_add(offset as u16);
                ResolvedOperand {
                    value: None,
                    address: Some(target),
                    page_crossed: Self::crosses_page_boundary(base, target),
                }
            }

            AddressingMode::Absolute => ResolvedOperand::with_address(self.fetch_u16()),

            AddressingMode::AbsoluteX => {
                let base = self.fetch_u16();
                let address = base.wrapping_add(self.x_register as u16);
                ResolvedOperand {
                    value: None,
                    address: Some(address),
                    page_crossed: Self::crosses_page_boundary(base, address),
                }
            }

            AddressingMode::AbsoluteY => {
                let base = self.fetch_u16();
                let address = base.wrapping_add(self.y_register as u16);
                ResolvedOperand {
                    value: None,
                    address: Some(address),
                    page_crossed: Self::crosses_page_boundary(base, address),
                }
            }

            // Only JMP uses this. 6502 hardware bug: when the pointer sits
            // at the end of a page, the high byte of the target is fetched
            // from the start of the *same* page, not the next one.
            AddressingMode::Indirect => {
                let pointer = self.fetch_u16();
                let low = self.read_u8(pointer);
                let high_addr = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
                let high = self.read_u8(high_addr);
                ResolvedOperand::with_address(u16::from_le_bytes([low, high]))
            }

            // ($zp,X): index the zero-page pointer location first, then
            // follow it. Both the index add and the pointer's second byte
            // wrap within page 0.
            AddressingMode::IndirectX => {
                let zp = self.fetch_u8().wrapping_add(self.x_register);
                let low = self.read_u8(zp as u16);
                let high = self.read_u8(zp.wrapping_add(1) as u16);
                ResolvedOperand::with_address(u16::from_le_bytes([low, high]))
            }

            // ($zp),Y: follow the zero-page pointer first, then index the
            // 16-bit result. The page crossing is measured against the
            // unindexed base.
            AddressingMode::IndirectY => {
                let zp = self.fetch_u8();
                let low = self.read_u8(zp as u16);
                let high = self.read_u8(zp.wrapping_add(1) as u16);
                let base = u16::from_le_bytes([low, high]);
                let address = base.wrapping_add(self.y_register as u16);
                ResolvedOperand {
                    value: None,
                    address: Some(address),
                    page_crossed: Self::crosses_page_boundary(base, address),
                }
            }
        }
    }

    fn crosses_page_boundary(base: u16, offset: u16) -> bool {
        let [_, base_page] = base.to_le_bytes();
        let [_, offset_page] = offset.to_le_bytes();
        base_page != offset_page
    }

    /// Branch helper shared by the eight conditional branches. Returns the
    /// extra cycles: 0 if not taken, 1 if taken, 2 if taken across a page.
    pub(crate) fn branch_on(&mut self, condition: bool, operand: &ResolvedOperand) -> u8 {
        if !condition {
            return 0;
        }
        let target = operand
            .address
            .expect("BUG: branch target should be present");
        self.program_counter = target;
        if operand.page_crossed { 2 } else { 1 }
    }

    /// Read-modify-write tail: shifts and rotates land their result either
    /// back in memory or in A, depending on the addressing mode.
    pub(crate) fn write_back(&mut self, operand: &ResolvedOperand, result: u8) {
        match operand.address {
            Some(address) => self.write_u8(address, result),
            None => self.accumulator = result,
        }
    }

    fn dispatch(&mut self, mnemonic: Mnemonic, operand: &ResolvedOperand) -> u8 {
        match mnemonic {
            Mnemonic::ADC => self.handle_adc(operand),
            Mnemonic::AND => self.handle_and(operand),
            Mnemonic::ASL => self.handle_asl(operand),
            Mnemonic::BCC => self.handle_bcc(operand),
            Mnemonic::BCS => self.handle_bcs(operand),
            Mnemonic::BEQ => self.handle_beq(operand),
            Mnemonic::BIT => self.handle_bit(operand),
            Mnemonic::BMI => self.handle_bmi(operand),
            Mnemonic::BNE => self.handle_bne(operand),
            Mnemonic::BPL => self.handle_bpl(operand),
            Mnemonic::BRK => self.handle_brk(operand),
            Mnemonic::BVC => self.handle_bvc(operand),
            Mnemonic::BVS => self.handle_bvs(operand),
            Mnemonic::CLC => self.handle_clc(operand),
            Mnemonic::CLD => self.handle_cld(operand),
            Mnemonic::CLI => self.handle_cli(operand),
            Mnemonic::CLV => self.handle_clv(operand),
            Mnemonic::CMP => self.handle_cmp(operand),
            Mnemonic::CPX => self.handle_cpx(operand),
            Mnemonic::CPY => self.handle_cpy(operand),
            Mnemonic::DEC => self.handle_dec(operand),
            Mnemonic::DEX => self.handle_dex(operand),
            Mnemonic::DEY => self.handle_dey(operand),
            Mnemonic::EOR => self.handle_eor(operand),
            Mnemonic::INC => self.handle_inc(operand),
            Mnemonic::INX => self.handle_inx(operand),
            Mnemonic::INY => self.handle_iny(operand),
            Mnemonic::JMP => self.handle_jmp(operand),
            Mnemonic::JSR => self.handle_jsr(operand),
            Mnemonic::LDA => self.handle_lda(operand),
            Mnemonic::LDX => self.handle_ldx(operand),
            Mnemonic::LDY => self.handle_ldy(operand),
            Mnemonic::LSR => self.handle_lsr(operand),
            Mnemonic::NOP => self.handle_nop(operand),
            Mnemonic::ORA => self.handle_ora(operand),
            Mnemonic::PHA => self.handle_pha(operand),
            Mnemonic::PHP => self.handle_php(operand),
            Mnemonic::PLA => self.handle_pla(operand),
            Mnemonic::PLP => self.handle_plp(operand),
            Mnemonic::ROL => self.handle_rol(operand),
            Mnemonic::ROR => self.handle_ror(operand),
            Mnemonic::RTI => self.handle_rti(operand),
            Mnemonic::RTS => self.handle_rts(operand),
            Mnemonic::SBC => self.handle_sbc(operand),
            Mnemonic::SEC => self.handle_sec(operand),
            Mnemonic::SED => self.handle_sed(operand),
            Mnemonic::SEI => self.handle_sei(operand),
            Mnemonic::STA => self.handle_sta(operand),
            Mnemonic::STX => self.handle_stx(operand),
            Mnemonic::STY => self.handle_sty(operand),
            Mnemonic::TAX => self.handle_tax(operand),
            Mnemonic::TAY => self.handle_tay(operand),
            Mnemonic::TSX => self.handle_tsx(operand),
            Mnemonic::TXA => self.handle_txa(operand),
            Mnemonic::TXS => self.handle_txs(operand),
            Mnemonic::TYA => self.handle_tya(operand),
        }
    }
}

impl CPU<FlatMemory> {
    /// Captures the full machine state. Only offered for the flat-RAM bus,
    /// where the memory image is the whole truth; buses with device state
    /// need their own persistence.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            accumulator: self.accumulator,
            x_register: self.x_register,
            y_register: self.y_register,
            stack_pointer: self.stack_pointer,
            program_counter: self.program_counter,
            status: self.status_register.bits(),
            cycles: self.cycles,
            memory: Box::new(*self.bus.image()),
            nmi_pending: self.interrupts.nmi_pending(),
            irq_asserted: self.interrupts.irq_asserted(),
            reset_performed: self.run_state == RunState::Ready,
        }
    }

    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.accumulator = snapshot.accumulator;
        self.x_register = snapshot.x_register;
        self.y_register = snapshot.y_register;
        self.stack_pointer = snapshot.stack_pointer;
        self.program_counter = snapshot.program_counter;
        self.status_register = StatusFlags::from_bits_truncate(snapshot.status);
        self.cycles = snapshot.cycles;
        self.bus.load_image(&snapshot.memory);
        self.interrupts.set_irq(snapshot.irq_asserted);
        if snapshot.nmi_pending {
            self.interrupts.raise_nmi();
        } else {
            self.interrupts.take_nmi();
        }
        self.run_state = if snapshot.reset_performed {
            RunState::Ready
        } else {
            RunState::ResetPending
        };
    }
}
