use once_cell::sync::Lazy;
use phf::phf_map;

/// The thirteen ways a 6502 instruction can name its operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Absolute,    // e.g. LDA $1234
    AbsoluteX,   // e.g. LDA $1234,X
    AbsoluteY,   // e.g. LDA $1234,Y
    Accumulator, // e.g. ASL A
    Immediate,   // e.g. LDA #$10
    Implicit,    // e.g. CLC, INX (no operand)
    Indirect,    // e.g. JMP ($1234)
    IndirectX,   // e.g. LDA ($10,X)
    IndirectY,   // e.g. LDA ($10),Y
    Relative,    // e.g. BEQ +5
    ZeroPage,    // e.g. LDA $10
    ZeroPageX,   // e.g. LDA $10,X
    ZeroPageY,   // e.g. LDX $10,Y
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub fn operand_length(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// Total instruction length including the opcode byte.
    pub fn instruction_length(self) -> u8 {
        1 + self.operand_length()
    }
}

/// The 56 documented instructions.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[rustfmt::skip]
pub enum Mnemonic {
    ADC, AND, ASL, BCC, BCS, BEQ, BIT, BMI, BNE, BPL, BRK, BVC, BVS, CLC,
    CLD, CLI, CLV, CMP, CPX, CPY, DEC, DEX, DEY, EOR, INC, INX, INY, JMP,
    JSR, LDA, LDX, LDY, LSR, NOP, ORA, PHA, PHP, PLA, PLP, ROL, ROR, RTI,
    RTS, SBC, SEC, SED, SEI, STA, STX, STY, TAX, TAY, TSX, TXA, TXS, TYA,
}

impl Mnemonic {
    /// Whether the instruction consumes the byte at its effective address.
    /// Stores, jumps and branches only use the address itself, so the CPU
    /// never issues a read for them (memory-mapped reads can have side
    /// effects). Everything else with an effective address reads it, NOP
    /// included: the undocumented multi-byte NOPs do perform the fetch on
    /// real hardware.
    pub(crate) fn reads_operand(self) -> bool {
        !matches!(
            self,
            Mnemonic::STA
                | Mnemonic::STX
                | Mnemonic::STY
                | Mnemonic::JMP
                | Mnemonic::JSR
                | Mnemonic::BCC
                | Mnemonic::BCS
                | Mnemonic::BEQ
                | Mnemonic::BMI
                | Mnemonic::BNE
                | Mnemonic::BPL
                | Mnemonic::BVC
                | Mnemonic::BVS
        )
    }
}

/// One decoded opcode: which instruction, how it addresses its operand, how
/// long it is and what it costs. `page_cross_extra` marks the opcodes that
/// pay one extra cycle when their indexed address calculation crosses a page
/// boundary. `documented` distinguishes the 151 official opcodes from the
/// placeholder rows synthesized for the rest of the 256 byte values.
#[derive(Debug, Clone, Copy)]
pub struct Operand {
    pub opcode: u8,
    pub mnemonic: Mnemonic,
    pub addressing_mode: AddressingMode,
    pub bytes: u8,
    pub cycles: u8,
    pub page_cross_extra: bool,
    pub documented: bool,
}

impl Operand {
    /// Placeholder decoding for an undocumented opcode: a NOP of the length
    /// and cost its encoding row implies. The shapes below are the
    /// undocumented NOP rows of the opcode matrix; every other byte
    /// (the KIL/JAM bytes and the illegal read-modify-write combos) falls
    /// back to a one-byte, two-cycle NOP.
    fn undocumented(opcode: u8) -> Operand {
        let (addressing_mode, cycles, page_cross_extra) = match opcode {
            0x80 | 0x82 | 0x89 | 0xC2 | 0xE2 => (AddressingMode::Immediate, 2, false),
            0x04 | 0x44 | 0x64 => (AddressingMode::ZeroPage, 3, false),
            0x14 | 0x34 | 0x54 | 0x74 | 0xD4 | 0xF4 => (AddressingMode::ZeroPageX, 4, false),
            0x0C => (AddressingMode::Absolute, 4, false),
            0x1C | 0x3C | 0x5C | 0x7C | 0xDC | 0xFC => (AddressingMode::AbsoluteX, 4, true),
            0x1A | 0x3A | 0x5A | 0x7A | 0xDA | 0xFA => (AddressingMode::Implicit, 2, false),
            _ => (AddressingMode::Implicit, 2, false),
        };

        Operand {
            opcode,
            mnemonic: Mnemonic::NOP,
            addressing_mode,
            bytes: addressing_mode.instruction_length(),
            cycles,
            page_cross_extra,
            documented: false,
        }
    }
}

// List of all documented opcodes and their corresponding Operand definitions.
// Cycle counts follow the MOS data sheet; opcodes that pay +1 on a page
// crossing carry `page_cross_extra: true`. Branches handle their own taken /
// crossed extras, so their rows stay at the base cost of 2.
#[rustfmt::skip]
static OPERAND_MAP: phf::Map<u8, Operand> = phf_map! {
    // ADC Instructions
    0x69u8 => Operand { opcode: 0x69, mnemonic: Mnemonic::ADC, addressing_mode: AddressingMode::Immediate, bytes: 2, cycles: 2, page_cross_extra: false, documented: true },
    0x65u8 => Operand { opcode: 0x65, mnemonic: Mnemonic::ADC, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3, page_cross_extra: false, documented: true },
    0x75u8 => Operand { opcode: 0x75, mnemonic: Mnemonic::ADC, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 4, page_cross_extra: false, documented: true },
    0x6Du8 => Operand { opcode: 0x6D, mnemonic: Mnemonic::ADC, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4, page_cross_extra: false, documented: true },
    0x7Du8 => Operand { opcode: 0x7D, mnemonic: Mnemonic::ADC, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 4, page_cross_extra: true, documented: true },
    0x79u8 => Operand { opcode: 0x79, mnemonic: Mnemonic::ADC, addressing_mode: AddressingMode::AbsoluteY, bytes: 3, cycles: 4, page_cross_extra: true, documented: true },
    0x61u8 => Operand { opcode: 0x61, mnemonic: Mnemonic::ADC, addressing_mode: AddressingMode::IndirectX, bytes: 2, cycles: 6, page_cross_extra: false, documented: true },
    0x71u8 => Operand { opcode: 0x71, mnemonic: Mnemonic::ADC, addressing_mode: AddressingMode::IndirectY, bytes: 2, cycles: 5, page_cross_extra: true, documented: true },

    // AND Instructions
    0x29u8 => Operand { opcode: 0x29, mnemonic: Mnemonic::AND, addressing_mode: AddressingMode::Immediate, bytes: 2, cycles: 2, page_cross_extra: false, documented: true },
    0x25u8 => Operand { opcode: 0x25, mnemonic: Mnemonic::AND, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3, page_cross_extra: false, documented: true },
    0x35u8 => Operand { opcode: 0x35, mnemonic: Mnemonic::AND, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 4, page_cross_extra: false, documented: true },
    0x2Du8 => Operand { opcode: 0x2D, mnemonic: Mnemonic::AND, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4, page_cross_extra: false, documented: true },
    0x3Du8 => Operand { opcode: 0x3D, mnemonic: Mnemonic::AND, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 4, page_cross_extra: true, documented: true },
    0x39u8 => Operand { opcode: 0x39, mnemonic: Mnemonic::AND, addressing_mode: AddressingMode::AbsoluteY, bytes: 3, cycles: 4, page_cross_extra: true, documented: true },
    0x21u8 => Operand { opcode: 0x21, mnemonic: Mnemonic::AND, addressing_mode: AddressingMode::IndirectX, bytes: 2, cycles: 6, page_cross_extra: false, documented: true },
    0x31u8 => Operand { opcode: 0x31, mnemonic: Mnemonic::AND, addressing_mode: AddressingMode::IndirectY, bytes: 2, cycles: 5, page_cross_extra: true, documented: true },

    // ASL Instructions
    0x0Au8 => Operand { opcode: 0x0A, mnemonic: Mnemonic::ASL, addressing_mode: AddressingMode::Accumulator, bytes: 1, cycles: 2, page_cross_extra: false, documented: true },
    0x06u8 => Operand { opcode: 0x06, mnemonic: Mnemonic::ASL, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 5, page_cross_extra: false, documented: true },
    0x16u8 => Operand { opcode: 0x16, mnemonic: Mnemonic::ASL, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 6, page_cross_extra: false, documented: true },
    0x0Eu8 => Operand { opcode: 0x0E, mnemonic: Mnemonic::ASL, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 6, page_cross_extra: false, documented: true },
    0x1Eu8 => Operand { opcode: 0x1E, mnemonic: Mnemonic::ASL, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 7, page_cross_extra: false, documented: true },

    // Branch Instructions (base 2 cycles; +1 taken, +1 more on page cross)
    0x90u8 => Operand { opcode: 0x90, mnemonic: Mnemonic::BCC, addressing_mode: AddressingMode::Relative, bytes: 2, cycles: 2, page_cross_extra: false, documented: true },
    0xB0u8 => Operand { opcode: 0xB0, mnemonic: Mnemonic::BCS, addressing_mode: AddressingMode::Relative, bytes: 2, cycles: 2, page_cross_extra: false, documented: true },
    0xF0u8 => Operand { opcode: 0xF0, mnemonic: Mnemonic::BEQ, addressing_mode: AddressingMode::Relative, bytes: 2, cycles: 2, page_cross_extra: false, documented: true },
    0x30u8 => Operand { opcode: 0x30, mnemonic: Mnemonic::BMI, addressing_mode: AddressingMode::Relative, bytes: 2, cycles: 2, page_cross_extra: false, documented: true },
    0xD0u8 => Operand { opcode: 0xD0, mnemonic: Mnemonic::BNE, addressing_mode: AddressingMode::Relative, bytes: 2, cycles: 2, page_cross_extra: false, documented: true },
    0x10u8 => Operand { opcode: 0x10, mnemonic: Mnemonic::BPL, addressing_mode: AddressingMode::Relative, bytes: 2, cycles: 2, page_cross_extra: false, documented: true },
    0x50u8 => Operand { opcode: 0x50, mnemonic: Mnemonic::BVC, addressing_mode: AddressingMode::Relative, bytes: 2, cycles: 2, page_cross_extra: false, documented: true },
    0x70u8 => Operand { opcode: 0x70, mnemonic: Mnemonic::BVS, addressing_mode: AddressingMode::Relative, bytes: 2, cycles: 2, page_cross_extra: false, documented: true },

    // BIT Instructions
    0x24u8 => Operand { opcode: 0x24, mnemonic: Mnemonic::BIT, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3, page_cross_extra: false, documented: true },
    0x2Cu8 => Operand { opcode: 0x2C, mnemonic: Mnemonic::BIT, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4, page_cross_extra: false, documented: true },

    // BRK Instruction
    0x00u8 => Operand { opcode: 0x00, mnemonic: Mnemonic::BRK, addressing_mode: AddressingMode::Implicit, bytes: 1, cycles: 7, page_cross_extra: false, documented: true },

    // Flag Instructions
    0x18u8 => Operand { opcode: 0x18, mnemonic: Mnemonic::CLC, addressing_mode: AddressingMode::Implicit, bytes: 1, cycles: 2, page_cross_extra: false, documented: true },
    0xD8u8 => Operand { opcode: 0xD8, mnemonic: Mnemonic::CLD, addressing_mode: AddressingMode::Implicit, bytes: 1, cycles: 2, page_cross_extra: false, documented: true },
    0x58u8 => Operand { opcode: 0x58, mnemonic: Mnemonic::CLI, addressing_mode: AddressingMode::Implicit, bytes: 1, cycles: 2, page_cross_extra: false, documented: true },
    0xB8u8 => Operand { opcode: 0xB8, mnemonic: Mnemonic::CLV, addressing_mode: AddressingMode::Implicit, bytes: 1, cycles: 2, page_cross_extra: false, documented: true },
    0x38u8 => Operand { opcode: 0x38, mnemonic: Mnemonic::SEC, addressing_mode: AddressingMode::Implicit, bytes: 1, cycles: 2, page_cross_extra: false, documented: true },
    0xF8u8 => Operand { opcode: 0xF8, mnemonic: Mnemonic::SED, addressing_mode: AddressingMode::Implicit, bytes: 1, cycles: 2, page_cross_extra: false, documented: true },
    0x78u8 => Operand { opcode: 0x78, mnemonic: Mnemonic::SEI, addressing_mode: AddressingMode::Implicit, bytes: 1, cycles: 2, page_cross_extra: false, documented: true },

    // CMP Instructions
    0xC9u8 => Operand { opcode: 0xC9, mnemonic: Mnemonic::CMP, addressing_mode: AddressingMode::Immediate, bytes: 2, cycles: 2, page_cross_extra: false, documented: true },
    0xC5u8 => Operand { opcode: 0xC5, mnemonic: Mnemonic::CMP, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3, page_cross_extra: false, documented: true },
    0xD5u8 => Operand { opcode: 0xD5, mnemonic: Mnemonic::CMP, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 4, page_cross_extra: false, documented: true },
    0xCDu8 => Operand { opcode: 0xCD, mnemonic: Mnemonic::CMP, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4, page_cross_extra: false, documented: true },
    0xDDu8 => Operand { opcode: 0xDD, mnemonic: Mnemonic::CMP, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 4, page_cross_extra: true, documented: true },
    0xD9u8 => Operand { opcode: 0xD9, mnemonic: Mnemonic::CMP, addressing_mode: AddressingMode::AbsoluteY, bytes: 3, cycles: 4, page_cross_extra: true, documented: true },
    0xC1u8 => Operand { opcode: 0xC1, mnemonic: Mnemonic::CMP, addressing_mode: AddressingMode::IndirectX, bytes: 2, cycles: 6, page_cross_extra: false, documented: true },
    0xD1u8 => Operand { opcode: 0xD1, mnemonic: Mnemonic::CMP, addressing_mode: AddressingMode::IndirectY, bytes: 2, cycles: 5, page_cross_extra: true, documented: true },

    // CPX Instructions
    0xE0u8 => Operand { opcode: 0xE0, mnemonic: Mnemonic::CPX, addressing_mode: AddressingMode::Immediate, bytes: 2, cycles: 2, page_cross_extra: false, documented: true },
    0xE4u8 => Operand { opcode: 0xE4, mnemonic: Mnemonic::CPX, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3, page_cross_extra: false, documented: true },
    0xECu8 => Operand { opcode: 0xEC, mnemonic: Mnemonic::CPX, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4, page_cross_extra: false, documented: true },

    // CPY Instructions
    0xC0u8 => Operand { opcode: 0xC0, mnemonic: Mnemonic::CPY, addressing_mode: AddressingMode::Immediate, bytes: 2, cycles: 2, page_cross_extra: false, documented: true },
    0xC4u8 => Operand { opcode: 0xC4, mnemonic: Mnemonic::CPY, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3, page_cross_extra: false, documented: true },
    0xCCu8 => Operand { opcode: 0xCC, mnemonic: Mnemonic::CPY, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4, page_cross_extra: false, documented: true },

    // DEC Instructions
    0xC6u8 => Operand { opcode: 0xC6, mnemonic: Mnemonic::DEC, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 5, page_cross_extra: false, documented: true },
    0xD6u8 => Operand { opcode: 0xD6, mnemonic: Mnemonic::DEC, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 6, page_cross_extra: false, documented: true },
    0xCEu8 => Operand { opcode: 0xCE, mnemonic: Mnemonic::DEC, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 6, page_cross_extra: false, documented: true },
    0xDEu8 => Operand { opcode: 0xDE, mnemonic: Mnemonic::DEC, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 7, page_cross_extra: false, documented: true },

    // DEX / DEY Instructions
    0xCAu8 => Operand { opcode: 0xCA, mnemonic: Mnemonic::DEX, addressing_mode: AddressingMode::Implicit, bytes: 1, cycles: 2, page_cross_extra: false, documented: true },
    0x88u8 => Operand { opcode: 0x88, mnemonic: Mnemonic::DEY, addressing_mode: AddressingMode::Implicit, bytes: 1, cycles: 2, page_cross_extra: false, documented: true },

    // EOR Instructions
    0x49u8 => Operand { opcode: 0x49, mnemonic: Mnemonic::EOR, addressing_mode: AddressingMode::Immediate, bytes: 2, cycles: 2, page_cross_extra: false, documented: true },
    0x45u8 => Operand { opcode: 0x45, mnemonic: Mnemonic::EOR, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3, page_cross_extra: false, documented: true },
    0x55u8 => Operand { opcode: 0x55, mnemonic: Mnemonic::EOR, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 4, page_cross_extra: false, documented: true },
    0x4Du8 => Operand { opcode: 0x4D, mnemonic: Mnemonic::EOR, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4, page_cross_extra: false, documented: true },
    0x5Du8 => Operand { opcode: 0x5D, mnemonic: Mnemonic::EOR, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 4, page_cross_extra: true, documented: true },
    0x59u8 => Operand { opcode: 0x59, mnemonic: Mnemonic::EOR, addressing_mode: AddressingMode::AbsoluteY, bytes: 3, cycles: 4, page_cross_extra: true, documented: true },
    0x41u8 => Operand { opcode: 0x41, mnemonic: Mnemonic::EOR, addressing_mode: AddressingMode::IndirectX, bytes: 2, cycles: 6, page_cross_extra: false, documented: true },
    0x51u8 => Operand { opcode: 0x51, mnemonic: Mnemonic::EOR, addressing_mode: AddressingMode::IndirectY, bytes: 2, cycles: 5, page_cross_extra: true, documented: true },

    // INC Instructions
    0xE6u8 => Operand { opcode: 0xE6, mnemonic: Mnemonic::INC, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 5, page_cross_extra: false, documented: true },
    0xF6u8 => Operand { opcode: 0xF6, mnemonic: Mnemonic::INC, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 6, page_cross_extra: false, documented: true },
    0xEEu8 => Operand { opcode: 0xEE, mnemonic: Mnemonic::INC, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 6, page_cross_extra: false, documented: true },
    0xFEu8 => Operand { opcode: 0xFE, mnemonic: Mnemonic::INC, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 7, page_cross_extra: false, documented: true },

    // INX / INY Instructions
    0xE8u8 => Operand { opcode: 0xE8, mnemonic: Mnemonic::INX, addressing_mode: AddressingMode::Implicit, bytes: 1, cycles: 2, page_cross_extra: false, documented: true },
    0xC8u8 => Operand { opcode: 0xC8, mnemonic: Mnemonic::INY, addressing_mode: AddressingMode::Implicit, bytes: 1, cycles: 2, page_cross_extra: false, documented: true },

    // JMP Instructions
    0x4Cu8 => Operand { opcode: 0x4C, mnemonic: Mnemonic::JMP, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 3, page_cross_extra: false, documented: true },
    0x6Cu8 => Operand { opcode: 0x6C, mnemonic: Mnemonic::JMP, addressing_mode: AddressingMode::Indirect, bytes: 3, cycles: 5, page_cross_extra: false, documented: true },

    // JSR Instruction
    0x20u8 => Operand { opcode: 0x20, mnemonic: Mnemonic::JSR, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 6, page_cross_extra: false, documented: true },

    // LDA Instructions
    0xA9u8 => Operand { opcode: 0xA9, mnemonic: Mnemonic::LDA, addressing_mode: AddressingMode::Immediate, bytes: 2, cycles: 2, page_cross_extra: false, documented: true },
    0xA5u8 => Operand { opcode: 0xA5, mnemonic: Mnemonic::LDA, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3, page_cross_extra: false, documented: true },
    0xB5u8 => Operand { opcode: 0xB5, mnemonic: Mnemonic::LDA, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 4, page_cross_extra: false, documented: true },
    0xADu8 => Operand { opcode: 0xAD, mnemonic: Mnemonic::LDA, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4, page_cross_extra: false, documented: true },
    0xBDu8 => Operand { opcode: 0xBD, mnemonic: Mnemonic::LDA, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 4, page_cross_extra: true, documented: true },
    0xB9u8 => Operand { opcode: 0xB9, mnemonic: Mnemonic::LDA, addressing_mode: AddressingMode::AbsoluteY, bytes: 3, cycles: 4, page_cross_extra: true, documented: true },
    0xA1u8 => Operand { opcode: 0xA1, mnemonic: Mnemonic::LDA, addressing_mode: AddressingMode::IndirectX, bytes: 2, cycles: 6, page_cross_extra: false, documented: true },
    0xB1u8 => Operand { opcode: 0xB1, mnemonic: Mnemonic::LDA, addressing_mode: AddressingMode::IndirectY, bytes: 2, cycles: 5, page_cross_extra: true, documented: true },

    // LDX Instructions
    0xA2u8 => Operand { opcode: 0xA2, mnemonic: Mnemonic::LDX, addressing_mode: AddressingMode::Immediate, bytes: 2, cycles: 2, page_cross_extra: false, documented: true },
    0xA6u8 => Operand { opcode: 0xA6, mnemonic: Mnemonic::LDX, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3, page_cross_extra: false, documented: true },
    0xB6u8 => Operand { opcode: 0xB6, mnemonic: Mnemonic::LDX, addressing_mode: AddressingMode::ZeroPageY, bytes: 2, cycles: 4, page_cross_extra: false, documented: true },
    0xAEu8 => Operand { opcode: 0xAE, mnemonic: Mnemonic::LDX, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4, page_cross_extra: false, documented: true },
    0xBEu8 => Operand { opcode: 0xBE, mnemonic: Mnemonic::LDX, addressing_mode: AddressingMode::AbsoluteY, bytes: 3, cycles: 4, page_cross_extra: true, documented: true },

    // LDY Instructions
    0xA0u8 => Operand { opcode: 0xA0, mnemonic: Mnemonic::LDY, addressing_mode: AddressingMode::Immediate, bytes: 2, cycles: 2, page_cross_extra: false, documented: true },
    0xA4u8 => Operand { opcode: 0xA4, mnemonic: Mnemonic::LDY, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3, page_cross_extra: false, documented: true },
    0xB4u8 => Operand { opcode: 0xB4, mnemonic: Mnemonic::LDY, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 4, page_cross_extra: false, documented: true },
    0xACu8 => Operand { opcode: 0xAC, mnemonic: Mnemonic::LDY, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4, page_cross_extra: false, documented: true },
    0xBCu8 => Operand { opcode: 0xBC, mnemonic: Mnemonic::LDY, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 4, page_cross_extra: true, documented: true },

    // LSR Instructions
    0x4Au8 => Operand { opcode: 0x4A, mnemonic: Mnemonic::LSR, addressing_mode: AddressingMode::Accumulator, bytes: 1, cycles: 2, page_cross_extra: false, documented: true },
    0x46u8 => Operand { opcode: 0x46, mnemonic: Mnemonic::LSR, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 5, page_cross_extra: false, documented: true },
    0x56u8 => Operand { opcode: 0x56, mnemonic: Mnemonic::LSR, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 6, page_cross_extra: false, documented: true },
    0x4Eu8 => Operand { opcode: 0x4E, mnemonic: Mnemonic::LSR, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 6, page_cross_extra: false, documented: true },
    0x5Eu8 => Operand { opcode: 0x5E, mnemonic: Mnemonic::LSR, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 7, page_cross_extra: false, documented: true },

    // NOP Instruction
    0xEAu8 => Operand { opcode: 0xEA, mnemonic: Mnemonic::NOP, addressing_mode: AddressingMode::Implicit, bytes: 1, cycles: 2, page_cross_extra: false, documented: true },

    // ORA Instructions
    0x09u8 => Operand { opcode: 0x09, mnemonic: Mnemonic::ORA, addressing_mode: AddressingMode::Immediate, bytes: 2, cycles: 2, page_cross_extra: false, documented: true },
    0x05u8 => Operand { opcode: 0x05, mnemonic: Mnemonic::ORA, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3, page_cross_extra: false, documented: true },
    0x15u8 => Operand { opcode: 0x15, mnemonic: Mnemonic::ORA, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 4, page_cross_extra: false, documented: true },
    0x0Du8 => Operand { opcode: 0x0D, mnemonic: Mnemonic::ORA, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4, page_cross_extra: false, documented: true },
    0x1Du8 => Operand { opcode: 0x1D, mnemonic: Mnemonic::ORA, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 4, page_cross_extra: true, documented: true },
    0x19u8 => Operand { opcode: 0x19, mnemonic: Mnemonic::ORA, addressing_mode: AddressingMode::AbsoluteY, bytes: 3, cycles: 4, page_cross_extra: true, documented: true },
    0x01u8 => Operand { opcode: 0x01, mnemonic: Mnemonic::ORA, addressing_mode: AddressingMode::IndirectX, bytes: 2, cycles: 6, page_cross_extra: false, documented: true },
    0x11u8 => Operand { opcode: 0x11, mnemonic: Mnemonic::ORA, addressing_mode: AddressingMode::IndirectY, bytes: 2, cycles: 5, page_cross_extra: true, documented: true },

    // Stack Instructions
    0x48u8 => Operand { opcode: 0x48, mnemonic: Mnemonic::PHA, addressing_mode: AddressingMode::Implicit, bytes: 1, cycles: 3, page_cross_extra: false, documented: true },
    0x08u8 => Operand { opcode: 0x08, mnemonic: Mnemonic::PHP, addressing_mode: AddressingMode::Implicit, bytes: 1, cycles: 3, page_cross_extra: false, documented: true },
    0x68u8 => Operand { opcode: 0x68, mnemonic: Mnemonic::PLA, addressing_mode: AddressingMode::Implicit, bytes: 1, cycles: 4, page_cross_extra: false, documented: true },
    0x28u8 => Operand { opcode: 0x28, mnemonic: Mnemonic::PLP, addressing_mode: AddressingMode::Implicit, bytes: 1, cycles: 4, page_cross_extra: false, documented: true },

    // ROL Instructions
    0x2Au8 => Operand { opcode: 0x2A, mnemonic: Mnemonic::ROL, addressing_mode: AddressingMode::Accumulator, bytes: 1, cycles: 2, page_cross_extra: false, documented: true },
    0x26u8 => Operand { opcode: 0x26, mnemonic: Mnemonic::ROL, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 5, page_cross_extra: false, documented: true },
    0x36u8 => Operand { opcode: 0x36, mnemonic: Mnemonic::ROL, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 6, page_cross_extra: false, documented: true },
    0x2Eu8 => Operand { opcode: 0x2E, mnemonic: Mnemonic::ROL, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 6, page_cross_extra: false, documented: true },
    0x3Eu8 => Operand { opcode: 0x3E, mnemonic: Mnemonic::ROL, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 7, page_cross_extra: false, documented: true },

    // ROR Instructions
    0x6Au8 => Operand { opcode: 0x6A, mnemonic: Mnemonic::ROR, addressing_mode: AddressingMode::Accumulator, bytes: 1, cycles: 2, page_cross_extra: false, documented: true },
    0x66u8 => Operand { opcode: 0x66, mnemonic: Mnemonic::ROR, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 5, page_cross_extra: false, documented: true },
    0x76u8 => Operand { opcode: 0x76, mnemonic: Mnemonic::ROR, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 6, page_cross_extra: false, documented: true },
    0x6Eu8 => Operand { opcode: 0x6E, mnemonic: Mnemonic::ROR, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 6, page_cross_extra: false, documented: true },
    0x7Eu8 => Operand { opcode: 0x7E, mnemonic: Mnemonic::ROR, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 7, page_cross_extra: false, documented: true },

    // RTI / RTS Instructions
    0x40u8 => Operand { opcode: 0x40, mnemonic: Mnemonic::RTI, addressing_mode: AddressingMode::Implicit, bytes: 1, cycles: 6, page_cross_extra: false, documented: true },
    0x60u8 => Operand { opcode: 0x60, mnemonic: Mnemonic::RTS, addressing_mode: AddressingMode::Implicit, bytes: 1, cycles: 6, page_cross_extra: false, documented: true },

    // SBC Instructions
    0xE9u8 => Operand { opcode: 0xE9, mnemonic: Mnemonic::SBC, addressing_mode: AddressingMode::Immediate, bytes: 2, cycles: 2, page_cross_extra: false, documented: true },
    0xE5u8 => Operand { opcode: 0xE5, mnemonic: Mnemonic::SBC, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3, page_cross_extra: false, documented: true },
    0xF5u8 => Operand { opcode: 0xF5, mnemonic: Mnemonic::SBC, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 4, page_cross_extra: false, documented: true },
    0xEDu8 => Operand { opcode: 0xED, mnemonic: Mnemonic::SBC, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4, page_cross_extra: false, documented: true },
    0xFDu8 => Operand { opcode: 0xFD, mnemonic: Mnemonic::SBC, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 4, page_cross_extra: true, documented: true },
    0xF9u8 => Operand { opcode: 0xF9, mnemonic: Mnemonic::SBC, addressing_mode: AddressingMode::AbsoluteY, bytes: 3, cycles: 4, page_cross_extra: true, documented: true },
    0xE1u8 => Operand { opcode: 0xE1, mnemonic: Mnemonic::SBC, addressing_mode: AddressingMode::IndirectX, bytes: 2, cycles: 6, page_cross_extra: false, documented: true },
    0xF1u8 => Operand { opcode: 0xF1, mnemonic: Mnemonic::SBC, addressing_mode: AddressingMode::IndirectY, bytes: 2, cycles: 5, page_cross_extra: true, documented: true },

    // STA Instructions (stores always pay the indexing cycle, never +1 more)
    0x85u8 => Operand { opcode: 0x85, mnemonic: Mnemonic::STA, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3, page_cross_extra: false, documented: true },
    0x95u8 => Operand { opcode: 0x95, mnemonic: Mnemonic::STA, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 4, page_cross_extra: false, documented: true },
    0x8Du8 => Operand { opcode: 0x8D, mnemonic: Mnemonic::STA, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4, page_cross_extra: false, documented: true },
    0x9Du8 => Operand { opcode: 0x9D, mnemonic: Mnemonic::STA, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 5, page_cross_extra: false, documented: true },
    0x99u8 => Operand { opcode: 0x99, mnemonic: Mnemonic::STA, addressing_mode: AddressingMode::AbsoluteY, bytes: 3, cycles: 5, page_cross_extra: false, documented: true },
    0x81u8 => Operand { opcode: 0x81, mnemonic: Mnemonic::STA, addressing_mode: AddressingMode::IndirectX, bytes: 2, cycles: 6, page_cross_extra: false, documented: true },
    0x91u8 => Operand { opcode: 0x91, mnemonic: Mnemonic::STA, addressing_mode: AddressingMode::IndirectY, bytes: 2, cycles: 6, page_cross_extra: false, documented: true },

    // STX Instructions
    0x86u8 => Operand { opcode: 0x86, mnemonic: Mnemonic::STX, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3, page_cross_extra: false, documented: true },
    0x96u8 => Operand { opcode: 0x96, mnemonic: Mnemonic::STX, addressing_mode: AddressingMode::ZeroPageY, bytes: 2, cycles: 4, page_cross_extra: false, documented: true },
    0x8Eu8 => Operand { opcode: 0x8E, mnemonic: Mnemonic::STX, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4, page_cross_extra: false, documented: true },

    // STY Instructions
    0x84u8 => Operand { opcode: 0x84, mnemonic: Mnemonic::STY, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3, page_cross_extra: false, documented: true },
    0x94u8 => Operand { opcode: 0x94, mnemonic: Mnemonic::STY, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 4, page_cross_extra: false, documented: true },
    0x8Cu8 => Operand { opcode: 0x8C, mnemonic: Mnemonic::STY, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4, page_cross_extra: false, documented: true },

    // Transfer Instructions
    0xAAu8 => Operand { opcode: 0xAA, mnemonic: Mnemonic::TAX, addressing_mode: AddressingMode::Implicit, bytes: 1, cycles: 2, page_cross_extra: false, documented: true },
    0xA8u8 => Operand { opcode: 0xA8, mnemonic: Mnemonic::TAY, addressing_mode: AddressingMode::Implicit, bytes: 1, cycles: 2, page_cross_extra: false, documented: true },
    0xBAu8 => Operand { opcode: 0xBA, mnemonic: Mnemonic::TSX, addressing_mode: AddressingMode::Implicit, bytes: 1, cycles: 2, page_cross_extra: false, documented: true },
    0x8Au8 => Operand { opcode: 0x8A, mnemonic: Mnemonic::TXA, addressing_mode: AddressingMode::Implicit, bytes: 1, cycles: 2, page_cross_extra: false, documented: true },
    0x9Au8 => Operand { opcode: 0x9A, mnemonic: Mnemonic::TXS, addressing_mode: AddressingMode::Implicit, bytes: 1, cycles: 2, page_cross_extra: false, documented: true },
    0x98u8 => Operand { opcode: 0x98, mnemonic: Mnemonic::TYA, addressing_mode: AddressingMode::Implicit, bytes: 1, cycles: 2, page_cross_extra: false, documented: true },
};

// Dense form of OPERAND_MAP covering every byte value, so that decode() is
// total. Built once on first use.
static DECODE_TABLE: Lazy<[Operand; 256]> = Lazy::new(|| {
    let mut table = [Operand::undocumented(0); 256];
    for opcode in 0..=0xFFu8 {
        table[opcode as usize] = match OPERAND_MAP.get(&opcode) {
            Some(operand) => *operand,
            None => Operand::undocumented(opcode),
        };
    }
    table
});

/// Decodes a single opcode byte. Total: undocumented bytes come back as NOP
/// placeholders with `documented: false`, which strict mode turns into an
/// error at the fetch site.
pub fn decode(opcode: u8) -> &'static Operand {
    &DECODE_TABLE[opcode as usize]
}
