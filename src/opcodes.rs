//! # Opcode Table
//!
//! The 256-entry opcode table maps every opcode byte to its mnemonic and
//! addressing mode:
//! - **151 documented instructions** carry `Some(OpcodeMetadata)`
//! - **105 undocumented byte values** are `None` and surface as
//!   [`ExecutionError::UnimplementedOpcode`](crate::ExecutionError) when fetched
//!
//! Dispatch in the engine is an exhaustive `match` over [`Mnemonic`], so a
//! documented instruction cannot be wired in without semantics.

use std::fmt;

use crate::addressing::AddressingMode;
use crate::addressing::AddressingMode::*;

/// Documented 6502 instruction mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = format!("{:?}", self);
        write!(f, "{}", name.to_ascii_uppercase())
    }
}

/// Static decode information for one opcode byte.
///
/// # Examples
///
/// ```
/// use engine6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = OPCODE_TABLE[0xA9].unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.size_bytes(), 2);
///
/// // Undocumented opcodes have no entry
/// assert!(OPCODE_TABLE[0x02].is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,
}

impl OpcodeMetadata {
    /// Total instruction size in bytes (opcode + operands).
    pub const fn size_bytes(&self) -> u8 {
        self.addressing_mode.size_bytes()
    }
}

const fn op(mnemonic: Mnemonic, addressing_mode: AddressingMode) -> Option<OpcodeMetadata> {
    Some(OpcodeMetadata {
        mnemonic,
        addressing_mode,
    })
}

/// A decoded instruction: opcode byte, its metadata and the raw operand.
///
/// `operand` holds the zero-extended byte for one-byte modes, the
/// little-endian word for two-byte modes and 0 otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: u8,
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
    pub operand: u16,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            Implicit => write!(f, "{}", self.mnemonic),
            Accumulator => write!(f, "{} A", self.mnemonic),
            Immediate => write!(f, "{} #${:02X}", self.mnemonic, self.operand),
            ZeroPage => write!(f, "{} ${:02X}", self.mnemonic, self.operand),
            ZeroPageX => write!(f, "{} ${:02X},X", self.mnemonic, self.operand),
            ZeroPageY => write!(f, "{} ${:02X},Y", self.mnemonic, self.operand),
            Relative => write!(f, "{} *{:+}", self.mnemonic, self.operand as u8 as i8),
            Absolute => write!(f, "{} ${:04X}", self.mnemonic, self.operand),
            AbsoluteX => write!(f, "{} ${:04X},X", self.mnemonic, self.operand),
            AbsoluteY => write!(f, "{} ${:04X},Y", self.mnemonic, self.operand),
            Indirect => write!(f, "{} (${:04X})", self.mnemonic, self.operand),
            IndirectX => write!(f, "{} (${:02X},X)", self.mnemonic, self.operand),
            IndirectY => write!(f, "{} (${:02X}),Y", self.mnemonic, self.operand),
        }
    }
}

/// Complete 256-entry opcode table indexed by opcode byte value.
pub const OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = [
    op(Mnemonic::Brk, Implicit), // 0x00
    op(Mnemonic::Ora, IndirectX), // 0x01
    None, // 0x02
    None, // 0x03
    None, // 0x04
    op(Mnemonic::Ora, ZeroPage), // 0x05
    op(Mnemonic::Asl, ZeroPage), // 0x06
    None, // 0x07
    op(Mnemonic::Php, Implicit), // 0x08
    op(Mnemonic::Ora, Immediate), // 0x09
    op(Mnemonic::Asl, Accumulator), // 0x0A
    None, // 0x0B
    None, // 0x0C
    op(Mnemonic::Ora, Absolute), // 0x0D
    op(Mnemonic::Asl, Absolute), // 0x0E
    None, // 0x0F
    op(Mnemonic::Bpl, Relative), // 0x10
    op(Mnemonic::Ora, IndirectY), // 0x11
    None, // 0x12
    None, // 0x13
    None, // 0x14
    op(Mnemonic::Ora, ZeroPageX), // 0x15
    op(Mnemonic::Asl, ZeroPageX), // 0x16
    None, // 0x17
    op(Mnemonic::Clc, Implicit), // 0x18
    op(Mnemonic::Ora, AbsoluteY), // 0x19
    None, // 0x1A
    None, // 0x1B
    None, // 0x1C
    op(Mnemonic::Ora, AbsoluteX), // 0x1D
    op(Mnemonic::Asl, AbsoluteX), // 0x1E
    None, // 0x1F
    op(Mnemonic::Jsr, Absolute), // 0x20
    op(Mnemonic::And, IndirectX), // 0x21
    None, // 0x22
    None, // 0x23
    op(Mnemonic::Bit, ZeroPage), // 0x24
    op(Mnemonic::And, ZeroPage), // 0x25
    op(Mnemonic::Rol, ZeroPage), // 0x26
    None, // 0x27
    op(Mnemonic::Plp, Implicit), // 0x28
    op(Mnemonic::And, Immediate), // 0x29
    op(Mnemonic::Rol, Accumulator), // 0x2A
    None, // 0x2B
    op(Mnemonic::Bit, Absolute), // 0x2C
    op(Mnemonic::And, Absolute), // 0x2D
    op(Mnemonic::Rol, Absolute), // 0x2E
    None, // 0x2F
    op(Mnemonic::Bmi, Relative), // 0x30
    op(Mnemonic::And, IndirectY), // 0x31
    None, // 0x32
    None, // 0x33
    None, // 0x34
    op(Mnemonic::And, ZeroPageX), // 0x35
    op(Mnemonic::Rol, ZeroPageX), // 0x36
    None, // 0x37
    op(Mnemonic::Sec, Implicit), // 0x38
    op(Mnemonic::And, AbsoluteY), // 0x39
    None, // 0x3A
    None, // 0x3B
    None, // 0x3C
    op(Mnemonic::And, AbsoluteX), // 0x3D
    op(Mnemonic::Rol, AbsoluteX), // 0x3E
    None, // 0x3F
    op(Mnemonic::Rti, Implicit), // 0x40
    op(Mnemonic::Eor, IndirectX), // 0x41
    None, // 0x42
    None, // 0x43
    None, // 0x44
    op(Mnemonic::Eor, ZeroPage), // 0x45
    op(Mnemonic::Lsr, ZeroPage), // 0x46
    None, // 0x47
    op(Mnemonic::Pha, Implicit), // 0x48
    op(Mnemonic::Eor, Immediate), // 0x49
    op(Mnemonic::Lsr, Accumulator), // 0x4A
    None, // 0x4B
    op(Mnemonic::Jmp, Absolute), // 0x4C
    op(Mnemonic::Eor, Absolute), // 0x4D
    op(Mnemonic::Lsr, Absolute), // 0x4E
    None, // 0x4F
    op(Mnemonic::Bvc, Relative), // 0x50
    op(Mnemonic::Eor, IndirectY), // 0x51
    None, // 0x52
    None, // 0x53
    None, // 0x54
    op(Mnemonic::Eor, ZeroPageX), // 0x55
    op(Mnemonic::Lsr, ZeroPageX), // 0x56
    None, // 0x57
    op(Mnemonic::Cli, Implicit), // 0x58
    op(Mnemonic::Eor, AbsoluteY), // 0x59
    None, // 0x5A
    None, // 0x5B
    None, // 0x5C
    op(Mnemonic::Eor, AbsoluteX), // 0x5D
    op(Mnemonic::Lsr, AbsoluteX), // 0x5E
    None, // 0x5F
    op(Mnemonic::Rts, Implicit), // 0x60
    op(Mnemonic::Adc, IndirectX), // 0x61
    None, // 0x62
    None, // 0x63
    None, // 0x64
    op(Mnemonic::Adc, ZeroPage), // 0x65
    op(Mnemonic::Ror, ZeroPage), // 0x66
    None, // 0x67
    op(Mnemonic::Pla, Implicit), // 0x68
    op(Mnemonic::Adc, Immediate), // 0x69
    op(Mnemonic::Ror, Accumulator), // 0x6A
    None, // 0x6B
    op(Mnemonic::Jmp, Indirect), // 0x6C
    op(Mnemonic::Adc, Absolute), // 0x6D
    op(Mnemonic::Ror, Absolute), // 0x6E
    None, // 0x6F
    op(Mnemonic::Bvs, Relative), // 0x70
    op(Mnemonic::Adc, IndirectY), // 0x71
    None, // 0x72
    None, // 0x73
    None, // 0x74
    op(Mnemonic::Adc, ZeroPageX), // 0x75
    op(Mnemonic::Ror, ZeroPageX), // 0x76
    None, // 0x77
    op(Mnemonic::Sei, Implicit), // 0x78
    op(Mnemonic::Adc, AbsoluteY), // 0x79
    None, // 0x7A
    None, // 0x7B
    None, // 0x7C
    op(Mnemonic::Adc, AbsoluteX), // 0x7D
    op(Mnemonic::Ror, AbsoluteX), // 0x7E
    None, // 0x7F
    None, // 0x80
    op(Mnemonic::Sta, IndirectX), // 0x81
    None, // 0x82
    None, // 0x83
    op(Mnemonic::Sty, ZeroPage), // 0x84
    op(Mnemonic::Sta, ZeroPage), // 0x85
    op(Mnemonic::Stx, ZeroPage), // 0x86
    None, // 0x87
    op(Mnemonic::Dey, Implicit), // 0x88
    None, // 0x89
    op(Mnemonic::Txa, Implicit), // 0x8A
    None, // 0x8B
    op(Mnemonic::Sty, Absolute), // 0x8C
    op(Mnemonic::Sta, Absolute), // 0x8D
    op(Mnemonic::Stx, Absolute), // 0x8E
    None, // 0x8F
    op(Mnemonic::Bcc, Relative), // 0x90
    op(Mnemonic::Sta, IndirectY), // 0x91
    None, // 0x92
    None, // 0x93
    op(Mnemonic::Sty, ZeroPageX), // 0x94
    op(Mnemonic::Sta, ZeroPageX), // 0x95
    op(Mnemonic::Stx, ZeroPageY), // 0x96
    None, // 0x97
    op(Mnemonic::Tya, Implicit), // 0x98
    op(Mnemonic::Sta, AbsoluteY), // 0x99
    op(Mnemonic::Txs, Implicit), // 0x9A
    None, // 0x9B
    None, // 0x9C
    op(Mnemonic::Sta, AbsoluteX), // 0x9D
    None, // 0x9E
    None, // 0x9F
    op(Mnemonic::Ldy, Immediate), // 0xA0
    op(Mnemonic::Lda, IndirectX), // 0xA1
    op(Mnemonic::Ldx, Immediate), // 0xA2
    None, // 0xA3
    op(Mnemonic::Ldy, ZeroPage), // 0xA4
    op(Mnemonic::Lda, ZeroPage), // 0xA5
    op(Mnemonic::Ldx, ZeroPage), // 0xA6
    None, // 0xA7
    op(Mnemonic::Tay, Implicit), // 0xA8
    op(Mnemonic::Lda, Immediate), // 0xA9
    op(Mnemonic::Tax, Implicit), // 0xAA
    None, // 0xAB
    op(Mnemonic::Ldy, Absolute), // 0xAC
    op(Mnemonic::Lda, Absolute), // 0xAD
    op(Mnemonic::Ldx, Absolute), // 0xAE
    None, // 0xAF
    op(Mnemonic::Bcs, Relative), // 0xB0
    op(Mnemonic::Lda, IndirectY), // 0xB1
    None, // 0xB2
    None, // 0xB3
    op(Mnemonic::Ldy, ZeroPageX), // 0xB4
    op(Mnemonic::Lda, ZeroPageX), // 0xB5
    op(Mnemonic::Ldx, ZeroPageY), // 0xB6
    None, // 0xB7
    op(Mnemonic::Clv, Implicit), // 0xB8
    op(Mnemonic::Lda, AbsoluteY), // 0xB9
    op(Mnemonic::Tsx, Implicit), // 0xBA
    None, // 0xBB
    op(Mnemonic::Ldy, AbsoluteX), // 0xBC
    op(Mnemonic::Lda, AbsoluteX), // 0xBD
    op(Mnemonic::Ldx, AbsoluteY), // 0xBE
    None, // 0xBF
    op(Mnemonic::Cpy, Immediate), // 0xC0
    op(Mnemonic::Cmp, IndirectX), // 0xC1
    None, // 0xC2
    None, // 0xC3
    op(Mnemonic::Cpy, ZeroPage), // 0xC4
    op(Mnemonic::Cmp, ZeroPage), // 0xC5
    op(Mnemonic::Dec, ZeroPage), // 0xC6
    None, // 0xC7
    op(Mnemonic::Iny, Implicit), // 0xC8
    op(Mnemonic::Cmp, Immediate), // 0xC9
    op(Mnemonic::Dex, Implicit), // 0xCA
    None, // 0xCB
    op(Mnemonic::Cpy, Absolute), // 0xCC
    op(Mnemonic::Cmp, Absolute), // 0xCD
    op(Mnemonic::Dec, Absolute), // 0xCE
    None, // 0xCF
    op(Mnemonic::Bne, Relative), // 0xD0
    op(Mnemonic::Cmp, IndirectY), // 0xD1
    None, // 0xD2
    None, // 0xD3
    None, // 0xD4
    op(Mnemonic::Cmp, ZeroPageX), // 0xD5
    op(Mnemonic::Dec, ZeroPageX), // 0xD6
    None, // 0xD7
    op(Mnemonic::Cld, Implicit), // 0xD8
    op(Mnemonic::Cmp, AbsoluteY), // 0xD9
    None, // 0xDA
    None, // 0xDB
    None, // 0xDC
    op(Mnemonic::Cmp, AbsoluteX), // 0xDD
    op(Mnemonic::Dec, AbsoluteX), // 0xDE
    None, // 0xDF
    op(Mnemonic::Cpx, Immediate), // 0xE0
    op(Mnemonic::Sbc, IndirectX), // 0xE1
    None, // 0xE2
    None, // 0xE3
    op(Mnemonic::Cpx, ZeroPage), // 0xE4
    op(Mnemonic::Sbc, ZeroPage), // 0xE5
    op(Mnemonic::Inc, ZeroPage), // 0xE6
    None, // 0xE7
    op(Mnemonic::Inx, Implicit), // 0xE8
    op(Mnemonic::Sbc, Immediate), // 0xE9
    op(Mnemonic::Nop, Implicit), // 0xEA
    None, // 0xEB
    op(Mnemonic::Cpx, Absolute), // 0xEC
    op(Mnemonic::Sbc, Absolute), // 0xED
    op(Mnemonic::Inc, Absolute), // 0xEE
    None, // 0xEF
    op(Mnemonic::Beq, Relative), // 0xF0
    op(Mnemonic::Sbc, IndirectY), // 0xF1
    None, // 0xF2
    None, // 0xF3
    None, // 0xF4
    op(Mnemonic::Sbc, ZeroPageX), // 0xF5
    op(Mnemonic::Inc, ZeroPageX), // 0xF6
    None, // 0xF7
    op(Mnemonic::Sed, Implicit), // 0xF8
    op(Mnemonic::Sbc, AbsoluteY), // 0xF9
    None, // 0xFA
    None, // 0xFB
    None, // 0xFC
    op(Mnemonic::Sbc, AbsoluteX), // 0xFD
    op(Mnemonic::Inc, AbsoluteX), // 0xFE
    None, // 0xFF
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_opcode_count() {
        let documented = OPCODE_TABLE.iter().filter(|entry| entry.is_some()).count();
        assert_eq!(documented, 151);
    }

    #[test]
    fn test_accumulator_shifts() {
        for opcode in [0x0A, 0x2A, 0x4A, 0x6A] {
            let entry = OPCODE_TABLE[opcode].unwrap();
            assert_eq!(entry.addressing_mode, Accumulator);
            assert_eq!(entry.size_bytes(), 1);
        }
    }

    #[test]
    fn test_instruction_display() {
        let instr = Instruction {
            opcode: 0xB1,
            mnemonic: Mnemonic::Lda,
            mode: IndirectY,
            operand: 0x40,
        };
        assert_eq!(instr.to_string(), "LDA ($40),Y");

        let branch = Instruction {
            opcode: 0xD0,
            mnemonic: Mnemonic::Bne,
            mode: Relative,
            operand: 0xFE,
        };
        assert_eq!(branch.to_string(), "BNE *-2");
    }
}
