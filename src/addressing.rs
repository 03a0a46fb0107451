//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor
//! and the resolver that turns a mode plus a raw operand into an effective
//! address.

use crate::{ExecutionError, MemoryBus, Registers};

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the engine interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from address 0x0080 + X, wraps within zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (load from address 0x0080 + Y, wraps within zero page)
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label (offset is relative to the PC after the operand)
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234 (jump to address 0x1234)
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X (load from address 0x1234 + X)
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y (load from address 0x1234 + Y)
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Example: JMP ($FFFC) (jump to address stored at 0xFFFC/0xFFFD)
    /// Only used by JMP instruction.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X) (add X to 0x40 within zero page, read the 16-bit
    /// pointer stored there, load from the result)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y (read 16-bit pointer from ZP 0x40, add Y, load
    /// from the result)
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode in this mode.
    ///
    /// ```
    /// use engine6502::AddressingMode;
    ///
    /// assert_eq!(AddressingMode::Implicit.operand_bytes(), 0);
    /// assert_eq!(AddressingMode::IndirectY.operand_bytes(), 1);
    /// assert_eq!(AddressingMode::AbsoluteX.operand_bytes(), 2);
    /// ```
    pub const fn operand_bytes(self) -> u8 {
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

    /// Total instruction size in bytes (opcode + operand).
    pub const fn size_bytes(self) -> u8 {
        1 + self.operand_bytes()
    }
}

/// Reads a little-endian pointer from two consecutive zero-page bytes.
///
/// The high byte comes from `(zp + 1) & 0xFF`, so a pointer at 0xFF takes its
/// high byte from 0x00.
fn read_zero_page_word<M: MemoryBus>(memory: &M, zp: u8) -> u16 {
    let lo = memory.read(zp as u16) as u16;
    let hi = memory.read(zp.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

/// Resolves an addressing mode and raw operand to an effective address.
///
/// `operand` is the value already fetched from the instruction stream (one
/// byte zero-extended, or a little-endian word). For `Relative`, `regs.pc`
/// must already point past the operand byte.
///
/// `Implicit`, `Accumulator` and `Immediate` have no effective address and
/// yield [`ExecutionError::UnsupportedAddressingMode`].
///
/// # Examples
///
/// ```
/// use engine6502::{resolve, AddressingMode, FlatMemory, Registers};
///
/// let mem = FlatMemory::new();
/// let mut regs = Registers::new();
/// regs.x = 0x02;
///
/// // Zero page indexing never leaves page zero
/// let addr = resolve(AddressingMode::ZeroPageX, 0xFF, &regs, &mem).unwrap();
/// assert_eq!(addr, 0x0001);
/// ```
pub fn resolve<M: MemoryBus>(
    mode: AddressingMode,
    operand: u16,
    regs: &Registers,
    memory: &M,
) -> Result<u16, ExecutionError> {
    let zp = operand as u8;

    let addr = match mode {
        AddressingMode::Absolute => operand,
        AddressingMode::Indirect => memory.read_word(operand),
        AddressingMode::AbsoluteX => operand.wrapping_add(regs.x as u16),
        AddressingMode::AbsoluteY => operand.wrapping_add(regs.y as u16),
        AddressingMode::ZeroPage => zp as u16,
        AddressingMode::ZeroPageX => zp.wrapping_add(regs.x) as u16,
        AddressingMode::ZeroPageY => zp.wrapping_add(regs.y) as u16,
        AddressingMode::IndirectX => read_zero_page_word(memory, zp.wrapping_add(regs.x)),
        AddressingMode::IndirectY => {
            read_zero_page_word(memory, zp).wrapping_add(regs.y as u16)
        }
        AddressingMode::Relative => regs.pc.wrapping_add_signed(zp as i8 as i16),
        AddressingMode::Implicit | AddressingMode::Accumulator | AddressingMode::Immediate => {
            return Err(ExecutionError::UnsupportedAddressingMode(mode));
        }
    };

    Ok(addr)
}
