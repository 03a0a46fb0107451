//! # Register File
//!
//! The processor's visible state. Every 8-bit register wraps modulo 256 and
//! the program counter wraps modulo 65536; arithmetic on these fields always
//! goes through the `wrapping_*` operations.

use crate::FlagRegister;

/// Base address of the stack page (0x0100-0x01FF).
pub const STACK_PAGE: u16 = 0x0100;

/// 6502 register set.
///
/// # Examples
///
/// ```
/// use engine6502::Registers;
///
/// let regs = Registers::new();
/// assert_eq!(regs.pc, 0x0000);
/// assert_eq!(regs.sp, 0x00);
/// assert_eq!(regs.p.bits(), 0b0001_0100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Registers {
    /// Program counter (address of the next byte to fetch)
    pub pc: u16,

    /// Stack pointer (offset into the stack page)
    pub sp: u8,

    /// Accumulator
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Status flags
    pub p: FlagRegister,
}

impl Registers {
    /// Creates a register file in the reset state, with PC still zero.
    pub fn new() -> Self {
        Self {
            pc: 0x0000,
            sp: 0x00,
            a: 0x00,
            x: 0x00,
            y: 0x00,
            p: FlagRegister::new(),
        }
    }

    /// Returns the full stack address the stack pointer currently names.
    pub fn stack_addr(&self) -> u16 {
        STACK_PAGE | self.sp as u16
    }
}
