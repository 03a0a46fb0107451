//! # Status Flags
//!
//! The processor status register packs seven named flags and one
//! always-set bit into a single byte. Bit layout, high to low:
//!
//! ```text
//!  7   6   5   4   3   2   1   0
//!  C   Z   I   D   B   -   V   N
//! ```
//!
//! All flag mutation goes through [`FlagRegister`]. Its operations re-apply
//! the unused bit after every change, so `bits() & 0x04` is always set.

use bitflags::bitflags;

bitflags! {
    /// Named bits of the status register.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        /// Carry (unsigned overflow/borrow, shifted-out bit)
        const CARRY = 0b1000_0000;
        /// Zero (last result was zero)
        const ZERO = 0b0100_0000;
        /// Interrupt disable
        const INTERRUPT_DISABLE = 0b0010_0000;
        /// Decimal mode (tracked only; arithmetic stays binary)
        const DECIMAL = 0b0001_0000;
        /// Break (set by BRK)
        const BREAK = 0b0000_1000;
        /// Unused, always 1
        const UNUSED = 0b0000_0100;
        /// Signed overflow
        const OVERFLOW = 0b0000_0010;
        /// Negative (bit 7 of last result)
        const NEGATIVE = 0b0000_0001;
    }
}

/// The flag byte of the register file.
///
/// This is the flag unit: the only way to change a flag is through one of
/// the named operations below.
///
/// # Examples
///
/// ```
/// use engine6502::{FlagRegister, Status};
///
/// let mut flags = FlagRegister::new();
/// assert_eq!(flags.bits(), 0b0001_0100); // Unused | Decimal
///
/// flags.update_zero(0x00);
/// assert!(flags.contains(Status::ZERO));
///
/// flags.clear(Status::UNUSED);
/// assert!(flags.contains(Status::UNUSED)); // cannot be cleared
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagRegister(Status);

impl FlagRegister {
    /// Flags after a reset: Unused and Decimal set, everything else clear.
    pub const RESET: Status = Status::UNUSED.union(Status::DECIMAL);

    /// Creates a flag register in its reset state.
    pub fn new() -> Self {
        Self(Self::RESET)
    }

    /// Returns the packed flag byte.
    pub fn bits(&self) -> u8 {
        self.0.bits()
    }

    /// Returns the flags as a [`Status`] set.
    pub fn status(&self) -> Status {
        self.0
    }

    /// Returns true if every bit in `flag` is set.
    pub fn contains(&self, flag: Status) -> bool {
        self.0.contains(flag)
    }

    /// Sets the named flag bit(s).
    pub fn set(&mut self, flag: Status) {
        self.0.insert(flag);
        self.0.insert(Status::UNUSED);
    }

    /// Clears the named flag bit(s). The unused bit stays set.
    pub fn clear(&mut self, flag: Status) {
        self.0.remove(flag);
        self.0.insert(Status::UNUSED);
    }

    /// Sets `flag` when `condition` holds, clears it otherwise.
    pub fn assign(&mut self, flag: Status, condition: bool) {
        if condition {
            self.set(flag);
        } else {
            self.clear(flag);
        }
    }

    /// Sets Negative iff bit 7 of `value` is 1. Returns the new flag.
    pub fn update_negative(&mut self, value: u8) -> bool {
        let negative = value & 0x80 != 0;
        self.assign(Status::NEGATIVE, negative);
        negative
    }

    /// Sets Zero iff `value` is 0. Returns the new flag.
    pub fn update_zero(&mut self, value: u8) -> bool {
        let zero = value == 0;
        self.assign(Status::ZERO, zero);
        zero
    }

    /// Sets Overflow iff both adder inputs differ in sign from the result.
    ///
    /// `a` and `b` are the two values fed to the adder: for ADC the
    /// accumulator and the operand, for SBC the accumulator and the ones'
    /// complement of the operand. Logical operations must not call this.
    pub fn update_overflow(&mut self, a: u8, b: u8, result: u8) -> bool {
        let overflow = (a ^ result) & 0x80 != 0 && (b ^ result) & 0x80 != 0;
        self.assign(Status::OVERFLOW, overflow);
        overflow
    }

    /// Updates Negative and Zero from `value`.
    pub fn update_nz(&mut self, value: u8) {
        self.update_negative(value);
        self.update_zero(value);
    }

    /// Replaces the flags with a byte pulled from the stack.
    ///
    /// Break is not a stored latch on the real part, so the current Break
    /// bit is kept; Unused is forced.
    pub(crate) fn restore(&mut self, bits: u8) {
        let brk = self.0 & Status::BREAK;
        self.0 = (Status::from_bits_retain(bits) - Status::BREAK) | brk | Status::UNUSED;
    }
}

impl Default for FlagRegister {
    fn default() -> Self {
        Self::new()
    }
}
