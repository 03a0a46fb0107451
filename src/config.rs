//! # Engine Configuration
//!
//! Run-time knobs for a [`Cpu`](crate::Cpu). The defaults reproduce the
//! simplified halt-on-BRK machine; everything here is optional.

/// What BRK does besides halting the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrkBehavior {
    /// Set Break and InterruptDisable, then halt. Nothing is pushed.
    #[default]
    Halt,

    /// Push the return address (PC + 1, high byte first) and the flag byte
    /// with Break set onto the stack page, then set Break and
    /// InterruptDisable and halt.
    PushAndHalt,
}

/// Configuration for a [`Cpu`](crate::Cpu).
///
/// # Examples
///
/// ```
/// use engine6502::{BrkBehavior, Cpu, CpuConfig, FlatMemory};
///
/// let config = CpuConfig {
///     brk: BrkBehavior::PushAndHalt,
/// };
/// let cpu = Cpu::with_config(FlatMemory::new(), config);
/// assert_eq!(cpu.config().brk, BrkBehavior::PushAndHalt);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuConfig {
    /// BRK handling
    pub brk: BrkBehavior,
}
