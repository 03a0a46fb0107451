//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC / SEC: Carry
//! - CLI / SEI: Interrupt Disable
//! - CLD / SED: Decimal Mode
//! - CLV: Overflow
//!
//! These instructions use implied addressing and touch exactly one flag.

use crate::{Cpu, ExecutionError, MemoryBus, Status};

/// Sets `flag` (SEC, SEI, SED).
pub(crate) fn set_flag<M: MemoryBus>(cpu: &mut Cpu<M>, flag: Status) -> Result<(), ExecutionError> {
    cpu.regs.p.set(flag);
    Ok(())
}

/// Clears `flag` (CLC, CLI, CLD, CLV).
pub(crate) fn clear_flag<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    flag: Status,
) -> Result<(), ExecutionError> {
    cpu.regs.p.clear(flag);
    Ok(())
}
