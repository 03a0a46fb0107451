//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator
//! - PHP: Push Processor Status
//! - PLA: Pull Accumulator
//! - PLP: Pull Processor Status
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows
//! downward. The stack pointer is an 8-bit offset into this page and wraps.

use crate::{Cpu, ExecutionError, Instruction, MemoryBus, Status};

/// Executes the PHA (Push Accumulator) instruction. No flags affected.
pub(crate) fn execute_pha<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    _instr: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.push(cpu.regs.a);
    Ok(())
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed byte always has B and the unused bit set; the live flags are
/// not changed.
pub(crate) fn execute_php<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    _instr: &Instruction,
) -> Result<(), ExecutionError> {
    let status = cpu.regs.p.status() | Status::BREAK | Status::UNUSED;
    cpu.push(status.bits());
    Ok(())
}

/// Executes the PLA (Pull Accumulator) instruction. Updates Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    _instr: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.pull();
    cpu.regs.a = value;
    cpu.regs.p.update_nz(value);
    Ok(())
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Every flag comes from the stack except Break (kept) and Unused (forced).
pub(crate) fn execute_plp<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    _instr: &Instruction,
) -> Result<(), ExecutionError> {
    let status = cpu.pull();
    cpu.regs.p.restore(status);
    Ok(())
}
