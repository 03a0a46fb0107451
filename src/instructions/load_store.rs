//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads update N and Z from the loaded value. Stores affect no flags.

use crate::{Cpu, ExecutionError, Instruction, MemoryBus};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.load(instr.mode, instr.operand)?;
    cpu.regs.a = value;
    cpu.regs.p.update_negative(value);
    cpu.regs.p.update_zero(value);
    Ok(())
}

/// Executes the LDX (Load X Register) instruction.
///
/// Same flag behavior as LDA, applied to X.
pub(crate) fn execute_ldx<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.load(instr.mode, instr.operand)?;
    cpu.regs.x = value;
    cpu.regs.p.update_negative(value);
    cpu.regs.p.update_zero(value);
    Ok(())
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Same flag behavior as LDA, applied to Y.
pub(crate) fn execute_ldy<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.load(instr.mode, instr.operand)?;
    cpu.regs.y = value;
    cpu.regs.p.update_negative(value);
    cpu.regs.p.update_zero(value);
    Ok(())
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.store(cpu.regs.a, instr.mode, instr.operand)
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.store(cpu.regs.x, instr.mode, instr.operand)
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.store(cpu.regs.y, instr.mode, instr.operand)
}
