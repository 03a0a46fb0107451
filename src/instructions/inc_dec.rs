//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC / DEC: memory, through the read-modify-write primitives
//! - INX / INY / DEX / DEY: index registers
//!
//! Every result wraps modulo 256 and updates N and Z.

use crate::{Cpu, ExecutionError, Instruction, MemoryBus};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.increment_in_memory(instr.mode, instr.operand)?;
    Ok(())
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.decrement_in_memory(instr.mode, instr.operand)?;
    Ok(())
}

/// Executes the INX (Increment X Register) instruction.
///
/// 0xFF wraps to 0x00, setting Z and clearing N.
pub(crate) fn execute_inx<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    _instr: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.regs.x = cpu.regs.x.wrapping_add(1);
    cpu.regs.p.update_nz(cpu.regs.x);
    Ok(())
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    _instr: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.regs.y = cpu.regs.y.wrapping_add(1);
    cpu.regs.p.update_nz(cpu.regs.y);
    Ok(())
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    _instr: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.regs.x = cpu.regs.x.wrapping_sub(1);
    cpu.regs.p.update_nz(cpu.regs.x);
    Ok(())
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    _instr: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.regs.y = cpu.regs.y.wrapping_sub(1);
    cpu.regs.p.update_nz(cpu.regs.y);
    Ok(())
}
