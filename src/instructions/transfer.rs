//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer
//!
//! All transfers except TXS update N and Z from the copied value.

use crate::{Cpu, ExecutionError, Instruction, MemoryBus};

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    _instr: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.regs.x = cpu.regs.a;
    cpu.regs.p.update_nz(cpu.regs.x);
    Ok(())
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    _instr: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.regs.y = cpu.regs.a;
    cpu.regs.p.update_nz(cpu.regs.y);
    Ok(())
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    _instr: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.regs.a = cpu.regs.x;
    cpu.regs.p.update_nz(cpu.regs.a);
    Ok(())
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    _instr: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.regs.a = cpu.regs.y;
    cpu.regs.p.update_nz(cpu.regs.a);
    Ok(())
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    _instr: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.regs.x = cpu.regs.sp;
    cpu.regs.p.update_nz(cpu.regs.x);
    Ok(())
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// Unlike the other transfers, TXS affects no flags.
pub(crate) fn execute_txs<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    _instr: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.regs.sp = cpu.regs.x;
    Ok(())
}
