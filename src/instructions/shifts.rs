//! # Shift and Rotate Instructions
//!
//! This module implements shift operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator (Accumulator mode) or on memory through a
//! read-modify-write. The bit shifted out lands in Carry; N and Z follow the
//! result.

use crate::{AddressingMode, Cpu, ExecutionError, Instruction, MemoryBus, Status};

/// Applies `op` to the accumulator or to memory, depending on the mode.
///
/// `op` receives the engine (for the carry flag) and the old value, and
/// returns the new value.
fn shift<M, F>(cpu: &mut Cpu<M>, instr: &Instruction, op: F) -> Result<(), ExecutionError>
where
    M: MemoryBus,
    F: Fn(&mut Cpu<M>, u8) -> u8,
{
    let result = if instr.mode == AddressingMode::Accumulator {
        let value = cpu.regs.a;
        let result = op(cpu, value);
        cpu.regs.a = result;
        result
    } else {
        cpu.read_modify_write(instr.mode, instr.operand, op)?
    };

    cpu.regs.p.update_negative(result);
    cpu.regs.p.update_zero(result);
    Ok(())
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 7 goes to Carry, bit 0 becomes 0.
pub(crate) fn execute_asl<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    shift(cpu, instr, |cpu, value| {
        cpu.regs.p.assign(Status::CARRY, value & 0x80 != 0);
        value << 1
    })
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 0 goes to Carry, bit 7 becomes 0 (so N is always cleared).
pub(crate) fn execute_lsr<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    shift(cpu, instr, |cpu, value| {
        cpu.regs.p.assign(Status::CARRY, value & 0x01 != 0);
        value >> 1
    })
}

/// Executes the ROL (Rotate Left) instruction.
///
/// Old Carry enters bit 0, bit 7 goes to Carry.
pub(crate) fn execute_rol<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    shift(cpu, instr, |cpu, value| {
        let carry_in = cpu.regs.p.contains(Status::CARRY) as u8;
        cpu.regs.p.assign(Status::CARRY, value & 0x80 != 0);
        (value << 1) | carry_in
    })
}

/// Executes the ROR (Rotate Right) instruction.
///
/// Old Carry enters bit 7, bit 0 goes to Carry.
pub(crate) fn execute_ror<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    shift(cpu, instr, |cpu, value| {
        let carry_in = cpu.regs.p.contains(Status::CARRY) as u8;
        cpu.regs.p.assign(Status::CARRY, value & 0x01 != 0);
        (value >> 1) | (carry_in << 7)
    })
}
