//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: bitwise logic into the accumulator
//! - CMP, CPX, CPY: compare a register with memory
//! - BIT: test accumulator bits against memory
//!
//! Arithmetic is always binary. The Decimal flag is tracked but does not
//! change ADC/SBC results.

use crate::{Cpu, ExecutionError, Instruction, MemoryBus, Status};

/// Adds `value` and the carry flag to the accumulator.
///
/// Shared by ADC and SBC: SBC feeds the ones' complement of its operand,
/// which with the carry as "not borrow" gives `A - M - (1 - C)`.
fn add_with_carry<M: MemoryBus>(cpu: &mut Cpu<M>, value: u8) {
    let a = cpu.regs.a;
    let carry_in = cpu.regs.p.contains(Status::CARRY) as u16;

    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    cpu.regs.p.assign(Status::CARRY, sum > 0xFF);
    cpu.regs.p.update_overflow(a, value, result);
    cpu.regs.p.update_negative(result);
    cpu.regs.p.update_zero(result);

    cpu.regs.a = result;
}

/// Executes the ADC (Add with Carry) instruction.
///
/// # Flag Behavior
///
/// - Carry (C): Set if the unsigned sum exceeds 0xFF
/// - Overflow (V): Set if both inputs share a sign the result does not
/// - Zero (Z), Negative (N): From the result
pub(crate) fn execute_adc<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.load(instr.mode, instr.operand)?;
    add_with_carry(cpu, value);
    Ok(())
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Carry is set when no borrow occurred (A >= M + borrow).
pub(crate) fn execute_sbc<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.load(instr.mode, instr.operand)?;
    add_with_carry(cpu, !value);
    Ok(())
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.load(instr.mode, instr.operand)?;
    cpu.regs.a &= value;
    cpu.regs.p.update_nz(cpu.regs.a);
    Ok(())
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.load(instr.mode, instr.operand)?;
    cpu.regs.a |= value;
    cpu.regs.p.update_nz(cpu.regs.a);
    Ok(())
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.load(instr.mode, instr.operand)?;
    cpu.regs.a ^= value;
    cpu.regs.p.update_nz(cpu.regs.a);
    Ok(())
}

/// Compares `register` with `value` the way CMP/CPX/CPY do.
///
/// C is set if register >= value; N and Z come from `register - value`.
/// Overflow is not affected.
fn compare<M: MemoryBus>(cpu: &mut Cpu<M>, register: u8, value: u8) {
    let result = register.wrapping_sub(value);
    cpu.regs.p.assign(Status::CARRY, register >= value);
    cpu.regs.p.update_nz(result);
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.load(instr.mode, instr.operand)?;
    let register = cpu.regs.a;
    compare(cpu, register, value);
    Ok(())
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.load(instr.mode, instr.operand)?;
    let register = cpu.regs.x;
    compare(cpu, register, value);
    Ok(())
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.load(instr.mode, instr.operand)?;
    let register = cpu.regs.y;
    compare(cpu, register, value);
    Ok(())
}

/// Executes the BIT (Bit Test) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A & M = 0
/// - Negative (N): Bit 7 of M
/// - Overflow (V): Bit 6 of M
///
/// The accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.load(instr.mode, instr.operand)?;
    cpu.regs.p.update_zero(cpu.regs.a & value);
    cpu.regs.p.update_negative(value);
    cpu.regs.p.assign(Status::OVERFLOW, value & 0x40 != 0);
    Ok(())
}
