//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - BRK: Force Break (halts the engine)
//! - JMP: Jump to address (absolute or indirect)
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - RTI: Return from Interrupt
//!
//! BRK is the halt condition of the engine. It sets Break and Interrupt
//! Disable and stops execution; whether it also pushes a return frame is
//! chosen by [`BrkBehavior`].

use crate::{BrkBehavior, Cpu, ExecutionError, Instruction, MemoryBus, Status};

/// Executes the BRK (Force Break) instruction.
///
/// With [`BrkBehavior::PushAndHalt`] the frame a real BRK would push is
/// written first:
/// 1. High byte of PC + 1 (BRK skips a padding byte)
/// 2. Low byte of PC + 1
/// 3. Status byte with B set
///
/// The IRQ vector is not followed; the engine halts instead.
pub(crate) fn execute_brk<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    _instr: &Instruction,
) -> Result<(), ExecutionError> {
    if cpu.config().brk == BrkBehavior::PushAndHalt {
        let return_address = cpu.regs.pc.wrapping_add(1);
        cpu.push_word(return_address);
        cpu.push(cpu.regs.p.bits() | Status::BREAK.bits());
    }

    cpu.regs.p.set(Status::BREAK);
    cpu.regs.p.set(Status::INTERRUPT_DISABLE);
    cpu.halt();

    Ok(())
}

/// Executes the JMP (Jump) instruction.
///
/// - Absolute (0x4C): PC = operand
/// - Indirect (0x6C): PC = word stored at operand/operand+1
pub(crate) fn execute_jmp<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.regs.pc = cpu.effective_address(instr.mode, instr.operand)?;
    Ok(())
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR (PC - 1), high byte
/// first, then jumps.
pub(crate) fn execute_jsr<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    let target = cpu.effective_address(instr.mode, instr.operand)?;
    cpu.push_word(cpu.regs.pc.wrapping_sub(1));
    cpu.regs.pc = target;
    Ok(())
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the return address and resumes one byte past it.
pub(crate) fn execute_rts<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    _instr: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.regs.pc = cpu.pull_word().wrapping_add(1);
    Ok(())
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status byte (Break kept, Unused forced), then PC.
pub(crate) fn execute_rti<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    _instr: &Instruction,
) -> Result<(), ExecutionError> {
    let status = cpu.pull();
    cpu.regs.p.restore(status);
    cpu.regs.pc = cpu.pull_word();
    Ok(())
}
