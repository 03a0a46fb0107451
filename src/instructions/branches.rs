//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS.
//!
//! All branch instructions use relative addressing with a signed 8-bit
//! offset, taken from the PC after the operand byte. No flags are affected.

use crate::{AddressingMode, Cpu, ExecutionError, Instruction, MemoryBus, Mnemonic, Status};

/// Returns the (flag, expected state) pair a branch mnemonic tests.
fn condition(mnemonic: Mnemonic) -> Option<(Status, bool)> {
    let condition = match mnemonic {
        Mnemonic::Bcc => (Status::CARRY, false),
        Mnemonic::Bcs => (Status::CARRY, true),
        Mnemonic::Bne => (Status::ZERO, false),
        Mnemonic::Beq => (Status::ZERO, true),
        Mnemonic::Bpl => (Status::NEGATIVE, false),
        Mnemonic::Bmi => (Status::NEGATIVE, true),
        Mnemonic::Bvc => (Status::OVERFLOW, false),
        Mnemonic::Bvs => (Status::OVERFLOW, true),
        _ => return None,
    };
    Some(condition)
}

/// Executes any conditional branch.
///
/// If the tested flag matches, PC becomes the relative target; otherwise
/// PC already points at the next instruction and is left alone.
pub(crate) fn execute_branch<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    let Some((flag, expected)) = condition(instr.mnemonic) else {
        return Err(ExecutionError::UnimplementedOpcode(instr.opcode));
    };

    if cpu.regs.p.contains(flag) == expected {
        cpu.regs.pc = cpu.effective_address(AddressingMode::Relative, instr.operand)?;
    }

    Ok(())
}
