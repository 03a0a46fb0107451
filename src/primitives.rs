//! # Load / Store / Mutate Primitives
//!
//! Generic helpers the instruction implementations build on. Each one goes
//! through [`resolve`] for its effective address, so an addressing mode that
//! names no memory location fails before any memory is touched.

use crate::{resolve, AddressingMode, Cpu, ExecutionError, MemoryBus, STACK_PAGE};

impl<M: MemoryBus> Cpu<M> {
    /// Resolves `mode`/`operand` against this engine's registers and memory.
    pub(crate) fn effective_address(
        &self,
        mode: AddressingMode,
        operand: u16,
    ) -> Result<u16, ExecutionError> {
        resolve(mode, operand, &self.regs, &self.memory)
    }

    /// Reads the value an instruction operates on.
    ///
    /// `Immediate` yields the operand byte itself; every other mode reads
    /// memory at the effective address. Flags are left to the caller.
    pub(crate) fn load(&self, mode: AddressingMode, operand: u16) -> Result<u8, ExecutionError> {
        if mode == AddressingMode::Immediate {
            return Ok(operand as u8);
        }

        let addr = self.effective_address(mode, operand)?;
        Ok(self.memory.read(addr))
    }

    /// Writes `value` at the effective address. Never touches flags.
    pub(crate) fn store(
        &mut self,
        value: u8,
        mode: AddressingMode,
        operand: u16,
    ) -> Result<(), ExecutionError> {
        let addr = self.effective_address(mode, operand)?;
        self.memory.write(addr, value);
        Ok(())
    }

    /// Reads the byte at the effective address, writes back `f(byte)` and
    /// returns the new value.
    pub(crate) fn read_modify_write<F>(
        &mut self,
        mode: AddressingMode,
        operand: u16,
        f: F,
    ) -> Result<u8, ExecutionError>
    where
        F: FnOnce(&mut Self, u8) -> u8,
    {
        let addr = self.effective_address(mode, operand)?;
        let value = self.memory.read(addr);
        let result = f(self, value);
        self.memory.write(addr, result);
        Ok(result)
    }

    /// Adds one to the byte at the effective address and updates N and Z.
    pub(crate) fn increment_in_memory(
        &mut self,
        mode: AddressingMode,
        operand: u16,
    ) -> Result<u8, ExecutionError> {
        let result = self.read_modify_write(mode, operand, |_, value| value.wrapping_add(1))?;
        self.regs.p.update_negative(result);
        self.regs.p.update_zero(result);
        Ok(result)
    }

    /// Subtracts one from the byte at the effective address and updates N and Z.
    pub(crate) fn decrement_in_memory(
        &mut self,
        mode: AddressingMode,
        operand: u16,
    ) -> Result<u8, ExecutionError> {
        let result = self.read_modify_write(mode, operand, |_, value| value.wrapping_sub(1))?;
        self.regs.p.update_negative(result);
        self.regs.p.update_zero(result);
        Ok(result)
    }

    // ========== Stack ==========

    /// Writes `value` at 0x0100 | SP, then decrements SP (wrapping).
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(self.regs.stack_addr(), value);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
    }

    /// Increments SP (wrapping), then reads 0x0100 | SP.
    pub(crate) fn pull(&mut self) -> u8 {
        self.regs.sp = self.regs.sp.wrapping_add(1);
        self.memory.read(STACK_PAGE | self.regs.sp as u16)
    }

    /// Pushes a word, high byte first.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    /// Pulls a word, low byte first.
    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }
}
