//! # CPU State and Execution
//!
//! This module contains the `Cpu` struct representing the 6502 engine and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The engine maintains:
//! - **Register file**: PC, SP, A, X, Y and the flag byte (see [`Registers`])
//! - **Memory**: any [`MemoryBus`] implementation, owned by the engine
//! - **Engine state**: [`EngineState::Running`] or [`EngineState::Halted`]
//! - **Instruction counter**: number of instructions executed since reset
//!
//! ## Execution Model
//!
//! - `reset()`: reinitialize registers and load PC from the reset vector
//! - `step()`: execute one instruction
//! - `run()`: reset, then step until BRK halts the engine
//! - `run_for_instructions()`: step until a budget is spent or the engine halts

use log::{debug, trace, warn};

use crate::instructions::{
    alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer,
};
use crate::{
    AddressingMode, CpuConfig, ExecutionError, FlagRegister, Instruction, MemoryBus, Mnemonic,
    Registers, Status, OPCODE_TABLE,
};

/// Address of the little-endian reset vector (0xFFFC low, 0xFFFD high).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Execution state of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Fetching and executing instructions.
    Running,

    /// Stopped by BRK; only `reset()` leaves this state.
    Halted,
}

/// 6502 engine state and execution context.
///
/// The Cpu owns its register file and its memory bus, so any number of
/// independent machines can exist side by side.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use engine6502::{Cpu, FlatMemory, MemoryBus};
///
/// // Create memory and set reset vector
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
///
/// // Initialize - loads PC from reset vector
/// let cpu = Cpu::new(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0x00);
/// assert_eq!(cpu.status(), 0b0001_0100); // Unused | Decimal
/// ```
pub struct Cpu<M: MemoryBus> {
    /// Register file
    pub(crate) regs: Registers,

    /// Memory bus implementation
    pub(crate) memory: M,

    /// Running or halted
    pub(crate) state: EngineState,

    /// Instructions executed since the last reset
    pub(crate) instructions: u64,

    config: CpuConfig,
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates an engine with the default configuration and resets it.
    ///
    /// # Examples
    ///
    /// ```
    /// use engine6502::{Cpu, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x34);
    /// mem.write(0xFFFD, 0x12);
    ///
    /// let cpu = Cpu::new(mem);
    /// assert_eq!(cpu.pc(), 0x1234);
    /// ```
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates an engine with an explicit configuration and resets it.
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        let mut cpu = Self {
            regs: Registers::new(),
            memory,
            state: EngineState::Running,
            instructions: 0,
            config,
        };
        cpu.reset();
        cpu
    }

    /// Reinitializes the register file and leaves the engine Running.
    ///
    /// - A, X, Y and SP are zeroed
    /// - Flags become Unused | Decimal, everything else clear
    /// - PC is loaded from the reset vector at 0xFFFC/0xFFFD (little-endian)
    /// - The instruction counter is zeroed
    ///
    /// This is the only way out of [`EngineState::Halted`].
    pub fn reset(&mut self) {
        self.regs = Registers::new();
        self.regs.pc = self.memory.read_word(RESET_VECTOR);
        self.state = EngineState::Running;
        self.instructions = 0;

        debug!("reset: PC=${:04X}", self.regs.pc);
    }

    /// Reads the byte at PC and advances PC (wrapping at 0xFFFF).
    ///
    /// This is the only way instruction-stream bytes are consumed.
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let byte = self.memory.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        byte
    }

    /// Fetches the operand bytes `mode` requires (little-endian for words).
    fn fetch_operand(&mut self, mode: AddressingMode) -> u16 {
        match mode.operand_bytes() {
            0 => 0,
            1 => self.fetch_byte() as u16,
            _ => {
                let lo = self.fetch_byte() as u16;
                let hi = self.fetch_byte() as u16;
                (hi << 8) | lo
            }
        }
    }

    /// Fetches and decodes the instruction at PC.
    ///
    /// Undocumented opcodes leave PC just past the opcode byte.
    fn decode(&mut self) -> Result<Instruction, ExecutionError> {
        let pc = self.regs.pc;
        let opcode = self.fetch_byte();

        let Some(metadata) = OPCODE_TABLE[opcode as usize] else {
            warn!("unimplemented opcode ${:02X} at ${:04X}", opcode, pc);
            return Err(ExecutionError::UnimplementedOpcode(opcode));
        };

        let operand = self.fetch_operand(metadata.addressing_mode);

        Ok(Instruction {
            opcode,
            mnemonic: metadata.mnemonic,
            mode: metadata.addressing_mode,
            operand,
        })
    }

    /// Executes one instruction and advances the engine state.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch the opcode byte at PC
    /// 2. Look up its mnemonic and addressing mode in the opcode table
    /// 3. Fetch the 0, 1 or 2 operand bytes the mode requires
    /// 4. Dispatch to the operation's semantics
    ///
    /// # Returns
    ///
    /// - `Ok(EngineState::Running)` after an ordinary instruction
    /// - `Ok(EngineState::Halted)` after BRK
    /// - `Err(ExecutionError::Halted)` if called while halted
    /// - `Err(ExecutionError::UnimplementedOpcode(op))` for undocumented opcodes
    ///
    /// # Examples
    ///
    /// ```
    /// use engine6502::{Cpu, EngineState, ExecutionError, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.write(0x8000, 0xE8); // INX
    /// mem.write(0x8001, 0x02); // undocumented
    ///
    /// let mut cpu = Cpu::new(mem);
    ///
    /// assert_eq!(cpu.step(), Ok(EngineState::Running));
    /// assert_eq!(cpu.x(), 0x01);
    /// assert_eq!(cpu.step(), Err(ExecutionError::UnimplementedOpcode(0x02)));
    /// ```
    pub fn step(&mut self) -> Result<EngineState, ExecutionError> {
        if self.state == EngineState::Halted {
            return Err(ExecutionError::Halted);
        }

        let pc = self.regs.pc;
        let instr = self.decode()?;

        trace!(
            "${:04X}: {:02X} {:<14} A={:02X} X={:02X} Y={:02X} SP={:02X} P={:08b}",
            pc,
            instr.opcode,
            instr.to_string(),
            self.regs.a,
            self.regs.x,
            self.regs.y,
            self.regs.sp,
            self.regs.p.bits()
        );

        self.execute(&instr)?;
        self.instructions += 1;

        Ok(self.state)
    }

    /// Dispatches a decoded instruction to its semantics.
    fn execute(&mut self, instr: &Instruction) -> Result<(), ExecutionError> {
        match instr.mnemonic {
            Mnemonic::Lda => load_store::execute_lda(self, instr),
            Mnemonic::Ldx => load_store::execute_ldx(self, instr),
            Mnemonic::Ldy => load_store::execute_ldy(self, instr),
            Mnemonic::Sta => load_store::execute_sta(self, instr),
            Mnemonic::Stx => load_store::execute_stx(self, instr),
            Mnemonic::Sty => load_store::execute_sty(self, instr),

            Mnemonic::Tax => transfer::execute_tax(self, instr),
            Mnemonic::Tay => transfer::execute_tay(self, instr),
            Mnemonic::Txa => transfer::execute_txa(self, instr),
            Mnemonic::Tya => transfer::execute_tya(self, instr),
            Mnemonic::Tsx => transfer::execute_tsx(self, instr),
            Mnemonic::Txs => transfer::execute_txs(self, instr),

            Mnemonic::Inc => inc_dec::execute_inc(self, instr),
            Mnemonic::Dec => inc_dec::execute_dec(self, instr),
            Mnemonic::Inx => inc_dec::execute_inx(self, instr),
            Mnemonic::Iny => inc_dec::execute_iny(self, instr),
            Mnemonic::Dex => inc_dec::execute_dex(self, instr),
            Mnemonic::Dey => inc_dec::execute_dey(self, instr),

            Mnemonic::Adc => alu::execute_adc(self, instr),
            Mnemonic::Sbc => alu::execute_sbc(self, instr),
            Mnemonic::And => alu::execute_and(self, instr),
            Mnemonic::Ora => alu::execute_ora(self, instr),
            Mnemonic::Eor => alu::execute_eor(self, instr),
            Mnemonic::Cmp => alu::execute_cmp(self, instr),
            Mnemonic::Cpx => alu::execute_cpx(self, instr),
            Mnemonic::Cpy => alu::execute_cpy(self, instr),
            Mnemonic::Bit => alu::execute_bit(self, instr),

            Mnemonic::Asl => shifts::execute_asl(self, instr),
            Mnemonic::Lsr => shifts::execute_lsr(self, instr),
            Mnemonic::Rol => shifts::execute_rol(self, instr),
            Mnemonic::Ror => shifts::execute_ror(self, instr),

            Mnemonic::Bcc
            | Mnemonic::Bcs
            | Mnemonic::Bne
            | Mnemonic::Beq
            | Mnemonic::Bpl
            | Mnemonic::Bmi
            | Mnemonic::Bvc
            | Mnemonic::Bvs => branches::execute_branch(self, instr),

            Mnemonic::Jmp => control::execute_jmp(self, instr),
            Mnemonic::Jsr => control::execute_jsr(self, instr),
            Mnemonic::Rts => control::execute_rts(self, instr),
            Mnemonic::Rti => control::execute_rti(self, instr),
            Mnemonic::Brk => control::execute_brk(self, instr),
            Mnemonic::Nop => Ok(()),

            Mnemonic::Pha => stack::execute_pha(self, instr),
            Mnemonic::Php => stack::execute_php(self, instr),
            Mnemonic::Pla => stack::execute_pla(self, instr),
            Mnemonic::Plp => stack::execute_plp(self, instr),

            Mnemonic::Clc => flags::clear_flag(self, Status::CARRY),
            Mnemonic::Sec => flags::set_flag(self, Status::CARRY),
            Mnemonic::Cli => flags::clear_flag(self, Status::INTERRUPT_DISABLE),
            Mnemonic::Sei => flags::set_flag(self, Status::INTERRUPT_DISABLE),
            Mnemonic::Cld => flags::clear_flag(self, Status::DECIMAL),
            Mnemonic::Sed => flags::set_flag(self, Status::DECIMAL),
            Mnemonic::Clv => flags::clear_flag(self, Status::OVERFLOW),
        }
    }

    /// Moves the engine to [`EngineState::Halted`].
    pub(crate) fn halt(&mut self) {
        self.state = EngineState::Halted;
        debug!(
            "halted at PC=${:04X} after {} instructions",
            self.regs.pc,
            self.instructions + 1
        );
    }

    /// Resets the engine, then executes instructions until it halts.
    ///
    /// The loop is bounded only by the program's own BRK; callers needing
    /// preemption use [`step`](Self::step) or
    /// [`run_for_instructions`](Self::run_for_instructions).
    ///
    /// # Examples
    ///
    /// ```
    /// use engine6502::{Cpu, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load_at(0x0000, &[0xA2, 0x05, 0xCA, 0xD0, 0xFD, 0x00]); // LDX #5; loop: DEX; BNE loop; BRK
    ///
    /// let mut cpu = Cpu::new(mem);
    /// cpu.run().unwrap();
    /// assert_eq!(cpu.x(), 0x00);
    /// assert!(cpu.flag_z());
    /// ```
    pub fn run(&mut self) -> Result<(), ExecutionError> {
        self.reset();

        while self.state == EngineState::Running {
            self.step()?;
        }

        Ok(())
    }

    /// Executes up to `budget` instructions without resetting.
    ///
    /// Stops early if the engine halts. Returns the number of instructions
    /// actually executed.
    pub fn run_for_instructions(&mut self, budget: u64) -> Result<u64, ExecutionError> {
        let start = self.instructions;

        while self.instructions - start < budget && self.state == EngineState::Running {
            self.step()?;
        }

        Ok(self.instructions - start)
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward.
    pub fn sp(&self) -> u8 {
        self.regs.sp
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (CZIDB-VN):
    /// - Bit 7: C (Carry)
    /// - Bit 6: Z (Zero)
    /// - Bit 5: I (Interrupt Disable)
    /// - Bit 4: D (Decimal)
    /// - Bit 3: B (Break)
    /// - Bit 2: (unused, always 1)
    /// - Bit 1: V (Overflow)
    /// - Bit 0: N (Negative)
    pub fn status(&self) -> u8 {
        self.regs.p.bits()
    }

    /// Returns the flag register.
    pub fn flags(&self) -> &FlagRegister {
        &self.regs.p
    }

    /// Returns a copy of the whole register file.
    pub fn registers(&self) -> Registers {
        self.regs
    }

    /// Returns whether the engine is running or halted.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Returns true once BRK has halted the engine.
    pub fn is_halted(&self) -> bool {
        self.state == EngineState::Halted
    }

    /// Returns the number of instructions executed since the last reset.
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.regs.p.contains(Status::NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.regs.p.contains(Status::OVERFLOW)
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.regs.p.contains(Status::BREAK)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.regs.p.contains(Status::DECIMAL)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.regs.p.contains(Status::INTERRUPT_DISABLE)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.regs.p.contains(Status::ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.regs.p.contains(Status::CARRY)
    }

    // ========== Setters (drivers and tests) ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.regs.sp = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    /// Returns the flag register for mutation through its named operations.
    pub fn flags_mut(&mut self) -> &mut FlagRegister {
        &mut self.regs.p
    }
}
