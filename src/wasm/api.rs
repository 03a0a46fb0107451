//! WASM API for the 6502 engine.
//!
//! Provides JavaScript-callable interfaces for loading memory images,
//! lifecycle control and state inspection.

use crate::{Cpu, EngineState, FlatMemory, Instruction, MemoryBus, OPCODE_TABLE};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<crate::ExecutionError> for JsError {
    fn from(err: crate::ExecutionError) -> Self {
        JsError::new(&err.to_string())
    }
}

/// Main engine interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: Cpu<FlatMemory>,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create an engine over 64KB of zeroed memory
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator6502 {
            cpu: Cpu::new(FlatMemory::new()),
        }
    }

    /// Copy `image` into memory starting at 0x0000, then reset
    ///
    /// Images shorter than 64KB leave the rest of memory untouched.
    pub fn load_image(&mut self, image: &[u8]) {
        self.cpu.memory_mut().load_at(0x0000, image);
        self.cpu.reset();
    }

    /// Copy a program into memory at `start_addr` without resetting
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        self.cpu.memory_mut().load_at(start_addr, program);
    }

    /// Reset the engine (PC from 0xFFFC/0xFFFD)
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Execute a single instruction; returns true once the engine has halted
    pub fn step(&mut self) -> Result<bool, JsError> {
        let state = self.cpu.step()?;
        Ok(state == EngineState::Halted)
    }

    /// Reset, then execute until BRK halts the engine
    pub fn run(&mut self) -> Result<(), JsError> {
        self.cpu.run()?;
        Ok(())
    }

    /// Execute up to `budget` instructions and return how many ran
    pub fn run_for_instructions(&mut self, budget: u32) -> Result<u32, JsError> {
        let executed = self.cpu.run_for_instructions(budget as u64)?;
        Ok(executed as u32)
    }

    /// Describe the instruction at `addr`, or "???" for undocumented opcodes
    pub fn describe(&self, addr: u16) -> String {
        let memory = self.cpu.memory();
        let opcode = memory.read(addr);

        let Some(metadata) = OPCODE_TABLE[opcode as usize] else {
            return "???".to_string();
        };

        let operand = match metadata.addressing_mode.operand_bytes() {
            0 => 0,
            1 => memory.read(addr.wrapping_add(1)) as u16,
            _ => memory.read_word(addr.wrapping_add(1)),
        };

        Instruction {
            opcode,
            mnemonic: metadata.mnemonic,
            mode: metadata.addressing_mode,
            operand,
        }
        .to_string()
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn halted(&self) -> bool {
        self.cpu.is_halted()
    }

    #[wasm_bindgen(getter)]
    pub fn instructions(&self) -> f64 {
        self.cpu.instructions() as f64 // u64 does not cross the JS boundary
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_b(&self) -> bool {
        self.cpu.flag_b()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as u16) << 8;
        (0..256).map(|i| self.cpu.memory().read(start + i)).collect()
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}
