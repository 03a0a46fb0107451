//! # 6502 Instruction Engine
//!
//! An instruction-level NMOS 6502 execution engine designed for modularity,
//! clarity, and WebAssembly portability.
//!
//! This crate provides the register file, the status-flag unit, the
//! addressing-mode resolver, and the fetch-decode-execute loop of the MOS
//! Technology 6502, on top of a trait-based memory bus abstraction.
//!
//! ## Quick Start
//!
//! ```rust
//! use engine6502::{Cpu, EngineState, FlatMemory, MemoryBus};
//!
//! let mut memory = FlatMemory::new();
//!
//! // Reset vector points to program start at 0x8000
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x80); // High byte
//!
//! // LDA #$10; BRK
//! memory.load_at(0x8000, &[0xA9, 0x10, 0x00]);
//!
//! let mut cpu = Cpu::new(memory);
//! cpu.run().unwrap();
//!
//! assert_eq!(cpu.a(), 0x10);
//! assert_eq!(cpu.pc(), 0x8003);
//! assert_eq!(cpu.state(), EngineState::Halted);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: engine state is separated from memory via the `MemoryBus` trait
//! - **Owned state**: every `Cpu` owns its registers and memory; engines are independent
//! - **Table-driven decode**: opcode byte to mnemonic and addressing mode in one table
//! - **Exhaustive dispatch**: every documented mnemonic has semantics, undocumented
//!   opcodes are reported as errors
//!
//! ## Modules
//!
//! - `cpu` - engine state, lifecycle and the fetch-decode-execute loop
//! - `flags` - status flag byte and the flag unit
//! - `registers` - register file
//! - `memory` - MemoryBus trait and FlatMemory
//! - `addressing` - addressing modes and the address resolver
//! - `opcodes` - opcode table and decoded instructions
//! - `config` - engine configuration

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod flags;
pub mod memory;
pub mod opcodes;
pub mod registers;

// Internal instruction implementations (not part of public API)
mod instructions;
mod primitives;

#[cfg(feature = "wasm")]
pub mod wasm;

use thiserror::Error;

// Re-export public API
pub use addressing::{resolve, AddressingMode};
pub use config::{BrkBehavior, CpuConfig};
pub use cpu::{Cpu, EngineState, RESET_VECTOR};
pub use flags::{FlagRegister, Status};
pub use memory::{FlatMemory, MemoryBus, MEMORY_SIZE};
pub use opcodes::{Instruction, Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use registers::{Registers, STACK_PAGE};

/// Errors that can occur during instruction execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// Opcode byte has no instruction semantics.
    ///
    /// Contains the opcode byte value for debugging purposes.
    #[error("opcode 0x{0:02X} is not implemented")]
    UnimplementedOpcode(u8),

    /// The addressing mode does not name a memory location.
    #[error("addressing mode {0:?} has no effective address")]
    UnsupportedAddressingMode(AddressingMode),

    /// `step()` was called after BRK without an intervening `reset()`.
    #[error("engine is halted; reset before stepping")]
    Halted,
}
