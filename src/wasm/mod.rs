//! WebAssembly bindings for the engine.
//!
//! This module provides JavaScript-callable interfaces to the 6502 engine,
//! enabling browser-based execution of raw machine code images.

pub mod api;

pub use api::Emulator6502;
