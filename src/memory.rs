//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the engine from
//! a specific memory implementation, plus `FlatMemory`, a plain 64KB store.
//!
//! ## Design Principles
//!
//! - No bus errors: reads and writes always succeed
//! - A 16-bit address cannot be out of range, so there are no bound checks
//! - Simple signatures for WASM compatibility

/// Size of the 6502 address space in bytes.
pub const MEMORY_SIZE: usize = 0x10000;

/// Memory bus trait for the engine to read/write bytes.
///
/// # Examples
///
/// ```
/// use engine6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use engine6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Implementations may ignore writes to
    /// read-only regions.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian 16-bit word from `addr` and `addr + 1`.
    ///
    /// The second address wraps from 0xFFFF to 0x0000.
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses are mapped to a single contiguous RAM array
/// initialized to 0x00.
///
/// # Examples
///
/// ```
/// use engine6502::{Cpu, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Reset vector low byte
/// memory.write(0xFFFD, 0x80); // Reset vector high byte (PC = 0x8000)
/// memory.load_at(0x8000, &[0xA9, 0x01, 0x00]); // LDA #$01; BRK
///
/// let cpu = Cpu::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; MEMORY_SIZE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Creates memory holding a copy of a full 64KB image.
    pub fn from_image(image: &[u8; MEMORY_SIZE]) -> Self {
        let mut mem = Self::new();
        mem.load(image);
        mem
    }

    /// Replaces the whole address space with `image`.
    pub fn load(&mut self, image: &[u8; MEMORY_SIZE]) {
        self.data.copy_from_slice(image);
    }

    /// Copies `bytes` into memory starting at `start`.
    ///
    /// Writes past 0xFFFF wrap around to 0x0000. Bytes beyond the size of
    /// the address space are ignored.
    pub fn load_at(&mut self, start: u16, bytes: &[u8]) {
        for (offset, &byte) in bytes.iter().take(MEMORY_SIZE).enumerate() {
            self.data[start.wrapping_add(offset as u16) as usize] = byte;
        }
    }

    /// Resets every byte to 0x00.
    pub fn clear(&mut self) {
        self.data.fill(0x00);
    }

    /// Returns the raw 64KB contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();

        // Initially all zeros
        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);

        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);

        // Neighbours unchanged
        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_flat_memory_full_range() {
        let mut mem = FlatMemory::new();

        mem.write(0x0000, 0x01);
        mem.write(0x7FFF, 0x7F);
        mem.write(0x8000, 0x80);
        mem.write(0xFFFF, 0xFF);

        assert_eq!(mem.read(0x0000), 0x01);
        assert_eq!(mem.read(0x7FFF), 0x7F);
        assert_eq!(mem.read(0x8000), 0x80);
        assert_eq!(mem.read(0xFFFF), 0xFF);
    }

    #[test]
    fn test_read_word_little_endian_and_wraps() {
        let mut mem = FlatMemory::new();
        mem.write(0x1000, 0x34);
        mem.write(0x1001, 0x12);
        assert_eq!(mem.read_word(0x1000), 0x1234);

        mem.write(0xFFFF, 0xCD);
        mem.write(0x0000, 0xAB);
        assert_eq!(mem.read_word(0xFFFF), 0xABCD);
    }

    #[test]
    fn test_bulk_load_and_clear() {
        let mut image = [0u8; MEMORY_SIZE];
        image[0x0000] = 0xA9;
        image[0xFFFD] = 0x80;

        let mut mem = FlatMemory::from_image(&image);
        assert_eq!(mem.read(0x0000), 0xA9);
        assert_eq!(mem.read(0xFFFD), 0x80);

        mem.clear();
        assert!(mem.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_load_at_wraps() {
        let mut mem = FlatMemory::new();
        mem.load_at(0xFFFE, &[0x01, 0x02, 0x03]);

        assert_eq!(mem.read(0xFFFE), 0x01);
        assert_eq!(mem.read(0xFFFF), 0x02);
        assert_eq!(mem.read(0x0000), 0x03);
    }
}
