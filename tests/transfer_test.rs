//! Tests for the register transfer instructions.

use engine6502::{Cpu, FlatMemory, MemoryBus};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    Cpu::new(memory)
}

#[test]
fn test_tax() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xAA);
    cpu.set_a(0x80);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n());
}

#[test]
fn test_tay_zero() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xA8);
    cpu.set_y(0x10);

    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_txa_and_tya() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load_at(0x8000, &[0x8A, 0x98]);
    cpu.set_x(0x11);
    cpu.set_y(0x22);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x11);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x22);
}

#[test]
fn test_tsx_updates_flags() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xBA);
    cpu.set_sp(0xF0);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0xF0);
    assert!(cpu.flag_n());
}

#[test]
fn test_txs_leaves_flags() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x9A);
    cpu.set_x(0x00);
    let before = cpu.status();

    cpu.step().unwrap();

    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.status(), before);
    assert!(!cpu.flag_z());
}
