//! Execution loop tests
//!
//! Verifies the fetch-decode-execute cycle, halting, error surfacing and the
//! end-to-end programs driven through `run()`.

use engine6502::{Cpu, EngineState, ExecutionError, FlatMemory, MemoryBus};

/// Memory with the reset vector left at 0x0000 and `program` loaded there.
fn program_at_zero(program: &[u8]) -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load_at(0x0000, program);
    Cpu::new(memory)
}

// ========== End-to-end Programs ==========

#[test]
fn test_brk_only_program() {
    let mut cpu = program_at_zero(&[0x00]);

    cpu.run().unwrap();

    assert_eq!(cpu.pc(), 0x0001);
    assert_eq!(cpu.status(), 0b0011_1100); // I | D | B | Unused
    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.is_halted());
}

#[test]
fn test_lda_immediate_program() {
    let mut cpu = program_at_zero(&[0xA9, 0x10, 0x00]);

    cpu.run().unwrap();

    assert_eq!(cpu.pc(), 0x0003);
    assert_eq!(cpu.a(), 0x10);
    assert_eq!(cpu.status(), 0b0011_1100);
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_lda_negative_program() {
    let mut cpu = program_at_zero(&[0xA9, 0x80, 0x00]);

    cpu.run().unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_countdown_loop() {
    // LDX #$03
    // loop: DEX
    //       BNE loop
    //       BRK
    let mut cpu = program_at_zero(&[0xA2, 0x03, 0xCA, 0xD0, 0xFD, 0x00]);

    cpu.run().unwrap();

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
    // LDX + 3 * (DEX + BNE) + BRK
    assert_eq!(cpu.instructions(), 8);
}

#[test]
fn test_memory_copy_loop() {
    // LDY #$00
    // loop: LDA $0300,Y
    //       STA $0200,Y
    //       INY
    //       CPY #$04
    //       BNE loop
    //       BRK
    let program = [
        0xA0, 0x00, // 0x00
        0xB9, 0x00, 0x03, // 0x02
        0x99, 0x00, 0x02, // 0x05
        0xC8, // 0x08
        0xC0, 0x04, // 0x09
        0xD0, 0xF5, // 0x0B
        0x00, // 0x0D
    ];
    let mut cpu = program_at_zero(&program);
    cpu.memory_mut().load_at(0x0300, &[0xDE, 0xAD, 0xBE, 0xEF]);

    cpu.run().unwrap();

    assert_eq!(cpu.memory().read(0x0200), 0xDE);
    assert_eq!(cpu.memory().read(0x0201), 0xAD);
    assert_eq!(cpu.memory().read(0x0202), 0xBE);
    assert_eq!(cpu.memory().read(0x0203), 0xEF);
    assert_eq!(cpu.y(), 0x04);
    assert_eq!(cpu.pc(), 0x000E);
}

// ========== Step Semantics ==========

#[test]
fn test_step_returns_running_then_halted() {
    let mut cpu = program_at_zero(&[0xEA, 0x00]);

    assert_eq!(cpu.step(), Ok(EngineState::Running));
    assert_eq!(cpu.step(), Ok(EngineState::Halted));
    assert_eq!(cpu.step(), Err(ExecutionError::Halted));
}

#[test]
fn test_step_consumes_operand_bytes() {
    // NOP; LDA #$01; LDA $1234; BRK
    let mut cpu = program_at_zero(&[0xEA, 0xA9, 0x01, 0xAD, 0x34, 0x12, 0x00]);

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0001);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0003);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0006);
}

#[test]
fn test_unimplemented_opcode_is_surfaced() {
    let mut cpu = program_at_zero(&[0x02]);

    match cpu.step() {
        Err(ExecutionError::UnimplementedOpcode(0x02)) => {
            // Expected error
        }
        other => panic!("Expected UnimplementedOpcode(0x02), got {:?}", other),
    }
    assert_eq!(cpu.pc(), 0x0001);
}

#[test]
fn test_run_propagates_unimplemented_opcode() {
    // LDA #$01; <undocumented 0xFF>; BRK
    let mut cpu = program_at_zero(&[0xA9, 0x01, 0xFF, 0x00]);

    assert_eq!(cpu.run(), Err(ExecutionError::UnimplementedOpcode(0xFF)));
    assert_eq!(cpu.a(), 0x01);
    assert!(!cpu.is_halted());
}

#[test]
fn test_run_resets_before_executing() {
    let mut cpu = program_at_zero(&[0xE8, 0x00]); // INX; BRK

    cpu.run().unwrap();
    assert_eq!(cpu.x(), 0x01);

    // Second run starts from a fresh register file
    cpu.run().unwrap();
    assert_eq!(cpu.x(), 0x01);
    assert_eq!(cpu.pc(), 0x0002);
}

#[test]
fn test_pc_wraps_at_top_of_memory() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0xFF);
    memory.write(0xFFFD, 0xFF);
    // 0xFFFF: INX, then fetch wraps to 0x0000: BRK
    memory.write(0xFFFF, 0xE8);
    memory.write(0x0000, 0x00);

    let mut cpu = Cpu::new(memory);
    cpu.run().unwrap();

    assert_eq!(cpu.x(), 0x01);
    assert_eq!(cpu.pc(), 0x0001);
}

#[test]
fn test_error_display() {
    assert_eq!(
        ExecutionError::UnimplementedOpcode(0x02).to_string(),
        "opcode 0x02 is not implemented"
    );
    assert_eq!(
        ExecutionError::Halted.to_string(),
        "engine is halted; reset before stepping"
    );
}

// ========== Bounded Execution ==========

#[test]
fn test_run_for_instructions_stops_at_budget() {
    // loop: JMP loop
    let mut cpu = program_at_zero(&[0x4C, 0x00, 0x00]);

    assert_eq!(cpu.run_for_instructions(10), Ok(10));
    assert_eq!(cpu.instructions(), 10);
    assert_eq!(cpu.state(), EngineState::Running);
}

#[test]
fn test_run_for_instructions_stops_at_brk() {
    let mut cpu = program_at_zero(&[0xEA, 0xEA, 0x00, 0xEA]);

    assert_eq!(cpu.run_for_instructions(100), Ok(3));
    assert!(cpu.is_halted());
    assert_eq!(cpu.run_for_instructions(100), Ok(0));
}
