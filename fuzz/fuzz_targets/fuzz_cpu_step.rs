//! Fuzz target for engine step execution.
//!
//! Builds an arbitrary register file and memory contents, then runs a short
//! burst of instructions looking for panics or broken invariants.

#![no_main]

use arbitrary::Arbitrary;
use engine6502::{BrkBehavior, Cpu, CpuConfig, ExecutionError, FlatMemory, MemoryBus, Status};
use libfuzzer_sys::fuzz_target;

/// Arbitrary initial register state
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Raw status byte; the unused bit is forced by the flag unit
    status: u8,
    /// Push a frame on BRK instead of plain halting
    push_on_brk: bool,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Program bytes at 0x8000
    program: [u8; 16],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Data at 0x4000 for absolute addressing
    main_memory: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    // Reset vector points to 0x8000
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);

    memory.load_at(0x8000, &input.memory.program);
    memory.load_at(0x0000, &input.memory.zero_page);
    memory.load_at(0x0100, &input.memory.stack_page);
    memory.load_at(0x4000, &input.memory.main_memory);

    let brk = if input.cpu_state.push_on_brk {
        BrkBehavior::PushAndHalt
    } else {
        BrkBehavior::Halt
    };
    let mut cpu = Cpu::with_config(memory, CpuConfig { brk });

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    for flag in Status::all().iter() {
        cpu.flags_mut()
            .assign(flag, input.cpu_state.status & flag.bits() != 0);
    }

    // Undocumented opcodes are expected; panics are not
    match cpu.run_for_instructions(32) {
        Ok(executed) => assert!(executed <= 32),
        Err(ExecutionError::UnimplementedOpcode(op)) => {
            assert!(engine6502::OPCODE_TABLE[op as usize].is_none());
        }
        Err(other) => panic!("unexpected error: {other}"),
    }

    assert!(cpu.flags().contains(Status::UNUSED));
    if cpu.is_halted() {
        assert!(cpu.flag_b());
        assert!(cpu.flag_i());
    }
});
