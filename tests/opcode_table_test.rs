//! Tests for the opcode table and dispatch coverage.

use engine6502::{
    AddressingMode, Cpu, ExecutionError, FlatMemory, MemoryBus, Mnemonic, OPCODE_TABLE,
};

#[test]
fn test_table_has_256_entries() {
    assert_eq!(OPCODE_TABLE.len(), 256);
}

#[test]
fn test_known_entries() {
    let cases = [
        (0x00, Mnemonic::Brk, AddressingMode::Implicit),
        (0x6C, Mnemonic::Jmp, AddressingMode::Indirect),
        (0x81, Mnemonic::Sta, AddressingMode::IndirectX),
        (0x91, Mnemonic::Sta, AddressingMode::IndirectY),
        (0x96, Mnemonic::Stx, AddressingMode::ZeroPageY),
        (0xA9, Mnemonic::Lda, AddressingMode::Immediate),
        (0xBE, Mnemonic::Ldx, AddressingMode::AbsoluteY),
        (0xD0, Mnemonic::Bne, AddressingMode::Relative),
        (0xE8, Mnemonic::Inx, AddressingMode::Implicit),
        (0xEA, Mnemonic::Nop, AddressingMode::Implicit),
    ];

    for (opcode, mnemonic, mode) in cases {
        let entry = OPCODE_TABLE[opcode].expect("documented opcode");
        assert_eq!(entry.mnemonic, mnemonic, "opcode {:#04X}", opcode);
        assert_eq!(entry.addressing_mode, mode, "opcode {:#04X}", opcode);
    }
}

#[test]
fn test_every_mnemonic_has_an_opcode() {
    let mut mnemonics: Vec<Mnemonic> = OPCODE_TABLE.iter().flatten().map(|m| m.mnemonic).collect();
    mnemonics.sort_by_key(|m| m.to_string());
    mnemonics.dedup();

    assert_eq!(mnemonics.len(), 56);
}

#[test]
fn test_undocumented_opcodes_report_error() {
    for (opcode, entry) in OPCODE_TABLE.iter().enumerate() {
        if entry.is_some() {
            continue;
        }

        let mut cpu = Cpu::new(FlatMemory::new());
        cpu.memory_mut().write(0x0000, opcode as u8);

        assert_eq!(
            cpu.step(),
            Err(ExecutionError::UnimplementedOpcode(opcode as u8)),
            "opcode {:#04X}",
            opcode
        );
    }
}

#[test]
fn test_every_documented_opcode_executes() {
    for (opcode, entry) in OPCODE_TABLE.iter().enumerate() {
        let Some(metadata) = entry else {
            continue;
        };

        let mut cpu = Cpu::new(FlatMemory::new());
        cpu.memory_mut().load_at(0x0000, &[opcode as u8, 0x10, 0x20]);
        cpu.set_sp(0x80);

        assert!(cpu.step().is_ok(), "opcode {:#04X} ({})", opcode, metadata.mnemonic);
    }
}

#[test]
fn test_mnemonic_display() {
    assert_eq!(Mnemonic::Lda.to_string(), "LDA");
    assert_eq!(Mnemonic::Txs.to_string(), "TXS");
}
