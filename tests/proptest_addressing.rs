//! Property-based tests for the addressing-mode resolver.

use engine6502::{resolve, AddressingMode, FlatMemory, MemoryBus, Registers};
use proptest::prelude::*;

proptest! {
    /// Zero page indexed modes always stay inside page zero
    #[test]
    fn prop_zero_page_indexed_stays_in_page_zero(operand in 0u8..=255, index in 0u8..=255) {
        let mem = FlatMemory::new();
        let mut regs = Registers::new();
        regs.x = index;
        regs.y = index;

        let zpx = resolve(AddressingMode::ZeroPageX, operand as u16, &regs, &mem).unwrap();
        let zpy = resolve(AddressingMode::ZeroPageY, operand as u16, &regs, &mem).unwrap();

        prop_assert!(zpx <= 0x00FF);
        prop_assert_eq!(zpx, operand.wrapping_add(index) as u16);
        prop_assert_eq!(zpx, zpy);
    }

    /// Absolute indexed modes wrap modulo 65536
    #[test]
    fn prop_absolute_indexed_wraps(operand in any::<u16>(), index in any::<u8>()) {
        let mem = FlatMemory::new();
        let mut regs = Registers::new();
        regs.x = index;

        let addr = resolve(AddressingMode::AbsoluteX, operand, &regs, &mem).unwrap();

        prop_assert_eq!(addr, operand.wrapping_add(index as u16));
    }

    /// Relative targets are PC plus the sign-extended offset
    #[test]
    fn prop_relative_is_signed_offset(pc in any::<u16>(), offset in any::<u8>()) {
        let mem = FlatMemory::new();
        let mut regs = Registers::new();
        regs.pc = pc;

        let addr = resolve(AddressingMode::Relative, offset as u16, &regs, &mem).unwrap();

        prop_assert_eq!(addr, (pc as i32 + offset as i8 as i32).rem_euclid(0x10000) as u16);
    }

    /// Indexed indirect reads its pointer from page zero
    #[test]
    fn prop_indexed_indirect_pointer(zp in any::<u8>(), x in any::<u8>(), target in any::<u16>()) {
        let mut mem = FlatMemory::new();
        let ptr = zp.wrapping_add(x);
        mem.write(ptr as u16, target as u8);
        mem.write(ptr.wrapping_add(1) as u16, (target >> 8) as u8);

        let mut regs = Registers::new();
        regs.x = x;

        let addr = resolve(AddressingMode::IndirectX, zp as u16, &regs, &mem).unwrap();
        prop_assert_eq!(addr, target);
    }
}
