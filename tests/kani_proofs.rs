//! Kani formal verification proofs for the instruction engine.
//!
//! These proofs use bounded model checking to verify flag-unit and
//! resolver invariants for ALL possible inputs.
//!
//! To run these proofs, install Kani and run:
//! ```
//! cargo kani --tests
//! ```
//!
//! They are compiled only under the `kani` cfg and are ignored by regular
//! test runs.

// Allow the `kani` cfg which is set by the Kani verifier
#![allow(unexpected_cfgs)]

#[cfg(kani)]
mod kani_proofs {
    use engine6502::{resolve, AddressingMode, FlagRegister, MemoryBus, Registers, Status};

    /// Single-page bus; the model checker never sees a 64KB array.
    struct PageBus {
        page: [u8; 256],
    }

    impl MemoryBus for PageBus {
        fn read(&self, addr: u16) -> u8 {
            self.page[(addr & 0xFF) as usize]
        }

        fn write(&mut self, addr: u16, value: u8) {
            self.page[(addr & 0xFF) as usize] = value;
        }
    }

    // ========== Flag Unit Proofs ==========

    /// Proof: update_negative touches only N and matches bit 7
    #[kani::proof]
    fn proof_update_negative() {
        let value: u8 = kani::any();
        let mut flags = FlagRegister::new();
        flags.assign(Status::CARRY, kani::any());
        let before = flags.bits();

        let negative = flags.update_negative(value);

        kani::assert(negative == (value & 0x80 != 0), "N must mirror bit 7");
        kani::assert(
            (flags.bits() ^ before) & !Status::NEGATIVE.bits() == 0,
            "update_negative must touch only N",
        );
    }

    /// Proof: update_zero touches only Z and matches value == 0
    #[kani::proof]
    fn proof_update_zero() {
        let value: u8 = kani::any();
        let mut flags = FlagRegister::new();
        let before = flags.bits();

        let zero = flags.update_zero(value);

        kani::assert(zero == (value == 0), "Z must mirror value == 0");
        kani::assert(
            (flags.bits() ^ before) & !Status::ZERO.bits() == 0,
            "update_zero must touch only Z",
        );
    }

    /// Proof: overflow agrees with signed range check for addition
    #[kani::proof]
    fn proof_overflow_matches_signed_sum() {
        let a: u8 = kani::any();
        let m: u8 = kani::any();
        let c: bool = kani::any();

        let result = (a as u16 + m as u16 + c as u16) as u8;
        let signed = a as i8 as i16 + m as i8 as i16 + c as i16;

        let mut flags = FlagRegister::new();
        let overflow = flags.update_overflow(a, m, result);

        kani::assert(
            overflow == !(-128..=127).contains(&signed),
            "V must flag signed overflow",
        );
    }

    /// Proof: the unused bit can never be cleared
    #[kani::proof]
    fn proof_unused_bit_sticky() {
        let bits: u8 = kani::any();
        let mut flags = FlagRegister::new();

        flags.clear(Status::from_bits_retain(bits));

        kani::assert(flags.contains(Status::UNUSED), "Unused bit must stay set");
    }

    // ========== Resolver Proofs ==========

    /// Proof: zero page indexed modes stay inside page zero
    #[kani::proof]
    fn proof_zero_page_indexed_wrap() {
        let base: u8 = kani::any();
        let mut regs = Registers::new();
        regs.x = kani::any();
        let bus = PageBus { page: [0; 256] };

        let addr = resolve(AddressingMode::ZeroPageX, base as u16, &regs, &bus);

        kani::assert(
            matches!(addr, Ok(a) if a <= 0x00FF),
            "Zero page + X must stay in zero page",
        );
    }

    /// Proof: stack address is always in 0x0100-0x01FF
    #[kani::proof]
    fn proof_stack_address_in_stack_page() {
        let mut regs = Registers::new();
        regs.sp = kani::any();

        let addr = regs.stack_addr();

        kani::assert(addr >= 0x0100 && addr <= 0x01FF, "Stack address must be in page 1");
    }

    /// Proof: relative targets never panic and land within +127/-128
    #[kani::proof]
    fn proof_relative_offset_range() {
        let offset: u8 = kani::any();
        let mut regs = Registers::new();
        regs.pc = 0x8000;
        let bus = PageBus { page: [0; 256] };

        let addr = resolve(AddressingMode::Relative, offset as u16, &regs, &bus);

        kani::assert(
            matches!(addr, Ok(a) if (0x7F80..=0x807F).contains(&a)),
            "Relative target must be within the signed offset range",
        );
    }
}
