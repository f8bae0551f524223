//! Property-based tests for 24-bit address arithmetic and addressing modes.
//!
//! These tests verify the bank/offset model, the two offset arithmetic
//! flavors, and that direct page and indexed modes land where the hardware
//! would put them.

use lib65816::{Address, FlatMemory, CPU};
use proptest::prelude::*;

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x00FFFC, &[0x00, 0x80]);
    CPU::new(memory)
}

/// Native mode with 16-bit accumulator and index registers
fn setup_native_cpu() -> CPU<FlatMemory> {
    let mut cpu = setup_cpu();
    cpu.set_emulation(false);
    cpu.set_status(0x00);
    cpu
}

// ========== Address Arithmetic Tests ==========

proptest! {
    /// Property: integer conversion round-trips and keeps only 24 bits
    #[test]
    fn prop_integer_round_trip(value in any::<u32>()) {
        let address = Address::from_integer(value);

        prop_assert_eq!(address.as_integer(), value & 0x00FF_FFFF);
        prop_assert_eq!(Address::from_integer(address.as_integer()), address);
        prop_assert_eq!(address.bank as u32, (value >> 16) & 0xFF);
        prop_assert_eq!(address.offset as u32, value & 0xFFFF);
    }

    /// Property: wrapping offset arithmetic never changes the bank
    #[test]
    fn prop_wrap_stays_in_bank(bank in any::<u8>(), offset in any::<u16>(), delta in -0x2_0000i32..0x2_0000) {
        let address = Address::new(bank, offset).with_offset_wrap(delta);

        prop_assert_eq!(address.bank, bank);
        prop_assert_eq!(address.offset, offset.wrapping_add(delta as u16));
    }

    /// Property: non-wrapping offset arithmetic is plain 24-bit addition
    #[test]
    fn prop_no_wrap_is_integer_addition(bank in any::<u8>(), offset in any::<u16>(), delta in -0x2_0000i32..0x2_0000) {
        let start = Address::new(bank, offset);
        let address = start.with_offset_no_wrap(delta);

        let expected = (start.as_integer() as i64 + delta as i64).rem_euclid(0x100_0000) as u32;
        prop_assert_eq!(address.as_integer(), expected);
    }

    /// Property: addresses order by their integer value
    #[test]
    fn prop_ordering_matches_integer(a in 0u32..0x100_0000, b in 0u32..0x100_0000) {
        let (x, y) = (Address::from_integer(a), Address::from_integer(b));
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
    }

    /// Property: the page predicate compares high bytes
    #[test]
    fn prop_page_predicate(a in any::<u16>(), b in any::<u16>()) {
        prop_assert_eq!(
            Address::offsets_are_on_different_pages(a, b),
            (a & 0xFF00) != (b & 0xFF00)
        );
    }
}

// ========== Addressing Mode Tests ==========

proptest! {
    /// Property: emulation-mode direct page wraps inside page zero
    #[test]
    fn prop_emulation_direct_x_wraps_in_page_zero(dp in any::<u8>(), x in any::<u8>(), value in any::<u8>()) {
        let mut cpu = setup_cpu();
        let target = dp.wrapping_add(x) as usize;
        cpu.memory_mut().load(target as u32, &[value]);
        cpu.memory_mut().load(0x008000, &[0xB5, dp]); // LDA dp,X
        cpu.set_x(x as u16);

        cpu.step();

        prop_assert_eq!(cpu.a() & 0xFF, value as u16);
    }

    /// Property: native direct page adds D and stays in bank 0
    #[test]
    fn prop_native_direct_page_uses_d(d in any::<u16>(), dp in any::<u8>(), value in any::<u16>()) {
        let mut cpu = setup_native_cpu();
        let low = d.wrapping_add(dp as u16);
        let high = low.wrapping_add(1);
        prop_assume!(!(0x8000..0x8002).contains(&low) && !(0x8000..0x8002).contains(&high));

        cpu.memory_mut().load(low as u32, &[value as u8]);
        cpu.memory_mut().load(high as u32, &[(value >> 8) as u8]);
        cpu.memory_mut().load(0x008000, &[0xA5, dp]); // LDA dp
        cpu.set_d(d);

        cpu.step();

        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: absolute indexed addressing carries into the next bank
    #[test]
    fn prop_absolute_x_carries_into_bank(dbr in 0u8..0xFF, base in any::<u16>(), x in any::<u16>(), value in any::<u8>()) {
        let mut cpu = setup_native_cpu();
        cpu.set_status(0x20); // 8-bit A, 16-bit index
        let target = Address::new(dbr, base).with_offset_no_wrap(x as i32);
        prop_assume!(target.as_integer() > 0x00_8002 || target.as_integer() < 0x00_8000);

        cpu.memory_mut().load(target.as_integer(), &[value]);
        cpu.memory_mut().load(0x008000, &[0xBD, base as u8, (base >> 8) as u8]);
        cpu.set_dbr(dbr);
        cpu.set_x(x);

        cpu.step();

        prop_assert_eq!(cpu.a() & 0xFF, value as u16);
    }

    /// Property: long addressing ignores DBR
    #[test]
    fn prop_long_ignores_data_bank(bank in 1u8..=0xFF, offset in any::<u16>(), dbr in any::<u8>(), value in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(Address::new(bank, offset).as_integer(), &[value]);
        cpu.memory_mut().load(0x008000, &[0xAF, offset as u8, (offset >> 8) as u8, bank]);
        cpu.set_dbr(dbr);

        cpu.step();

        prop_assert_eq!(cpu.a() & 0xFF, value as u16);
    }
}
