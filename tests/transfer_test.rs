//! Tests for the register transfer instructions.
//!
//! Tests cover:
//! - Destination width decides how many bits move
//! - N/Z updates (and their absence for TXS/TCS)
//! - 16-bit transfers with D and S
//! - XBA

use lib65816::{FlatMemory, CPU};

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

// ========== Accumulator / Index Tests ==========

#[test]
fn test_tax_8bit_index_takes_low_byte() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x008000, &[0xAA]);
    cpu.set_a(0x1280);

    assert_eq!(cpu.step(), 2);

    assert_eq!(cpu.x(), 0x0080);
    assert!(cpu.flags().sign);
}

#[test]
fn test_tay_16bit_index_from_8bit_accumulator_takes_full_c() {
    let mut cpu = setup_native_cpu();
    cpu.set_status(0x20); // 8-bit A, 16-bit index
    cpu.memory_mut().load(0x008000, &[0xA8]);
    cpu.set_a(0x1234);

    cpu.step();

    assert_eq!(cpu.y(), 0x1234);
    assert!(!cpu.flags().sign);
}

#[test]
fn test_txa_8bit_accumulator_preserves_b() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x008000, &[0x8A]);
    cpu.set_a(0xAB00);
    cpu.set_x(0x00);

    cpu.step();

    assert_eq!(cpu.a(), 0xAB00);
    assert!(cpu.flags().zero);
}

#[test]
fn test_tya_16bit() {
    let mut cpu = setup_native_cpu();
    cpu.memory_mut().load(0x008000, &[0x98]);
    cpu.set_y(0x8000);

    cpu.step();

    assert_eq!(cpu.a(), 0x8000);
    assert!(cpu.flags().sign);
}

#[test]
fn test_txy_tyx() {
    let mut cpu = setup_native_cpu();
    cpu.memory_mut().load(0x008000, &[0x9B, 0xA0, 0x00, 0x00, 0xBB]);
    cpu.set_x(0x4321);

    cpu.step();
    assert_eq!(cpu.y(), 0x4321);

    cpu.step(); // LDY #$0000
    cpu.step();
    assert_eq!(cpu.x(), 0x0000);
    assert!(cpu.flags().zero);
}

// ========== Stack Pointer Tests ==========

#[test]
fn test_tsx_emulation() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x008000, &[0xBA]);

    cpu.step();

    assert_eq!(cpu.x(), 0x00FF);
    assert!(cpu.flags().sign);
}

#[test]
fn test_txs_emulation_keeps_page_one_and_flags() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x008000, &[0x9A]);
    cpu.set_x(0x00);
    let before = cpu.status();

    cpu.step();

    assert_eq!(cpu.sp(), 0x0100);
    assert_eq!(cpu.status(), before);
}

#[test]
fn test_tcs_tsc_native() {
    let mut cpu = setup_native_cpu();
    cpu.memory_mut().load(0x008000, &[0x1B, 0xA9, 0x00, 0x00, 0x3B]);
    cpu.set_a(0x1FFF);

    cpu.step();
    assert_eq!(cpu.sp(), 0x1FFF);

    cpu.step(); // LDA #$0000
    cpu.step();
    assert_eq!(cpu.a(), 0x1FFF);
    assert!(!cpu.flags().zero);
}

#[test]
fn test_tsc_in_8bit_mode_moves_all_16_bits() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x008000, &[0x3B]);

    cpu.step();

    assert_eq!(cpu.a(), 0x01FF);
}

// ========== Direct Page Tests ==========

#[test]
fn test_tcd_tdc_are_16bit() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x008000, &[0x5B, 0x7B]);
    cpu.set_a(0x8000);

    cpu.step();
    assert_eq!(cpu.d(), 0x8000);
    assert!(cpu.flags().sign);

    cpu.set_a(0x0000);
    cpu.step();
    assert_eq!(cpu.a(), 0x8000);
}

// ========== XBA Tests ==========

#[test]
fn test_xba_swaps_and_flags_from_new_low_byte() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x008000, &[0xEB, 0xEB]);
    cpu.set_a(0x8000);

    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.a(), 0x0080);
    assert!(cpu.flags().sign);
    assert!(!cpu.flags().zero);

    cpu.step();
    assert_eq!(cpu.a(), 0x8000);
    assert!(cpu.flags().zero);
    assert!(!cpu.flags().sign);
}
