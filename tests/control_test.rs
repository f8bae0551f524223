//! Tests for the control flow instructions.
//!
//! Tests cover:
//! - JMP in all three forms and JML
//! - JSR/RTS and JSL/RTL round trips
//! - BRK and COP frames in both modes
//! - RTI in both modes
//! - NOP, WDM, WAI and STP

use lib65816::{FlatMemory, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x00FFFC, &[0x00, 0x80]);
    CPU::new(memory)
}

fn byte_at(cpu: &CPU<FlatMemory>, address: usize) -> u8 {
    cpu.memory().as_slice()[address]
}

// ========== JMP / JML Tests ==========

#[test]
fn test_jmp_absolute_stays_in_program_bank() {
    let mut cpu = setup_cpu();
    cpu.set_pbr(0x03);
    cpu.memory_mut().load(0x038000, &[0x4C, 0x34, 0x12]);

    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.pbr(), 0x03);
    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_jmp_indirect_reads_bank_zero() {
    let mut cpu = setup_cpu();
    cpu.set_pbr(0x03);
    cpu.memory_mut().load(0x038000, &[0x6C, 0x00, 0x20]);
    cpu.memory_mut().load(0x002000, &[0x78, 0x56]);
    cpu.memory_mut().load(0x032000, &[0xFF, 0xFF]);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.pc(), 0x5678);
    assert_eq!(cpu.pbr(), 0x03);
}

#[test]
fn test_jmp_indexed_indirect() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x008000, &[0x7C, 0x00, 0x90]);
    cpu.memory_mut().load(0x009004, &[0x00, 0xA0]);
    cpu.set_x(0x04);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.pc(), 0xA000);
}

#[test]
fn test_jml_long_and_indirect_long() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x008000, &[0x5C, 0x00, 0x10, 0x7E]);
    cpu.memory_mut().load(0x7E1000, &[0xDC, 0x00, 0x03]);
    cpu.memory_mut().load(0x000300, &[0x00, 0x20, 0x12]);

    assert_eq!(cpu.step(), 4);
    assert_eq!((cpu.pbr(), cpu.pc()), (0x7E, 0x1000));

    assert_eq!(cpu.step(), 6);
    assert_eq!((cpu.pbr(), cpu.pc()), (0x12, 0x2000));
}

// ========== Subroutine Tests ==========

#[test]
fn test_jsr_pushes_last_byte_of_instruction() {
    let mut memory = FlatMemory::new();
    memory.load(0x00FFFC, &[0x00, 0x10]);
    memory.load(0x001000, &[0x20, 0x00, 0x20]);
    let mut cpu = CPU::new(memory);

    assert_eq!(cpu.step(), 6);

    assert_eq!(cpu.pc(), 0x2000);
    assert_eq!(cpu.sp(), 0x01FD);
    assert_eq!(byte_at(&cpu, 0x01FF), 0x10);
    assert_eq!(byte_at(&cpu, 0x01FE), 0x02);
}

#[test]
fn test_jsr_rts_round_trip() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x008000, &[0x20, 0x00, 0x90, 0xEA]);
    cpu.memory_mut().load(0x009000, &[0x60]);

    cpu.step();
    assert_eq!(cpu.step(), 6);

    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.sp(), 0x01FF);
}

#[test]
fn test_jsr_indexed_indirect() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x008000, &[0xFC, 0x00, 0x90]);
    cpu.memory_mut().load(0x009002, &[0x00, 0xA0]);
    cpu.set_x(0x02);

    assert_eq!(cpu.step(), 8);
    assert_eq!(cpu.pc(), 0xA000);
    assert_eq!(byte_at(&cpu, 0x01FF), 0x80);
    assert_eq!(byte_at(&cpu, 0x01FE), 0x02);
}

#[test]
fn test_jsl_rtl_round_trip() {
    let mut cpu = setup_cpu();
    cpu.set_emulation(false);
    cpu.memory_mut().load(0x008000, &[0x22, 0x00, 0x40, 0x12]);
    cpu.memory_mut().load(0x124000, &[0x6B]);

    assert_eq!(cpu.step(), 8);
    assert_eq!((cpu.pbr(), cpu.pc()), (0x12, 0x4000));
    assert_eq!(cpu.sp(), 0x01FC);
    assert_eq!(byte_at(&cpu, 0x01FF), 0x00); // PBR
    assert_eq!(byte_at(&cpu, 0x01FE), 0x80);
    assert_eq!(byte_at(&cpu, 0x01FD), 0x03);

    assert_eq!(cpu.step(), 6);
    assert_eq!((cpu.pbr(), cpu.pc()), (0x00, 0x8004));
    assert_eq!(cpu.sp(), 0x01FF);
}

// ========== BRK / COP / RTI Tests ==========

#[test]
fn test_brk_emulation_frame() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x008000, &[0x00, 0xEA]);
    cpu.memory_mut().load(0x00FFFE, &[0x00, 0x90]);
    cpu.set_status(0x08); // D set, I clear

    assert_eq!(cpu.step(), 7);

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0x01FC);
    assert_eq!(byte_at(&cpu, 0x01FF), 0x80);
    assert_eq!(byte_at(&cpu, 0x01FE), 0x02);
    // B (bit 4) and bit 5 set in the pushed P
    assert_eq!(byte_at(&cpu, 0x01FD), 0x38);
    assert!(cpu.flags().irq_disable);
    assert!(!cpu.flags().decimal);
}

#[test]
fn test_brk_native_frame() {
    let mut cpu = setup_cpu();
    cpu.set_emulation(false);
    cpu.set_pbr(0x02);
    cpu.memory_mut().load(0x028000, &[0x00, 0xEA]);
    cpu.memory_mut().load(0x00FFE6, &[0x00, 0xA0]);

    assert_eq!(cpu.step(), 8);

    assert_eq!((cpu.pbr(), cpu.pc()), (0x00, 0xA000));
    assert_eq!(cpu.sp(), 0x01FB);
    assert_eq!(byte_at(&cpu, 0x01FF), 0x02);
    assert_eq!(byte_at(&cpu, 0x01FE), 0x80);
    assert_eq!(byte_at(&cpu, 0x01FD), 0x02);
}

#[test]
fn test_cop_emulation_uses_cop_vector_without_b() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x008000, &[0x02, 0x55]);
    cpu.memory_mut().load(0x00FFF4, &[0x00, 0xB0]);
    cpu.set_status(0x00);

    assert_eq!(cpu.step(), 7);

    assert_eq!(cpu.pc(), 0xB000);
    assert_eq!(byte_at(&cpu, 0x01FD) & 0x10, 0x00);
}

#[test]
fn test_brk_rti_native_round_trip() {
    let mut cpu = setup_cpu();
    cpu.set_emulation(false);
    cpu.set_status(0x01); // C set, 16-bit registers
    cpu.set_pbr(0x04);
    cpu.memory_mut().load(0x048000, &[0x00, 0x00, 0xEA]);
    cpu.memory_mut().load(0x00FFE6, &[0x00, 0xA0]);
    cpu.memory_mut().load(0x00A000, &[0x40]);

    cpu.step();
    assert_eq!(cpu.step(), 7);

    assert_eq!((cpu.pbr(), cpu.pc()), (0x04, 0x8002));
    assert_eq!(cpu.status(), 0x01);
    assert_eq!(cpu.sp(), 0x01FF);
}

#[test]
fn test_rti_emulation_pulls_three_bytes() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x008000, &[0x40]);
    cpu.memory_mut().load(0x0001FD, &[0xC3, 0x34, 0x12]);
    cpu.set_sp(0x01FC);

    assert_eq!(cpu.step(), 6);

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.pbr(), 0x00);
    assert_eq!(cpu.sp(), 0x01FF);
    assert!(cpu.flags().sign);
    assert!(cpu.flags().overflow);
    assert!(cpu.flags().carry);
    assert!(cpu.flags().zero);
}

#[test]
fn test_rti_after_brk_leaves_break_clear() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x008000, &[0x00, 0x00, 0xEA]);
    cpu.memory_mut().load(0x00FFFE, &[0x00, 0x90]);
    cpu.memory_mut().load(0x009000, &[0x40]);
    cpu.set_status(0x00);

    cpu.step();
    assert_eq!(byte_at(&cpu, 0x01FD), 0x30); // B set in the pushed copy

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.status(), 0x20);
    assert!(!cpu.flags().break_flag);
}

// ========== NOP / WDM / WAI / STP Tests ==========

#[test]
fn test_nop_and_wdm() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x008000, &[0xEA, 0x42, 0xFF, 0xEA]);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.pc(), 0x8001);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_wai_waits_for_irq_even_when_masked() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x008000, &[0xCB, 0xEA]);

    assert_eq!(cpu.step(), 3);
    assert!(cpu.is_waiting());
    assert_eq!(cpu.step(), 0);
    assert_eq!(cpu.pc(), 0x8001);

    // I is set: the IRQ wakes the core but is not taken
    cpu.set_irq_pin(true);
    assert_eq!(cpu.step(), 2);
    assert!(!cpu.is_waiting());
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_stp_halts_until_reset() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x008000, &[0xDB, 0xEA]);

    assert_eq!(cpu.step(), 3);
    assert!(cpu.is_stopped());
    assert_eq!(cpu.step(), 0);
    assert_eq!(cpu.run_for_cycles(100), 0);

    cpu.set_nmi_pin(true);
    assert_eq!(cpu.step(), 0);

    cpu.set_reset_pin(true);
    cpu.set_reset_pin(false);
    assert!(!cpu.is_stopped());
    assert_eq!(cpu.pc(), 0x8000);
}
