//! Memory bus tests
//!
//! Verifies that the CPU runs the same way on both `MemoryBus` implementations
//! and that `SystemBus` honors ROM, RAM and open-bus semantics end to end.

use lib65816::{Address, FlatMemory, MemoryBus, RamDevice, RomDevice, SystemBus, CPU};

/// Builds a 32KB ROM image for $00:8000-$00:FFFF with `program` at $8000
/// and the emulation reset vector pointing at it.
fn rom_image(program: &[u8]) -> Vec<u8> {
    let mut rom = vec![0u8; 0x8000];
    rom[..program.len()].copy_from_slice(program);
    rom[0x7FFC] = 0x00;
    rom[0x7FFD] = 0x80;
    rom
}

fn setup_bus(program: &[u8]) -> SystemBus {
    let mut bus = SystemBus::new();
    bus.register_device(Box::new(RamDevice::flat(0x00_0000, 0x8000)));
    bus.register_device(Box::new(RomDevice::new(0x00_8000, rom_image(program))));
    bus
}

/// Writes a little pattern through the trait only
fn fill_pattern<M: MemoryBus>(memory: &mut M, start: Address) {
    memory.store_word(start, 0x1234);
    memory.store_long(start.with_offset_no_wrap(2), 0xDEAD_BEEF);
}

// ========== Trait Tests ==========

#[test]
fn test_flat_memory_initialization() {
    let memory = FlatMemory::new();

    for address in [0x00_0000, 0x00_1234, 0x7E_8000, 0xFF_FFFF] {
        assert_eq!(
            memory.peek_byte(Address::from_integer(address)),
            0x00,
            "Memory at ${:06X} should be initialized to 0",
            address
        );
    }
}

#[test]
fn test_trait_helpers_agree_across_implementations() {
    let start = Address::new(0x00, 0x1000);

    let mut flat = FlatMemory::new();
    fill_pattern(&mut flat, start);

    let mut bus = SystemBus::new();
    bus.register_device(Box::new(RamDevice::new(0x00_0000, 0x8000)));
    fill_pattern(&mut bus, start);

    for i in 0..6 {
        let at = start.with_offset_no_wrap(i);
        assert_eq!(flat.read_byte(at), bus.read_byte(at), "byte {}", i);
    }
    assert_eq!(flat.read_word(start), 0x1234);
    assert_eq!(bus.read_long(start.with_offset_no_wrap(2)), 0xDEAD_BEEF);
}

#[test]
fn test_pointer_read_spans_bank_boundary() {
    let mut memory = FlatMemory::new();
    memory.load(0x12_FFFF, &[0x00, 0x80, 0x7E]);

    let pointer = memory.read_address_at(Address::new(0x12, 0xFFFF));
    assert_eq!(pointer, Address::new(0x7E, 0x8000));
}

// ========== CPU On SystemBus Tests ==========

#[test]
fn test_cpu_boots_from_rom_vector() {
    let cpu = CPU::new(setup_bus(&[0xEA]));

    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.pbr(), 0x00);
}

#[test]
fn test_program_writes_ram_and_ignores_rom() {
    let mut program = vec![
        0xA9, 0x42, // LDA #$42
        0x8D, 0x00, 0x20, // STA $2000
        0x8D, 0x10, 0x80, // STA $8010 (ROM)
        0xAF, 0x00, 0x00, 0x05, // LDA $050000 (open bus)
    ];
    program.resize(0x11, 0x00);
    program[0x10] = 0x77;

    let mut cpu = CPU::new(setup_bus(&program));

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.step(), 4);

    assert_eq!(cpu.memory().peek_byte(Address::new(0x00, 0x2000)), 0x42);
    assert_eq!(cpu.memory().peek_byte(Address::new(0x00, 0x8010)), 0x77);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flags().zero);
    assert_eq!(cpu.pc(), 0x800C);
}

#[test]
fn test_stack_lives_in_flat_ram() {
    let program = [
        0xA9, 0x5A, // LDA #$5A
        0x48, // PHA
        0x68, // PLA
    ];
    let mut cpu = CPU::new(setup_bus(&program));

    cpu.step();
    cpu.step();
    assert_eq!(cpu.memory().peek_byte(Address::new(0x00, 0x01FF)), 0x5A);
    assert_eq!(cpu.sp(), 0x01FE);

    cpu.set_a(0x00);
    cpu.step();
    assert_eq!(cpu.a() & 0xFF, 0x5A);
    assert_eq!(cpu.sp(), 0x01FF);
}

#[test]
fn test_run_for_cycles_on_system_bus() {
    let cpu_program = [0xEA; 32];
    let mut cpu = CPU::new(setup_bus(&cpu_program));

    assert_eq!(cpu.run_for_cycles(20), 20);
    assert_eq!(cpu.pc(), 0x800A);
    assert_eq!(cpu.cycles(), 20);
}
