//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary CPU states and memory contents,
//! then executes a few instructions to find edge cases and crashes.

#![no_main]

use arbitrary::Arbitrary;
use lib65816::{FlatMemory, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u16,
    x: u16,
    y: u16,
    d: u16,
    sp: u16,
    dbr: u8,
    pbr: u8,
    status: u8,
    /// Leave emulation mode before loading the other registers
    native: bool,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 8],
    /// Direct page contents at $00:0000
    direct_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Data at offset $4000 in the data bank
    main_memory: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    /// Number of instructions to run (1-4)
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    // Emulation reset vector -> $8000, handlers for every other vector at $9000
    memory.load(0x00FFFC, &[0x00, 0x80]);
    for vector in [0xFFE4u32, 0xFFE6, 0xFFE8, 0xFFEA, 0xFFEE, 0xFFF4, 0xFFF8, 0xFFFA, 0xFFFE] {
        memory.load(vector, &[0x00, 0x90]);
    }

    let state = &input.cpu_state;
    let code_start = ((state.pbr as u32) << 16) | 0x8000;
    memory.load(code_start, &input.memory.instruction_bytes);
    memory.load(0x000000, &input.memory.direct_page);
    memory.load(0x000100, &input.memory.stack_page);
    memory.load(((state.dbr as u32) << 16) | 0x4000, &input.memory.main_memory);

    let mut cpu = CPU::new(memory);
    if state.native {
        cpu.set_emulation(false);
    }
    cpu.set_status(state.status);
    cpu.set_a(state.a);
    cpu.set_x(state.x);
    cpu.set_y(state.y);
    cpu.set_d(state.d);
    cpu.set_sp(state.sp);
    cpu.set_dbr(state.dbr);
    cpu.set_pbr(state.pbr);

    let steps = (input.steps % 4) + 1;
    let mut total = 0u64;
    for _ in 0..steps {
        total += cpu.step();
    }

    assert_eq!(cpu.cycles(), total);

    // Emulation mode invariants
    if cpu.emulation() {
        assert_eq!(cpu.sp() & 0xFF00, 0x0100);
        assert!(cpu.x() <= 0xFF);
        assert!(cpu.y() <= 0xFF);
        assert!(cpu.flags().accumulator_is_8bit());
        assert!(cpu.flags().index_is_8bit());
    } else if cpu.flags().index_is_8bit() {
        assert!(cpu.x() <= 0xFF);
        assert!(cpu.y() <= 0xFF);
    }
});
