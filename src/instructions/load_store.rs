//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//! - STZ: Store Zero
//!
//! LDA, STA and STZ move 8 or 16 bits per the M flag; the X and Y forms per
//! the X flag. An 8-bit LDA leaves B alone.

use super::{read_cycles, write_cycles};
use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if the loaded value is 0
/// - Negative (N): Set if the top bit of the loaded value is set
/// - Other flags: Not affected
///
/// # Examples
///
/// ```
/// use lib65816::{CPU, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x00FFFC, &[0x00, 0x80]);
/// memory.load(0x008000, &[0x18, 0xFB, 0xC2, 0x20, 0xA9, 0x34, 0x12]); // CLC, XCE, REP #$20, LDA #$1234
///
/// let mut cpu = CPU::new(memory);
/// cpu.run_for_cycles(7);
/// cpu.step();
///
/// assert_eq!(cpu.a(), 0x1234);
/// assert_eq!(cpu.pc(), 0x8007);
/// ```
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let is_8bit = cpu.flags.accumulator_is_8bit();

    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode, is_8bit);
    let cycles = read_cycles(cpu, metadata, is_8bit, page_crossed);

    cpu.flags.update_sign_and_zero(value, is_8bit);
    cpu.store_accumulator(value);

    cpu.cycles += cycles;
    cpu.finish_instruction(metadata);
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.x = load_index(cpu, opcode);
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.y = load_index(cpu, opcode);
}

fn load_index<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u16 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let is_8bit = cpu.flags.index_is_8bit();

    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode, is_8bit);
    let cycles = read_cycles(cpu, metadata, is_8bit, page_crossed);

    cpu.flags.update_sign_and_zero(value, is_8bit);

    cpu.cycles += cycles;
    cpu.finish_instruction(metadata);
    value
}

/// Executes the STA (Store Accumulator) instruction. No flags are affected.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let is_8bit = cpu.flags.accumulator_is_8bit();
    let value = cpu.a;
    store(cpu, opcode, value, is_8bit);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let is_8bit = cpu.flags.index_is_8bit();
    let value = cpu.x;
    store(cpu, opcode, value, is_8bit);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let is_8bit = cpu.flags.index_is_8bit();
    let value = cpu.y;
    store(cpu, opcode, value, is_8bit);
}

/// Executes the STZ (Store Zero) instruction.
pub(crate) fn execute_stz<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let is_8bit = cpu.flags.accumulator_is_8bit();
    store(cpu, opcode, 0x0000, is_8bit);
}

fn store<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8, value: u16, is_8bit: bool) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let mode = metadata.addressing_mode;

    let cycles = write_cycles(cpu, metadata, is_8bit);
    let address = cpu.effective_address(mode);
    cpu.write_data(address, mode, value, is_8bit);

    cpu.cycles += cycles;
    cpu.finish_instruction(metadata);
}
