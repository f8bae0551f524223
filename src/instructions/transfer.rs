//! # Register Transfer Instructions
//!
//! This module implements register-to-register transfers:
//! - TAX, TAY, TXA, TYA, TXY, TYX: Accumulator and index registers
//! - TSX, TXS: Stack pointer and X
//! - TCD, TDC: Accumulator (C) and direct page
//! - TCS, TSC: Accumulator (C) and stack pointer
//! - XBA: Exchange the two accumulator bytes
//!
//! The destination's width decides how many bits move. Every transfer updates
//! N and Z except TXS and TCS.

use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// Executes the TAX (Transfer Accumulator to X) instruction.
///
/// With 16-bit index registers all of C is copied, whatever the M flag says.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let value = cpu.a;
    cpu.x = transfer_to_index(cpu, opcode, value);
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let value = cpu.a;
    cpu.y = transfer_to_index(cpu, opcode, value);
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
///
/// With an 8-bit accumulator only A changes; B is preserved.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let value = cpu.x;
    transfer_to_accumulator(cpu, opcode, value);
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let value = cpu.y;
    transfer_to_accumulator(cpu, opcode, value);
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let value = cpu.stack.pointer();
    cpu.x = transfer_to_index(cpu, opcode, value);
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// No flags are affected. In emulation mode the pointer stays in page 1.
///
/// # Examples
///
/// ```
/// use lib65816::{CPU, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x00FFFC, &[0x00, 0x80]);
/// memory.load(0x008000, &[0x9A]); // TXS
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_x(0x80);
/// cpu.step();
///
/// assert_eq!(cpu.sp(), 0x0180);
/// ```
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let value = cpu.x;
    cpu.stack.relocate(value);
    finish(cpu, opcode);
}

/// Executes the TXY (Transfer X to Y) instruction.
pub(crate) fn execute_txy<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let value = cpu.x;
    cpu.y = transfer_to_index(cpu, opcode, value);
}

/// Executes the TYX (Transfer Y to X) instruction.
pub(crate) fn execute_tyx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let value = cpu.y;
    cpu.x = transfer_to_index(cpu, opcode, value);
}

/// Executes the TCD (Transfer C to Direct Page) instruction.
///
/// Always moves 16 bits; N and Z come from bit 15 and the full value.
pub(crate) fn execute_tcd<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.d = cpu.a;
    cpu.flags.update_sign_and_zero_from_16bit(cpu.d);
    finish(cpu, opcode);
}

/// Executes the TDC (Transfer Direct Page to C) instruction.
pub(crate) fn execute_tdc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.a = cpu.d;
    cpu.flags.update_sign_and_zero_from_16bit(cpu.a);
    finish(cpu, opcode);
}

/// Executes the TCS (Transfer C to Stack Pointer) instruction. No flags are affected.
pub(crate) fn execute_tcs<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let value = cpu.a;
    cpu.stack.relocate(value);
    finish(cpu, opcode);
}

/// Executes the TSC (Transfer Stack Pointer to C) instruction.
pub(crate) fn execute_tsc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.a = cpu.stack.pointer();
    cpu.flags.update_sign_and_zero_from_16bit(cpu.a);
    finish(cpu, opcode);
}

/// Executes the XBA (Exchange B and A) instruction.
///
/// N and Z are set from the new low byte, regardless of the M flag.
pub(crate) fn execute_xba<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.a = cpu.a.rotate_left(8);
    cpu.flags.update_sign_and_zero_from_8bit(cpu.a as u8);
    finish(cpu, opcode);
}

fn transfer_to_index<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8, value: u16) -> u16 {
    let is_8bit = cpu.flags.index_is_8bit();
    let value = cpu.index_value(value);

    cpu.flags.update_sign_and_zero(value, is_8bit);
    finish(cpu, opcode);
    value
}

fn transfer_to_accumulator<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8, value: u16) {
    let is_8bit = cpu.flags.accumulator_is_8bit();

    cpu.store_accumulator(value);
    let result = cpu.accumulator();
    cpu.flags.update_sign_and_zero(result, is_8bit);
    finish(cpu, opcode);
}

fn finish<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.cycles += metadata.base_cycles as u64;
    cpu.advance_pc(metadata.size_bytes as u16);
}
