//! # Increment and Decrement Instructions
//!
//! - INC, DEC: Memory or accumulator, width from the M flag
//! - INX, INY, DEX, DEY: Index registers, width from the X flag
//!
//! All of them update N and Z and wrap silently; C and V are untouched.

use super::{modify_cycles, modify_operand, width_mask};
use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// Executes the INC (Increment) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    step_operand(cpu, opcode, 1);
}

/// Executes the DEC (Decrement) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    step_operand(cpu, opcode, -1);
}

/// Executes the INX (Increment X) instruction.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let x = cpu.x;
    cpu.x = step_index(cpu, opcode, x, 1);
}

/// Executes the INY (Increment Y) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let y = cpu.y;
    cpu.y = step_index(cpu, opcode, y, 1);
}

/// Executes the DEX (Decrement X) instruction.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let x = cpu.x;
    cpu.x = step_index(cpu, opcode, x, -1);
}

/// Executes the DEY (Decrement Y) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let y = cpu.y;
    cpu.y = step_index(cpu, opcode, y, -1);
}

fn step_operand<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8, delta: i16) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let is_8bit = cpu.flags.accumulator_is_8bit();
    let cycles = modify_cycles(cpu, metadata, is_8bit);

    modify_operand(cpu, metadata.addressing_mode, is_8bit, |cpu, value| {
        let result = value.wrapping_add_signed(delta) & width_mask(is_8bit);
        cpu.flags.update_sign_and_zero(result, is_8bit);
        result
    });

    cpu.cycles += cycles;
    cpu.finish_instruction(metadata);
}

fn step_index<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8, register: u16, delta: i16) -> u16 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let is_8bit = cpu.flags.index_is_8bit();

    let result = register.wrapping_add_signed(delta) & width_mask(is_8bit);
    cpu.flags.update_sign_and_zero(result, is_8bit);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.finish_instruction(metadata);
    result
}
