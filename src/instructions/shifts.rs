//! # Shift and Rotate Instructions
//!
//! - ASL: Arithmetic shift left
//! - LSR: Logical shift right
//! - ROL: Rotate left through carry
//! - ROR: Rotate right through carry
//!
//! Each works on the accumulator or on memory, 8 or 16 bits wide per the M
//! flag. The bit shifted out lands in C; N and Z follow the result.

use super::{modify_cycles, modify_operand, sign_bit, width_mask};
use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// Executes the ASL (Arithmetic Shift Left) instruction.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    shift(cpu, opcode, |value, _carry, is_8bit| {
        let carry_out = value & sign_bit(is_8bit) != 0;
        (value << 1, carry_out)
    });
}

/// Executes the LSR (Logical Shift Right) instruction.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    shift(cpu, opcode, |value, _carry, _is_8bit| (value >> 1, value & 0x0001 != 0));
}

/// Executes the ROL (Rotate Left) instruction.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    shift(cpu, opcode, |value, carry, is_8bit| {
        let carry_out = value & sign_bit(is_8bit) != 0;
        ((value << 1) | carry as u16, carry_out)
    });
}

/// Executes the ROR (Rotate Right) instruction.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    shift(cpu, opcode, |value, carry, is_8bit| {
        let carry_in = if carry { sign_bit(is_8bit) } else { 0 };
        ((value >> 1) | carry_in, value & 0x0001 != 0)
    });
}

fn shift<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8, operation: fn(u16, bool, bool) -> (u16, bool)) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let is_8bit = cpu.flags.accumulator_is_8bit();
    let cycles = modify_cycles(cpu, metadata, is_8bit);

    modify_operand(cpu, metadata.addressing_mode, is_8bit, |cpu, value| {
        let (result, carry) = operation(value, cpu.flags.carry, is_8bit);
        let result = result & width_mask(is_8bit);
        cpu.flags.carry = carry;
        cpu.flags.update_sign_and_zero(result, is_8bit);
        result
    });

    cpu.cycles += cycles;
    cpu.finish_instruction(metadata);
}
