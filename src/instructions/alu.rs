//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic on the accumulator
//! - CMP, CPX, CPY: Compare a register with memory
//! - BIT: Test bits
//! - TSB, TRB: Test and set/reset bits in memory
//!
//! Accumulator operations are 8 or 16 bits wide according to the M flag, CPX
//! and CPY according to the X flag. In 8-bit mode only the low byte of C takes
//! part and B is preserved.
//!
//! ## Decimal mode
//!
//! With D set, ADC and SBC treat each byte as two BCD digits and chain the
//! carry from the low byte into the high byte in 16-bit mode. V is computed
//! from the binary sum of the operands, as on hardware.

use super::{modify_cycles, modify_operand, read_cycles, sign_bit, width_mask};
use crate::{AddressingMode, MemoryBus, StatusFlags, CPU, OPCODE_TABLE};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator.
///
/// # Flag Behavior
///
/// - Carry (C): Set on unsigned overflow (binary) or decimal carry (BCD)
/// - Overflow (V): Set on signed overflow
/// - Zero (Z), Negative (N): From the result
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let is_8bit = cpu.flags.accumulator_is_8bit();

    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode, is_8bit);
    let cycles = read_cycles(cpu, metadata, is_8bit, page_crossed);

    let accumulator = cpu.accumulator();
    let result = add_with_carry(&mut cpu.flags, accumulator, value, is_8bit);
    cpu.store_accumulator(result);

    cpu.cycles += cycles;
    cpu.finish_instruction(metadata);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Subtracts the operand and the inverted carry (the borrow) from the
/// accumulator. Carry is set afterwards when no borrow occurred.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let is_8bit = cpu.flags.accumulator_is_8bit();

    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode, is_8bit);
    let cycles = read_cycles(cpu, metadata, is_8bit, page_crossed);

    let accumulator = cpu.accumulator();
    let result = subtract_with_borrow(&mut cpu.flags, accumulator, value, is_8bit);
    cpu.store_accumulator(result);

    cpu.cycles += cycles;
    cpu.finish_instruction(metadata);
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    execute_logic(cpu, opcode, |a, m| a & m);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    execute_logic(cpu, opcode, |a, m| a | m);
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    execute_logic(cpu, opcode, |a, m| a ^ m);
}

fn execute_logic<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8, operation: fn(u16, u16) -> u16) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let is_8bit = cpu.flags.accumulator_is_8bit();

    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode, is_8bit);
    let cycles = read_cycles(cpu, metadata, is_8bit, page_crossed);

    let result = operation(cpu.accumulator(), value) & width_mask(is_8bit);
    cpu.flags.update_sign_and_zero(result, is_8bit);
    cpu.store_accumulator(result);

    cpu.cycles += cycles;
    cpu.finish_instruction(metadata);
}

/// Executes the CMP (Compare Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Carry (C): Set if A >= M (unsigned)
/// - Zero (Z): Set if A == M
/// - Negative (N): Top bit of A - M
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let is_8bit = cpu.flags.accumulator_is_8bit();
    let register = cpu.accumulator();
    execute_compare(cpu, opcode, register, is_8bit);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let is_8bit = cpu.flags.index_is_8bit();
    let register = cpu.x;
    execute_compare(cpu, opcode, register, is_8bit);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let is_8bit = cpu.flags.index_is_8bit();
    let register = cpu.y;
    execute_compare(cpu, opcode, register, is_8bit);
}

fn execute_compare<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8, register: u16, is_8bit: bool) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode, is_8bit);
    let cycles = read_cycles(cpu, metadata, is_8bit, page_crossed);

    let register = register & width_mask(is_8bit);
    let difference = register.wrapping_sub(value) & width_mask(is_8bit);
    cpu.flags.carry = register >= value;
    cpu.flags.update_sign_and_zero(difference, is_8bit);

    cpu.cycles += cycles;
    cpu.finish_instruction(metadata);
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z is set from `A & M`. For memory operands N and V are copied from the two
/// top bits of the operand; the immediate form only affects Z.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let is_8bit = cpu.flags.accumulator_is_8bit();

    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode, is_8bit);
    let cycles = read_cycles(cpu, metadata, is_8bit, page_crossed);

    cpu.flags.zero = cpu.accumulator() & value == 0;
    if metadata.addressing_mode != AddressingMode::Immediate {
        let sign = sign_bit(is_8bit);
        cpu.flags.sign = value & sign != 0;
        cpu.flags.overflow = value & (sign >> 1) != 0;
    }

    cpu.cycles += cycles;
    cpu.finish_instruction(metadata);
}

/// Executes the TSB (Test and Set Bits) instruction.
///
/// Z is set from `A & M`, then the accumulator bits are set in memory.
pub(crate) fn execute_tsb<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    execute_test_bits(cpu, opcode, |a, m| m | a);
}

/// Executes the TRB (Test and Reset Bits) instruction.
///
/// Z is set from `A & M`, then the accumulator bits are cleared in memory.
pub(crate) fn execute_trb<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    execute_test_bits(cpu, opcode, |a, m| m & !a);
}

fn execute_test_bits<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8, operation: fn(u16, u16) -> u16) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let is_8bit = cpu.flags.accumulator_is_8bit();
    let cycles = modify_cycles(cpu, metadata, is_8bit);

    modify_operand(cpu, metadata.addressing_mode, is_8bit, |cpu, value| {
        let accumulator = cpu.accumulator();
        cpu.flags.zero = accumulator & value == 0;
        operation(accumulator, value) & width_mask(is_8bit)
    });

    cpu.cycles += cycles;
    cpu.finish_instruction(metadata);
}

/// Adds `value` and the carry flag to `accumulator` at the given width,
/// updating C, V, Z and N. Honors the decimal flag.
pub(crate) fn add_with_carry(
    flags: &mut StatusFlags,
    accumulator: u16,
    value: u16,
    is_8bit: bool,
) -> u16 {
    let carry_in = flags.carry as u32;
    flags.overflow = signed_overflow(accumulator, value, carry_in, is_8bit);

    let (result, carry) = if flags.decimal {
        decimal_add(accumulator, value, flags.carry, is_8bit)
    } else {
        let sum = accumulator as u32 + value as u32 + carry_in;
        let limit = width_mask(is_8bit) as u32;
        ((sum & limit) as u16, sum > limit)
    };

    flags.carry = carry;
    flags.update_sign_and_zero(result, is_8bit);
    result
}

/// Subtracts `value` and the borrow (inverted carry) from `accumulator`,
/// updating C, V, Z and N. Honors the decimal flag.
pub(crate) fn subtract_with_borrow(
    flags: &mut StatusFlags,
    accumulator: u16,
    value: u16,
    is_8bit: bool,
) -> u16 {
    if !flags.decimal {
        let inverted = !value & width_mask(is_8bit);
        return add_with_carry(flags, accumulator, inverted, is_8bit);
    }

    let carry_in = flags.carry as u32;
    flags.overflow = signed_overflow(
        accumulator,
        !value & width_mask(is_8bit),
        carry_in,
        is_8bit,
    );

    let (result, carry) = decimal_subtract(accumulator, value, flags.carry, is_8bit);
    flags.carry = carry;
    flags.update_sign_and_zero(result, is_8bit);
    result
}

/// Signed overflow of `a + b + carry`: the carry into the sign bit differs
/// from the carry out of it.
fn signed_overflow(a: u16, b: u16, carry_in: u32, is_8bit: bool) -> bool {
    let (low_mask, shift) = if is_8bit { (0x7F, 7) } else { (0x7FFF, 15) };
    let a = a as u32 & width_mask(is_8bit) as u32;
    let b = b as u32 & width_mask(is_8bit) as u32;

    let into_sign = ((a & low_mask) + (b & low_mask) + carry_in) >> shift;
    let out_of_sign = (a + b + carry_in) >> (shift + 1);
    (into_sign ^ out_of_sign) & 1 != 0
}

fn decimal_add(a: u16, b: u16, carry: bool, is_8bit: bool) -> (u16, bool) {
    let (low, carry) = bcd_add_byte(a as u8, b as u8, carry);
    if is_8bit {
        return (low as u16, carry);
    }
    let (high, carry) = bcd_add_byte((a >> 8) as u8, (b >> 8) as u8, carry);
    (((high as u16) << 8) | low as u16, carry)
}

fn decimal_subtract(a: u16, b: u16, carry: bool, is_8bit: bool) -> (u16, bool) {
    let (low, borrow) = bcd_subtract_byte(a as u8, b as u8, !carry);
    if is_8bit {
        return (low as u16, !borrow);
    }
    let (high, borrow) = bcd_subtract_byte((a >> 8) as u8, (b >> 8) as u8, borrow);
    (((high as u16) << 8) | low as u16, !borrow)
}

/// Adds two packed BCD bytes. Returns the BCD sum and the decimal carry.
fn bcd_add_byte(a: u8, b: u8, carry: bool) -> (u8, bool) {
    let mut low = (a & 0x0F) as u16 + (b & 0x0F) as u16 + carry as u16;
    if low > 0x09 {
        low += 0x06;
    }
    let low_carry = (low > 0x0F) as u16;

    let mut high = (a >> 4) as u16 + (b >> 4) as u16 + low_carry;
    if high > 0x09 {
        high += 0x06;
    }
    let carry_out = high > 0x0F;

    ((((high & 0x0F) << 4) | (low & 0x0F)) as u8, carry_out)
}

/// Subtracts two packed BCD bytes. Returns the BCD difference and the borrow.
fn bcd_subtract_byte(a: u8, b: u8, borrow: bool) -> (u8, bool) {
    let mut low = (a & 0x0F) as i16 - (b & 0x0F) as i16 - borrow as i16;
    let low_borrow = low < 0;
    if low_borrow {
        low += 10;
    }

    let mut high = (a >> 4) as i16 - (b >> 4) as i16 - low_borrow as i16;
    let borrow_out = high < 0;
    if borrow_out {
        high += 10;
    }

    ((((high & 0x0F) << 4) | (low & 0x0F)) as u8, borrow_out)
}
