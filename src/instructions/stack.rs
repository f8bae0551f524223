//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA, PLA: Accumulator, width from the M flag
//! - PHX, PHY, PLX, PLY: Index registers, width from the X flag
//! - PHP, PLP: Processor status
//! - PHB, PLB: Data bank register
//! - PHD, PLD: Direct page register (always 16-bit)
//! - PHK: Program bank register
//! - PEA, PEI, PER: Push effective absolute / indirect / PC-relative address
//!
//! The stack lives in bank 0 and grows downward. In emulation mode it is
//! confined to page 1. Words are pushed high byte first so they sit in
//! memory in little-endian order.

use crate::status::bits;
use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// Executes the PHA (Push Accumulator) instruction.
///
/// # Examples
///
/// ```
/// use lib65816::{CPU, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x00FFFC, &[0x00, 0x80]);
/// memory.load(0x008000, &[0x48]); // PHA
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_a(0x1242);
/// cpu.step();
///
/// // Only A is pushed in 8-bit mode
/// assert_eq!(cpu.memory().as_slice()[0x01FF], 0x42);
/// assert_eq!(cpu.sp(), 0x01FE);
/// assert_eq!(cpu.cycles(), 3);
/// ```
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let is_8bit = cpu.flags.accumulator_is_8bit();
    let value = cpu.a;
    push_register(cpu, opcode, value, is_8bit);
}

/// Executes the PHX (Push X Register) instruction.
pub(crate) fn execute_phx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let is_8bit = cpu.flags.index_is_8bit();
    let value = cpu.x;
    push_register(cpu, opcode, value, is_8bit);
}

/// Executes the PHY (Push Y Register) instruction.
pub(crate) fn execute_phy<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let is_8bit = cpu.flags.index_is_8bit();
    let value = cpu.y;
    push_register(cpu, opcode, value, is_8bit);
}

/// Executes the PLA (Pull Accumulator) instruction. Updates N and Z.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let is_8bit = cpu.flags.accumulator_is_8bit();
    let value = pull_register(cpu, opcode, is_8bit);
    cpu.store_accumulator(value);
}

/// Executes the PLX (Pull X Register) instruction. Updates N and Z.
pub(crate) fn execute_plx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let is_8bit = cpu.flags.index_is_8bit();
    cpu.x = pull_register(cpu, opcode, is_8bit);
}

/// Executes the PLY (Pull Y Register) instruction. Updates N and Z.
pub(crate) fn execute_ply<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let is_8bit = cpu.flags.index_is_8bit();
    cpu.y = pull_register(cpu, opcode, is_8bit);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// In emulation mode bits 4 (B) and 5 are pushed set.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let mut status = cpu.flags.register_value();
    if cpu.flags.emulation {
        status |= bits::X | bits::M;
    }
    cpu.stack.push_byte(&mut cpu.memory, status);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.finish_instruction(metadata);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Width flags take effect immediately; an 8-bit index width clears the high
/// bytes of X and Y. In emulation mode bits 4 and 5 do not change the widths.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let status = cpu.stack.pull_byte(&mut cpu.memory);
    cpu.flags.pull_register_value(status);
    cpu.normalize_index_registers();

    cpu.cycles += metadata.base_cycles as u64;
    cpu.finish_instruction(metadata);
}

/// Executes the PHB (Push Data Bank) instruction.
pub(crate) fn execute_phb<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let value = cpu.dbr as u16;
    push_register(cpu, opcode, value, true);
}

/// Executes the PLB (Pull Data Bank) instruction. Updates N and Z.
pub(crate) fn execute_plb<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.dbr = pull_register(cpu, opcode, true) as u8;
}

/// Executes the PHD (Push Direct Page) instruction.
pub(crate) fn execute_phd<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.stack.push_word(&mut cpu.memory, cpu.d);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.finish_instruction(metadata);
}

/// Executes the PLD (Pull Direct Page) instruction. Updates N and Z from all 16 bits.
pub(crate) fn execute_pld<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.stack.pull_word(&mut cpu.memory);
    cpu.d = value;
    cpu.flags.update_sign_and_zero_from_16bit(value);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.finish_instruction(metadata);
}

/// Executes the PHK (Push Program Bank) instruction.
pub(crate) fn execute_phk<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let value = cpu.pbr as u16;
    push_register(cpu, opcode, value, true);
}

/// Executes the PEA (Push Effective Absolute Address) instruction.
///
/// Pushes the 16-bit operand itself.
pub(crate) fn execute_pea<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.operand_word();
    cpu.stack.push_word(&mut cpu.memory, value);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.finish_instruction(metadata);
}

/// Executes the PEI (Push Effective Indirect Address) instruction.
///
/// Pushes the 16-bit word stored at the direct page location named by the operand.
pub(crate) fn execute_pei<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let mode = metadata.addressing_mode;

    let cycles = metadata.base_cycles as u64 + cpu.direct_page_penalty(mode);
    let pointer = cpu.effective_address(mode);
    let value = cpu.read_bank0_word(pointer.offset);
    cpu.stack.push_word(&mut cpu.memory, value);

    cpu.cycles += cycles;
    cpu.finish_instruction(metadata);
}

/// Executes the PER (Push Effective PC-Relative Address) instruction.
///
/// Pushes the address of the next instruction plus the signed 16-bit operand.
pub(crate) fn execute_per<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let displacement = cpu.operand_word();
    let value = cpu
        .pc
        .wrapping_add(metadata.size_bytes as u16)
        .wrapping_add(displacement);
    cpu.stack.push_word(&mut cpu.memory, value);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.finish_instruction(metadata);
}

fn push_register<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8, value: u16, is_8bit: bool) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.stack.push(&mut cpu.memory, value, is_8bit);

    cpu.cycles += metadata.base_cycles as u64 + cpu.width_penalty(is_8bit);
    cpu.finish_instruction(metadata);
}

fn pull_register<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8, is_8bit: bool) -> u16 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.stack.pull(&mut cpu.memory, is_8bit);
    cpu.flags.update_sign_and_zero(value, is_8bit);

    cpu.cycles += metadata.base_cycles as u64 + cpu.width_penalty(is_8bit);
    cpu.finish_instruction(metadata);
    value
}
