//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC, SEC: Clear/set carry
//! - CLI, SEI: Clear/set interrupt disable
//! - CLD, SED: Clear/set decimal mode
//! - CLV: Clear overflow
//! - REP, SEP: Reset/set the flags selected by an immediate mask
//! - XCE: Exchange carry and emulation flags
//!
//! In emulation mode REP and SEP cannot reach bits 4 and 5; the registers stay
//! 8-bit. Whenever the index registers become 8-bit, X and Y lose their high bytes.

use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// Executes the CLC (Clear Carry Flag) instruction.
///
/// # Examples
///
/// ```
/// use lib65816::{CPU, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x00FFFC, &[0x00, 0x80]);
/// memory.load(0x008000, &[0x38, 0x18]); // SEC, CLC
///
/// let mut cpu = CPU::new(memory);
/// cpu.step();
/// assert!(cpu.flags().carry);
///
/// cpu.step();
/// assert!(!cpu.flags().carry);
/// assert_eq!(cpu.pc(), 0x8002);
/// assert_eq!(cpu.cycles(), 4);
/// ```
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flags.carry = false;
    finish(cpu, opcode);
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flags.carry = true;
    finish(cpu, opcode);
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flags.irq_disable = false;
    finish(cpu, opcode);
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flags.irq_disable = true;
    finish(cpu, opcode);
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flags.decimal = false;
    finish(cpu, opcode);
}

/// Executes the SED (Set Decimal Mode) instruction.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flags.decimal = true;
    finish(cpu, opcode);
}

/// Executes the CLV (Clear Overflow Flag) instruction.
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flags.overflow = false;
    finish(cpu, opcode);
}

/// Executes the REP (Reset Status Bits) instruction.
///
/// Clears every flag whose bit is set in the immediate operand.
pub(crate) fn execute_rep<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let mask = cpu.operand_byte();
    cpu.flags.reset_bits(mask);
    cpu.normalize_index_registers();
    finish(cpu, opcode);
}

/// Executes the SEP (Set Status Bits) instruction.
///
/// Sets every flag whose bit is set in the immediate operand. Setting X
/// clears the high bytes of the index registers.
pub(crate) fn execute_sep<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let mask = cpu.operand_byte();
    cpu.flags.set_bits(mask);
    cpu.normalize_index_registers();
    finish(cpu, opcode);
}

/// Executes the XCE (Exchange Carry and Emulation) instruction.
///
/// The only way to switch processor modes. Entering emulation mode forces
/// 8-bit registers and moves the stack to page 1.
///
/// # Examples
///
/// ```
/// use lib65816::{CPU, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x00FFFC, &[0x00, 0x80]);
/// memory.load(0x008000, &[0x18, 0xFB]); // CLC, XCE
///
/// let mut cpu = CPU::new(memory);
/// cpu.step();
/// cpu.step();
///
/// assert!(!cpu.emulation());
/// assert!(cpu.flags().carry); // old E
/// ```
pub(crate) fn execute_xce<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let carry = cpu.flags.carry;
    cpu.flags.carry = cpu.flags.emulation;
    cpu.switch_emulation_mode(carry);
    finish(cpu, opcode);
}

fn finish<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.cycles += metadata.base_cycles as u64;
    cpu.advance_pc(metadata.size_bytes as u16);
}
