//! # Branch Instructions
//!
//! This module implements branch operations:
//! - BCC, BCS: Branch on carry clear/set
//! - BEQ, BNE: Branch on zero set/clear
//! - BMI, BPL: Branch on negative set/clear
//! - BVC, BVS: Branch on overflow clear/set
//! - BRA: Branch always
//! - BRL: Branch always, long (16-bit displacement)
//!
//! Short branches use a signed 8-bit offset from the address of the next
//! instruction. Targets wrap inside the program bank.
//!
//! Cycle timing for short branches:
//! - 2 cycles if not taken
//! - 3 cycles if taken
//! - 4 cycles if taken across a page boundary in emulation mode

use crate::{Address, MemoryBus, CPU, OPCODE_TABLE};

/// Executes the BCC (Branch if Carry Clear) instruction.
pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let condition = !cpu.flags.carry;
    branch_if(cpu, opcode, condition);
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let condition = cpu.flags.carry;
    branch_if(cpu, opcode, condition);
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let condition = cpu.flags.zero;
    branch_if(cpu, opcode, condition);
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let condition = !cpu.flags.zero;
    branch_if(cpu, opcode, condition);
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let condition = cpu.flags.sign;
    branch_if(cpu, opcode, condition);
}

/// Executes the BPL (Branch if Plus) instruction.
pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let condition = !cpu.flags.sign;
    branch_if(cpu, opcode, condition);
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let condition = !cpu.flags.overflow;
    branch_if(cpu, opcode, condition);
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let condition = cpu.flags.overflow;
    branch_if(cpu, opcode, condition);
}

/// Executes the BRA (Branch Always) instruction.
pub(crate) fn execute_bra<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    branch_if(cpu, opcode, true);
}

/// Executes the BRL (Branch Always Long) instruction.
///
/// The 16-bit displacement reaches anywhere in the program bank. Always takes
/// the opcode table's cycle count.
pub(crate) fn execute_brl<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let displacement = cpu.operand_word();
    let next_pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);

    cpu.pc = next_pc.wrapping_add(displacement);
    cpu.cycles += metadata.base_cycles as u64;
}

fn branch_if<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8, condition: bool) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let offset = cpu.operand_byte() as i8;
    let mut cycles = metadata.base_cycles as u64;
    let next_pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);

    if condition {
        let target_pc = next_pc.wrapping_add_signed(offset as i16);

        // Branch taken
        cycles += 1;

        // Page crossing costs only in emulation mode
        if cpu.flags.emulation && Address::offsets_are_on_different_pages(next_pc, target_pc) {
            cycles += 1;
        }

        cpu.pc = target_pc;
    } else {
        cpu.pc = next_pc;
    }

    cpu.cycles += cycles;
}
