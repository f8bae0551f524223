//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP, JML: Jump within the program bank / to any bank
//! - JSR, JSL: Jump to subroutine (short / long)
//! - RTS, RTL, RTI: Return from subroutine / long subroutine / interrupt
//! - BRK, COP: Software interrupts
//! - NOP, WDM: No operation (WDM skips its signature byte)
//! - WAI, STP: Wait for interrupt / stop the clock
//!
//! Return addresses pushed by JSR and JSL point at the last byte of the call
//! instruction; RTS and RTL add one when pulling them.

use crate::cpu::Interrupt;
use crate::{AddressingMode, MemoryBus, CPU, OPCODE_TABLE};

/// Executes the JMP (Jump) instruction.
///
/// Addressing modes:
/// - Absolute (0x4C): JMP $1234
/// - Absolute Indirect (0x6C): JMP ($1234), pointer in bank 0
/// - Absolute Indexed Indirect (0x7C): JMP ($1234,X), pointer in the program bank
///
/// The program bank never changes. No flags are affected.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let target = match metadata.addressing_mode {
        AddressingMode::Absolute => cpu.operand_word(),
        mode => cpu.effective_address(mode).offset,
    };

    cpu.pc = target;
    cpu.cycles += metadata.base_cycles as u64;
}

/// Executes the JML (Jump Long) instruction.
///
/// Loads both PBR and PC, from the operand (0x5C) or from a 24-bit pointer in
/// bank 0 (0xDC).
pub(crate) fn execute_jml<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let target = cpu.effective_address(metadata.addressing_mode);

    cpu.pbr = target.bank;
    cpu.pc = target.offset;
    cpu.cycles += metadata.base_cycles as u64;
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the instruction (PC + 2), high byte
/// first, then jumps within the program bank.
///
/// # Examples
///
/// ```
/// use lib65816::{CPU, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x00FFFC, &[0x00, 0x10]);
/// memory.load(0x001000, &[0x20, 0x00, 0x20]); // JSR $2000
///
/// let mut cpu = CPU::new(memory);
/// cpu.step();
///
/// assert_eq!(cpu.pc(), 0x2000);
/// assert_eq!(cpu.sp(), 0x01FD);
/// assert_eq!(cpu.memory().as_slice()[0x01FF], 0x10);
/// assert_eq!(cpu.memory().as_slice()[0x01FE], 0x02);
/// ```
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let target = match metadata.addressing_mode {
        AddressingMode::Absolute => cpu.operand_word(),
        mode => cpu.effective_address(mode).offset,
    };

    let return_address = cpu.pc.wrapping_add(2);
    cpu.stack.push_word(&mut cpu.memory, return_address);

    cpu.pc = target;
    cpu.cycles += metadata.base_cycles as u64;
}

/// Executes the JSL (Jump to Subroutine Long) instruction.
///
/// Pushes PBR, then PC + 3, then loads PBR and PC from the 24-bit operand.
pub(crate) fn execute_jsl<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let target = cpu.operand_long();
    let return_address = cpu.pc.wrapping_add(3);

    cpu.stack.push_byte(&mut cpu.memory, cpu.pbr);
    cpu.stack.push_word(&mut cpu.memory, return_address);

    cpu.pbr = target.bank;
    cpu.pc = target.offset;
    cpu.cycles += metadata.base_cycles as u64;
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let return_address = cpu.stack.pull_word(&mut cpu.memory);

    cpu.pc = return_address.wrapping_add(1);
    cpu.cycles += metadata.base_cycles as u64;
}

/// Executes the RTL (Return from Subroutine Long) instruction.
pub(crate) fn execute_rtl<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let return_address = cpu.stack.pull_word(&mut cpu.memory);
    let bank = cpu.stack.pull_byte(&mut cpu.memory);

    cpu.pbr = bank;
    cpu.pc = return_address.wrapping_add(1);
    cpu.cycles += metadata.base_cycles as u64;
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls P, then PC, then (native mode only) PBR. Pulling P applies the width
/// flags, so X and Y lose their high bytes if the index registers become 8-bit.
///
/// Cycle timing: 6 cycles, 7 in native mode
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let status = cpu.stack.pull_byte(&mut cpu.memory);
    cpu.flags.pull_register_value(status);
    cpu.normalize_index_registers();

    cpu.pc = cpu.stack.pull_word(&mut cpu.memory);

    let mut cycles = metadata.base_cycles as u64;
    if !cpu.flags.emulation {
        cpu.pbr = cpu.stack.pull_byte(&mut cpu.memory);
        cycles += 1;
    }

    cpu.cycles += cycles;
}

/// Executes the BRK (Software Break) instruction.
///
/// BRK is two bytes long: the opcode and a signature byte the CPU ignores.
/// The pushed return address skips both. In emulation mode the pushed P has
/// the B bit set and the handler comes from the IRQ vector.
///
/// Cycle timing: 7 cycles, 8 in native mode
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let return_address = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    cpu.service_interrupt(Interrupt::Brk, return_address);
}

/// Executes the COP (Coprocessor Enable) instruction.
///
/// Behaves like BRK but vectors through COP and never sets B.
pub(crate) fn execute_cop<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let return_address = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    cpu.service_interrupt(Interrupt::Cop, return_address);
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.cycles += metadata.base_cycles as u64;
    cpu.finish_instruction(metadata);
}

/// Executes the WDM (reserved) instruction as a two-byte NOP.
pub(crate) fn execute_wdm<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.cycles += metadata.base_cycles as u64;
    cpu.advance_pc(metadata.size_bytes as u16);
}

/// Executes the WAI (Wait for Interrupt) instruction.
///
/// The core stops fetching until IRQ, NMI or ABORT is active. An IRQ wakes
/// the core even while I is set; it then simply continues with the next
/// instruction.
pub(crate) fn execute_wai<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.waiting = true;
    cpu.cycles += metadata.base_cycles as u64;
    cpu.finish_instruction(metadata);
}

/// Executes the STP (Stop the Clock) instruction. Only a reset restarts the core.
pub(crate) fn execute_stp<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    log::warn!("STP executed at {}, core halted until reset", cpu.program_address());

    cpu.stopped = true;
    cpu.cycles += metadata.base_cycles as u64;
    cpu.finish_instruction(metadata);
}
