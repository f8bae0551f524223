//! # 65816 Instruction Implementations
//!
//! This module contains the implementations of all 65816 instructions, organized by category.
//! Each instruction is implemented as a standalone function that takes a mutable reference
//! to the CPU and the opcode byte. Handlers add their cycles to the CPU and advance PC
//! (or load a new one); they never fail.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT, TSB, TRB)
//! - **branches**: Branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS, BRA, BRL)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY, STZ)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JML, JSR, JSL, RTS, RTL, RTI, BRK, COP, NOP, WDM, WAI, STP)
//! - **stack**: Stack operations (PHA, PHX, PHY, PHP, PHB, PHD, PHK, PLA, PLX, PLY, PLP, PLB, PLD, PEA, PEI, PER)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV, REP, SEP, XCE)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS, TXY, TYX, TCD, TDC, TCS, TSC, XBA)
//! - **block_move**: Block moves (MVN, MVP)
//!
//! ## Cycle accounting
//!
//! Base cycle counts in the opcode table assume 8-bit registers. Handlers add:
//! - 1 cycle per 16-bit memory operand (2 for read-modify-write)
//! - 1 cycle for direct page modes when the low byte of D is nonzero
//! - 1 cycle for indexed reads that cross a page

pub mod alu;
pub mod block_move;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{AddressingMode, MemoryBus, OpcodeMetadata, CPU};

/// Cycles for an instruction that reads its operand. `page_crossed` comes
/// from resolving the operand, so the bus is not consulted again.
pub(crate) fn read_cycles<M: MemoryBus>(
    cpu: &CPU<M>,
    metadata: &OpcodeMetadata,
    is_8bit: bool,
    page_crossed: bool,
) -> u64 {
    let page_cross_penalty = if page_crossed { 1 } else { 0 };
    metadata.base_cycles as u64
        + cpu.width_penalty(is_8bit)
        + cpu.direct_page_penalty(metadata.addressing_mode)
        + page_cross_penalty
}

/// Cycles for an instruction that writes its operand. Stores always pay for
/// the index carry, so there is no page-crossing variation.
pub(crate) fn write_cycles<M: MemoryBus>(
    cpu: &CPU<M>,
    metadata: &OpcodeMetadata,
    is_8bit: bool,
) -> u64 {
    metadata.base_cycles as u64
        + cpu.width_penalty(is_8bit)
        + cpu.direct_page_penalty(metadata.addressing_mode)
}

/// Cycles for a read-modify-write instruction.
pub(crate) fn modify_cycles<M: MemoryBus>(
    cpu: &CPU<M>,
    metadata: &OpcodeMetadata,
    is_8bit: bool,
) -> u64 {
    let mode = metadata.addressing_mode;
    if mode == AddressingMode::Accumulator {
        return metadata.base_cycles as u64;
    }
    metadata.base_cycles as u64 + 2 * cpu.width_penalty(is_8bit) + cpu.direct_page_penalty(mode)
}

/// Applies `operation` to the accumulator or to the memory operand, writing
/// the result back. Used by the shift, rotate, INC, DEC, TSB and TRB families.
pub(crate) fn modify_operand<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    is_8bit: bool,
    operation: impl FnOnce(&mut CPU<M>, u16) -> u16,
) {
    if mode == AddressingMode::Accumulator {
        let value = cpu.accumulator();
        let result = operation(cpu, value);
        cpu.store_accumulator(result);
        return;
    }

    let address = cpu.effective_address(mode);
    let value = cpu.read_data(address, mode, is_8bit);
    let result = operation(cpu, value);
    cpu.write_data(address, mode, result, is_8bit);
}

/// Sign bit for the given operand width.
pub(crate) fn sign_bit(is_8bit: bool) -> u16 {
    if is_8bit {
        0x0080
    } else {
        0x8000
    }
}

/// Value mask for the given operand width.
pub(crate) fn width_mask(is_8bit: bool) -> u16 {
    if is_8bit {
        0x00FF
    } else {
        0xFFFF
    }
}
