//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode metadata table that serves as the
//! single source of truth for all 65816 instruction information.
//!
//! Every one of the 256 opcode bytes is a defined instruction on the 65816; there
//! are no illegal slots. WDM (0x42) is reserved by WDC and executes as a 2-byte NOP.
//!
//! Each opcode entry includes:
//! - Opcode byte and mnemonic
//! - Addressing mode
//! - Base cycle cost (8-bit registers, D low byte zero, no page crossing)
//! - Instruction size in bytes (8-bit immediate operands)
//! - The `Operation` the CPU dispatches on
//!
//! Width, direct-page and page-crossing penalties are added by the instruction
//! handlers at execution time.

use crate::addressing::AddressingMode;
use crate::StatusFlags;

/// The instruction family an opcode belongs to, one variant per mnemonic.
///
/// The CPU dispatches on this with an exhaustive `match`, so adding a variant
/// without a handler is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Bra,
    Brk,
    Brl,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cop,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jml,
    Jmp,
    Jsl,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Mvn,
    Mvp,
    Nop,
    Ora,
    Pea,
    Pei,
    Per,
    Pha,
    Phb,
    Phd,
    Phk,
    Php,
    Phx,
    Phy,
    Pla,
    Plb,
    Pld,
    Plp,
    Plx,
    Ply,
    Rep,
    Rol,
    Ror,
    Rti,
    Rtl,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sep,
    Sta,
    Stp,
    Stx,
    Sty,
    Stz,
    Tax,
    Tay,
    Tcd,
    Tcs,
    Tdc,
    Trb,
    Tsb,
    Tsc,
    Tsx,
    Txa,
    Txs,
    Txy,
    Tya,
    Tyx,
    Wai,
    Wdm,
    Xba,
    Xce,
}

impl Operation {
    /// Returns the width of this operation's immediate operand.
    ///
    /// `Some(true)` means the accumulator width flag applies, `Some(false)` the
    /// index width flag, and `None` a fixed 8-bit operand (REP, SEP, WDM, ...).
    pub fn immediate_uses_accumulator_width(&self) -> Option<bool> {
        match self {
            Operation::Adc
            | Operation::And
            | Operation::Bit
            | Operation::Cmp
            | Operation::Eor
            | Operation::Lda
            | Operation::Ora
            | Operation::Sbc => Some(true),
            Operation::Cpx | Operation::Cpy | Operation::Ldx | Operation::Ldy => Some(false),
            _ => None,
        }
    }
}

/// Metadata for a single 65816 opcode.
///
/// This struct contains all static information about an instruction needed for
/// decoding and execution planning.
///
/// # Fields
///
/// - `code`: The opcode byte (equal to the entry's index in `OPCODE_TABLE`)
/// - `mnemonic`: Three-letter instruction name (e.g., "LDA", "XCE")
/// - `addressing_mode`: How the instruction interprets operand bytes
/// - `base_cycles`: Minimum cycle cost (penalties added dynamically)
/// - `size_bytes`: Instruction size with an 8-bit immediate operand (1-4 bytes)
/// - `operation`: The instruction family the CPU dispatches to
///
/// # Examples
///
/// ```
/// use lib65816::{AddressingMode, Operation, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Opcode byte.
    pub code: u8,

    /// Instruction mnemonic (e.g., "LDA", "MVN").
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost, assuming 8-bit registers and no penalties.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands), assuming an 8-bit
    /// immediate operand.
    pub size_bytes: u8,

    /// Instruction family.
    pub operation: Operation,
}

impl OpcodeMetadata {
    /// Returns the encoded length of this instruction under the given flags.
    ///
    /// Immediate operands whose register is 16 bits wide take one more byte.
    pub fn instruction_size(&self, flags: &StatusFlags) -> u16 {
        let size = self.size_bytes as u16;
        if self.addressing_mode != AddressingMode::Immediate {
            return size;
        }

        match self.operation.immediate_uses_accumulator_width() {
            Some(true) if !flags.accumulator_is_8bit() => size + 1,
            Some(false) if !flags.index_is_8bit() => size + 1,
            _ => size,
        }
    }
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// This table serves as the single source of truth for all 65816 instruction metadata.
/// Index into the array using the opcode byte to retrieve its metadata.
///
/// # Examples
///
/// ```
/// use lib65816::OPCODE_TABLE;
///
/// let xce = &OPCODE_TABLE[0xFB];
/// assert_eq!(xce.mnemonic, "XCE");
/// assert_eq!(xce.base_cycles, 2);
///
/// // BRK carries a signature byte
/// assert_eq!(OPCODE_TABLE[0x00].size_bytes, 2);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00
    OpcodeMetadata {
        code: 0x00,
        mnemonic: "BRK",
        addressing_mode: AddressingMode::Interrupt,
        base_cycles: 7,
        size_bytes: 2,
        operation: Operation::Brk,
    },
    // 0x01
    OpcodeMetadata {
        code: 0x01,
        mnemonic: "ORA",
        addressing_mode: AddressingMode::DirectIndexedIndirect,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Ora,
    },
    // 0x02
    OpcodeMetadata {
        code: 0x02,
        mnemonic: "COP",
        addressing_mode: AddressingMode::Interrupt,
        base_cycles: 7,
        size_bytes: 2,
        operation: Operation::Cop,
    },
    // 0x03
    OpcodeMetadata {
        code: 0x03,
        mnemonic: "ORA",
        addressing_mode: AddressingMode::StackRelative,
        base_cycles: 4,
        size_bytes: 2,
        operation: Operation::Ora,
    },
    // 0x04
    OpcodeMetadata {
        code: 0x04,
        mnemonic: "TSB",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 5,
        size_bytes: 2,
        operation: Operation::Tsb,
    },
    // 0x05
    OpcodeMetadata {
        code: 0x05,
        mnemonic: "ORA",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 3,
        size_bytes: 2,
        operation: Operation::Ora,
    },
    // 0x06
    OpcodeMetadata {
        code: 0x06,
        mnemonic: "ASL",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 5,
        size_bytes: 2,
        operation: Operation::Asl,
    },
    // 0x07
    OpcodeMetadata {
        code: 0x07,
        mnemonic: "ORA",
        addressing_mode: AddressingMode::DirectIndirectLong,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Ora,
    },
    // 0x08
    OpcodeMetadata {
        code: 0x08,
        mnemonic: "PHP",
        addressing_mode: AddressingMode::StackImplied,
        base_cycles: 3,
        size_bytes: 1,
        operation: Operation::Php,
    },
    // 0x09
    OpcodeMetadata {
        code: 0x09,
        mnemonic: "ORA",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        operation: Operation::Ora,
    },
    // 0x0A
    OpcodeMetadata {
        code: 0x0A,
        mnemonic: "ASL",
        addressing_mode: AddressingMode::Accumulator,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Asl,
    },
    // 0x0B
    OpcodeMetadata {
        code: 0x0B,
        mnemonic: "PHD",
        addressing_mode: AddressingMode::StackImplied,
        base_cycles: 4,
        size_bytes: 1,
        operation: Operation::Phd,
    },
    // 0x0C
    OpcodeMetadata {
        code: 0x0C,
        mnemonic: "TSB",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        operation: Operation::Tsb,
    },
    // 0x0D
    OpcodeMetadata {
        code: 0x0D,
        mnemonic: "ORA",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Ora,
    },
    // 0x0E
    OpcodeMetadata {
        code: 0x0E,
        mnemonic: "ASL",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        operation: Operation::Asl,
    },
    // 0x0F
    OpcodeMetadata {
        code: 0x0F,
        mnemonic: "ORA",
        addressing_mode: AddressingMode::AbsoluteLong,
        base_cycles: 5,
        size_bytes: 4,
        operation: Operation::Ora,
    },
    // 0x10
    OpcodeMetadata {
        code: 0x10,
        mnemonic: "BPL",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        operation: Operation::Bpl,
    },
    // 0x11
    OpcodeMetadata {
        code: 0x11,
        mnemonic: "ORA",
        addressing_mode: AddressingMode::DirectIndirectIndexed,
        base_cycles: 5,
        size_bytes: 2,
        operation: Operation::Ora,
    },
    // 0x12
    OpcodeMetadata {
        code: 0x12,
        mnemonic: "ORA",
        addressing_mode: AddressingMode::DirectIndirect,
        base_cycles: 5,
        size_bytes: 2,
        operation: Operation::Ora,
    },
    // 0x13
    OpcodeMetadata {
        code: 0x13,
        mnemonic: "ORA",
        addressing_mode: AddressingMode::StackRelativeIndirectIndexed,
        base_cycles: 7,
        size_bytes: 2,
        operation: Operation::Ora,
    },
    // 0x14
    OpcodeMetadata {
        code: 0x14,
        mnemonic: "TRB",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 5,
        size_bytes: 2,
        operation: Operation::Trb,
    },
    // 0x15
    OpcodeMetadata {
        code: 0x15,
        mnemonic: "ORA",
        addressing_mode: AddressingMode::DirectX,
        base_cycles: 4,
        size_bytes: 2,
        operation: Operation::Ora,
    },
    // 0x16
    OpcodeMetadata {
        code: 0x16,
        mnemonic: "ASL",
        addressing_mode: AddressingMode::DirectX,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Asl,
    },
    // 0x17
    OpcodeMetadata {
        code: 0x17,
        mnemonic: "ORA",
        addressing_mode: AddressingMode::DirectIndirectLongIndexed,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Ora,
    },
    // 0x18
    OpcodeMetadata {
        code: 0x18,
        mnemonic: "CLC",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Clc,
    },
    // 0x19
    OpcodeMetadata {
        code: 0x19,
        mnemonic: "ORA",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Ora,
    },
    // 0x1A
    OpcodeMetadata {
        code: 0x1A,
        mnemonic: "INC",
        addressing_mode: AddressingMode::Accumulator,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Inc,
    },
    // 0x1B
    OpcodeMetadata {
        code: 0x1B,
        mnemonic: "TCS",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Tcs,
    },
    // 0x1C
    OpcodeMetadata {
        code: 0x1C,
        mnemonic: "TRB",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        operation: Operation::Trb,
    },
    // 0x1D
    OpcodeMetadata {
        code: 0x1D,
        mnemonic: "ORA",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Ora,
    },
    // 0x1E
    OpcodeMetadata {
        code: 0x1E,
        mnemonic: "ASL",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        operation: Operation::Asl,
    },
    // 0x1F
    OpcodeMetadata {
        code: 0x1F,
        mnemonic: "ORA",
        addressing_mode: AddressingMode::AbsoluteLongX,
        base_cycles: 5,
        size_bytes: 4,
        operation: Operation::Ora,
    },
    // 0x20
    OpcodeMetadata {
        code: 0x20,
        mnemonic: "JSR",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        operation: Operation::Jsr,
    },
    // 0x21
    OpcodeMetadata {
        code: 0x21,
        mnemonic: "AND",
        addressing_mode: AddressingMode::DirectIndexedIndirect,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::And,
    },
    // 0x22
    OpcodeMetadata {
        code: 0x22,
        mnemonic: "JSL",
        addressing_mode: AddressingMode::AbsoluteLong,
        base_cycles: 8,
        size_bytes: 4,
        operation: Operation::Jsl,
    },
    // 0x23
    OpcodeMetadata {
        code: 0x23,
        mnemonic: "AND",
        addressing_mode: AddressingMode::StackRelative,
        base_cycles: 4,
        size_bytes: 2,
        operation: Operation::And,
    },
    // 0x24
    OpcodeMetadata {
        code: 0x24,
        mnemonic: "BIT",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 3,
        size_bytes: 2,
        operation: Operation::Bit,
    },
    // 0x25
    OpcodeMetadata {
        code: 0x25,
        mnemonic: "AND",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 3,
        size_bytes: 2,
        operation: Operation::And,
    },
    // 0x26
    OpcodeMetadata {
        code: 0x26,
        mnemonic: "ROL",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 5,
        size_bytes: 2,
        operation: Operation::Rol,
    },
    // 0x27
    OpcodeMetadata {
        code: 0x27,
        mnemonic: "AND",
        addressing_mode: AddressingMode::DirectIndirectLong,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::And,
    },
    // 0x28
    OpcodeMetadata {
        code: 0x28,
        mnemonic: "PLP",
        addressing_mode: AddressingMode::StackImplied,
        base_cycles: 4,
        size_bytes: 1,
        operation: Operation::Plp,
    },
    // 0x29
    OpcodeMetadata {
        code: 0x29,
        mnemonic: "AND",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        operation: Operation::And,
    },
    // 0x2A
    OpcodeMetadata {
        code: 0x2A,
        mnemonic: "ROL",
        addressing_mode: AddressingMode::Accumulator,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Rol,
    },
    // 0x2B
    OpcodeMetadata {
        code: 0x2B,
        mnemonic: "PLD",
        addressing_mode: AddressingMode::StackImplied,
        base_cycles: 5,
        size_bytes: 1,
        operation: Operation::Pld,
    },
    // 0x2C
    OpcodeMetadata {
        code: 0x2C,
        mnemonic: "BIT",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Bit,
    },
    // 0x2D
    OpcodeMetadata {
        code: 0x2D,
        mnemonic: "AND",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::And,
    },
    // 0x2E
    OpcodeMetadata {
        code: 0x2E,
        mnemonic: "ROL",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        operation: Operation::Rol,
    },
    // 0x2F
    OpcodeMetadata {
        code: 0x2F,
        mnemonic: "AND",
        addressing_mode: AddressingMode::AbsoluteLong,
        base_cycles: 5,
        size_bytes: 4,
        operation: Operation::And,
    },
    // 0x30
    OpcodeMetadata {
        code: 0x30,
        mnemonic: "BMI",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        operation: Operation::Bmi,
    },
    // 0x31
    OpcodeMetadata {
        code: 0x31,
        mnemonic: "AND",
        addressing_mode: AddressingMode::DirectIndirectIndexed,
        base_cycles: 5,
        size_bytes: 2,
        operation: Operation::And,
    },
    // 0x32
    OpcodeMetadata {
        code: 0x32,
        mnemonic: "AND",
        addressing_mode: AddressingMode::DirectIndirect,
        base_cycles: 5,
        size_bytes: 2,
        operation: Operation::And,
    },
    // 0x33
    OpcodeMetadata {
        code: 0x33,
        mnemonic: "AND",
        addressing_mode: AddressingMode::StackRelativeIndirectIndexed,
        base_cycles: 7,
        size_bytes: 2,
        operation: Operation::And,
    },
    // 0x34
    OpcodeMetadata {
        code: 0x34,
        mnemonic: "BIT",
        addressing_mode: AddressingMode::DirectX,
        base_cycles: 4,
        size_bytes: 2,
        operation: Operation::Bit,
    },
    // 0x35
    OpcodeMetadata {
        code: 0x35,
        mnemonic: "AND",
        addressing_mode: AddressingMode::DirectX,
        base_cycles: 4,
        size_bytes: 2,
        operation: Operation::And,
    },
    // 0x36
    OpcodeMetadata {
        code: 0x36,
        mnemonic: "ROL",
        addressing_mode: AddressingMode::DirectX,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Rol,
    },
    // 0x37
    OpcodeMetadata {
        code: 0x37,
        mnemonic: "AND",
        addressing_mode: AddressingMode::DirectIndirectLongIndexed,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::And,
    },
    // 0x38
    OpcodeMetadata {
        code: 0x38,
        mnemonic: "SEC",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Sec,
    },
    // 0x39
    OpcodeMetadata {
        code: 0x39,
        mnemonic: "AND",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::And,
    },
    // 0x3A
    OpcodeMetadata {
        code: 0x3A,
        mnemonic: "DEC",
        addressing_mode: AddressingMode::Accumulator,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Dec,
    },
    // 0x3B
    OpcodeMetadata {
        code: 0x3B,
        mnemonic: "TSC",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Tsc,
    },
    // 0x3C
    OpcodeMetadata {
        code: 0x3C,
        mnemonic: "BIT",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Bit,
    },
    // 0x3D
    OpcodeMetadata {
        code: 0x3D,
        mnemonic: "AND",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::And,
    },
    // 0x3E
    OpcodeMetadata {
        code: 0x3E,
        mnemonic: "ROL",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        operation: Operation::Rol,
    },
    // 0x3F
    OpcodeMetadata {
        code: 0x3F,
        mnemonic: "AND",
        addressing_mode: AddressingMode::AbsoluteLongX,
        base_cycles: 5,
        size_bytes: 4,
        operation: Operation::And,
    },
    // 0x40
    OpcodeMetadata {
        code: 0x40,
        mnemonic: "RTI",
        addressing_mode: AddressingMode::StackImplied,
        base_cycles: 6,
        size_bytes: 1,
        operation: Operation::Rti,
    },
    // 0x41
    OpcodeMetadata {
        code: 0x41,
        mnemonic: "EOR",
        addressing_mode: AddressingMode::DirectIndexedIndirect,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Eor,
    },
    // 0x42
    OpcodeMetadata {
        code: 0x42,
        mnemonic: "WDM",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        operation: Operation::Wdm,
    },
    // 0x43
    OpcodeMetadata {
        code: 0x43,
        mnemonic: "EOR",
        addressing_mode: AddressingMode::StackRelative,
        base_cycles: 4,
        size_bytes: 2,
        operation: Operation::Eor,
    },
    // 0x44
    OpcodeMetadata {
        code: 0x44,
        mnemonic: "MVP",
        addressing_mode: AddressingMode::BlockMove,
        base_cycles: 7,
        size_bytes: 3,
        operation: Operation::Mvp,
    },
    // 0x45
    OpcodeMetadata {
        code: 0x45,
        mnemonic: "EOR",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 3,
        size_bytes: 2,
        operation: Operation::Eor,
    },
    // 0x46
    OpcodeMetadata {
        code: 0x46,
        mnemonic: "LSR",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 5,
        size_bytes: 2,
        operation: Operation::Lsr,
    },
    // 0x47
    OpcodeMetadata {
        code: 0x47,
        mnemonic: "EOR",
        addressing_mode: AddressingMode::DirectIndirectLong,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Eor,
    },
    // 0x48
    OpcodeMetadata {
        code: 0x48,
        mnemonic: "PHA",
        addressing_mode: AddressingMode::StackImplied,
        base_cycles: 3,
        size_bytes: 1,
        operation: Operation::Pha,
    },
    // 0x49
    OpcodeMetadata {
        code: 0x49,
        mnemonic: "EOR",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        operation: Operation::Eor,
    },
    // 0x4A
    OpcodeMetadata {
        code: 0x4A,
        mnemonic: "LSR",
        addressing_mode: AddressingMode::Accumulator,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Lsr,
    },
    // 0x4B
    OpcodeMetadata {
        code: 0x4B,
        mnemonic: "PHK",
        addressing_mode: AddressingMode::StackImplied,
        base_cycles: 3,
        size_bytes: 1,
        operation: Operation::Phk,
    },
    // 0x4C
    OpcodeMetadata {
        code: 0x4C,
        mnemonic: "JMP",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 3,
        size_bytes: 3,
        operation: Operation::Jmp,
    },
    // 0x4D
    OpcodeMetadata {
        code: 0x4D,
        mnemonic: "EOR",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Eor,
    },
    // 0x4E
    OpcodeMetadata {
        code: 0x4E,
        mnemonic: "LSR",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        operation: Operation::Lsr,
    },
    // 0x4F
    OpcodeMetadata {
        code: 0x4F,
        mnemonic: "EOR",
        addressing_mode: AddressingMode::AbsoluteLong,
        base_cycles: 5,
        size_bytes: 4,
        operation: Operation::Eor,
    },
    // 0x50
    OpcodeMetadata {
        code: 0x50,
        mnemonic: "BVC",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        operation: Operation::Bvc,
    },
    // 0x51
    OpcodeMetadata {
        code: 0x51,
        mnemonic: "EOR",
        addressing_mode: AddressingMode::DirectIndirectIndexed,
        base_cycles: 5,
        size_bytes: 2,
        operation: Operation::Eor,
    },
    // 0x52
    OpcodeMetadata {
        code: 0x52,
        mnemonic: "EOR",
        addressing_mode: AddressingMode::DirectIndirect,
        base_cycles: 5,
        size_bytes: 2,
        operation: Operation::Eor,
    },
    // 0x53
    OpcodeMetadata {
        code: 0x53,
        mnemonic: "EOR",
        addressing_mode: AddressingMode::StackRelativeIndirectIndexed,
        base_cycles: 7,
        size_bytes: 2,
        operation: Operation::Eor,
    },
    // 0x54
    OpcodeMetadata {
        code: 0x54,
        mnemonic: "MVN",
        addressing_mode: AddressingMode::BlockMove,
        base_cycles: 7,
        size_bytes: 3,
        operation: Operation::Mvn,
    },
    // 0x55
    OpcodeMetadata {
        code: 0x55,
        mnemonic: "EOR",
        addressing_mode: AddressingMode::DirectX,
        base_cycles: 4,
        size_bytes: 2,
        operation: Operation::Eor,
    },
    // 0x56
    OpcodeMetadata {
        code: 0x56,
        mnemonic: "LSR",
        addressing_mode: AddressingMode::DirectX,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Lsr,
    },
    // 0x57
    OpcodeMetadata {
        code: 0x57,
        mnemonic: "EOR",
        addressing_mode: AddressingMode::DirectIndirectLongIndexed,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Eor,
    },
    // 0x58
    OpcodeMetadata {
        code: 0x58,
        mnemonic: "CLI",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Cli,
    },
    // 0x59
    OpcodeMetadata {
        code: 0x59,
        mnemonic: "EOR",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Eor,
    },
    // 0x5A
    OpcodeMetadata {
        code: 0x5A,
        mnemonic: "PHY",
        addressing_mode: AddressingMode::StackImplied,
        base_cycles: 3,
        size_bytes: 1,
        operation: Operation::Phy,
    },
    // 0x5B
    OpcodeMetadata {
        code: 0x5B,
        mnemonic: "TCD",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Tcd,
    },
    // 0x5C
    OpcodeMetadata {
        code: 0x5C,
        mnemonic: "JML",
        addressing_mode: AddressingMode::AbsoluteLong,
        base_cycles: 4,
        size_bytes: 4,
        operation: Operation::Jml,
    },
    // 0x5D
    OpcodeMetadata {
        code: 0x5D,
        mnemonic: "EOR",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Eor,
    },
    // 0x5E
    OpcodeMetadata {
        code: 0x5E,
        mnemonic: "LSR",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        operation: Operation::Lsr,
    },
    // 0x5F
    OpcodeMetadata {
        code: 0x5F,
        mnemonic: "EOR",
        addressing_mode: AddressingMode::AbsoluteLongX,
        base_cycles: 5,
        size_bytes: 4,
        operation: Operation::Eor,
    },
    // 0x60
    OpcodeMetadata {
        code: 0x60,
        mnemonic: "RTS",
        addressing_mode: AddressingMode::StackImplied,
        base_cycles: 6,
        size_bytes: 1,
        operation: Operation::Rts,
    },
    // 0x61
    OpcodeMetadata {
        code: 0x61,
        mnemonic: "ADC",
        addressing_mode: AddressingMode::DirectIndexedIndirect,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Adc,
    },
    // 0x62
    OpcodeMetadata {
        code: 0x62,
        mnemonic: "PER",
        addressing_mode: AddressingMode::StackProgramCounterRelative,
        base_cycles: 6,
        size_bytes: 3,
        operation: Operation::Per,
    },
    // 0x63
    OpcodeMetadata {
        code: 0x63,
        mnemonic: "ADC",
        addressing_mode: AddressingMode::StackRelative,
        base_cycles: 4,
        size_bytes: 2,
        operation: Operation::Adc,
    },
    // 0x64
    OpcodeMetadata {
        code: 0x64,
        mnemonic: "STZ",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 3,
        size_bytes: 2,
        operation: Operation::Stz,
    },
    // 0x65
    OpcodeMetadata {
        code: 0x65,
        mnemonic: "ADC",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 3,
        size_bytes: 2,
        operation: Operation::Adc,
    },
    // 0x66
    OpcodeMetadata {
        code: 0x66,
        mnemonic: "ROR",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 5,
        size_bytes: 2,
        operation: Operation::Ror,
    },
    // 0x67
    OpcodeMetadata {
        code: 0x67,
        mnemonic: "ADC",
        addressing_mode: AddressingMode::DirectIndirectLong,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Adc,
    },
    // 0x68
    OpcodeMetadata {
        code: 0x68,
        mnemonic: "PLA",
        addressing_mode: AddressingMode::StackImplied,
        base_cycles: 4,
        size_bytes: 1,
        operation: Operation::Pla,
    },
    // 0x69
    OpcodeMetadata {
        code: 0x69,
        mnemonic: "ADC",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        operation: Operation::Adc,
    },
    // 0x6A
    OpcodeMetadata {
        code: 0x6A,
        mnemonic: "ROR",
        addressing_mode: AddressingMode::Accumulator,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Ror,
    },
    // 0x6B
    OpcodeMetadata {
        code: 0x6B,
        mnemonic: "RTL",
        addressing_mode: AddressingMode::StackImplied,
        base_cycles: 6,
        size_bytes: 1,
        operation: Operation::Rtl,
    },
    // 0x6C
    OpcodeMetadata {
        code: 0x6C,
        mnemonic: "JMP",
        addressing_mode: AddressingMode::AbsoluteIndirect,
        base_cycles: 5,
        size_bytes: 3,
        operation: Operation::Jmp,
    },
    // 0x6D
    OpcodeMetadata {
        code: 0x6D,
        mnemonic: "ADC",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Adc,
    },
    // 0x6E
    OpcodeMetadata {
        code: 0x6E,
        mnemonic: "ROR",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        operation: Operation::Ror,
    },
    // 0x6F
    OpcodeMetadata {
        code: 0x6F,
        mnemonic: "ADC",
        addressing_mode: AddressingMode::AbsoluteLong,
        base_cycles: 5,
        size_bytes: 4,
        operation: Operation::Adc,
    },
    // 0x70
    OpcodeMetadata {
        code: 0x70,
        mnemonic: "BVS",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        operation: Operation::Bvs,
    },
    // 0x71
    OpcodeMetadata {
        code: 0x71,
        mnemonic: "ADC",
        addressing_mode: AddressingMode::DirectIndirectIndexed,
        base_cycles: 5,
        size_bytes: 2,
        operation: Operation::Adc,
    },
    // 0x72
    OpcodeMetadata {
        code: 0x72,
        mnemonic: "ADC",
        addressing_mode: AddressingMode::DirectIndirect,
        base_cycles: 5,
        size_bytes: 2,
        operation: Operation::Adc,
    },
    // 0x73
    OpcodeMetadata {
        code: 0x73,
        mnemonic: "ADC",
        addressing_mode: AddressingMode::StackRelativeIndirectIndexed,
        base_cycles: 7,
        size_bytes: 2,
        operation: Operation::Adc,
    },
    // 0x74
    OpcodeMetadata {
        code: 0x74,
        mnemonic: "STZ",
        addressing_mode: AddressingMode::DirectX,
        base_cycles: 4,
        size_bytes: 2,
        operation: Operation::Stz,
    },
    // 0x75
    OpcodeMetadata {
        code: 0x75,
        mnemonic: "ADC",
        addressing_mode: AddressingMode::DirectX,
        base_cycles: 4,
        size_bytes: 2,
        operation: Operation::Adc,
    },
    // 0x76
    OpcodeMetadata {
        code: 0x76,
        mnemonic: "ROR",
        addressing_mode: AddressingMode::DirectX,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Ror,
    },
    // 0x77
    OpcodeMetadata {
        code: 0x77,
        mnemonic: "ADC",
        addressing_mode: AddressingMode::DirectIndirectLongIndexed,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Adc,
    },
    // 0x78
    OpcodeMetadata {
        code: 0x78,
        mnemonic: "SEI",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Sei,
    },
    // 0x79
    OpcodeMetadata {
        code: 0x79,
        mnemonic: "ADC",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Adc,
    },
    // 0x7A
    OpcodeMetadata {
        code: 0x7A,
        mnemonic: "PLY",
        addressing_mode: AddressingMode::StackImplied,
        base_cycles: 4,
        size_bytes: 1,
        operation: Operation::Ply,
    },
    // 0x7B
    OpcodeMetadata {
        code: 0x7B,
        mnemonic: "TDC",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Tdc,
    },
    // 0x7C
    OpcodeMetadata {
        code: 0x7C,
        mnemonic: "JMP",
        addressing_mode: AddressingMode::AbsoluteIndexedIndirect,
        base_cycles: 6,
        size_bytes: 3,
        operation: Operation::Jmp,
    },
    // 0x7D
    OpcodeMetadata {
        code: 0x7D,
        mnemonic: "ADC",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Adc,
    },
    // 0x7E
    OpcodeMetadata {
        code: 0x7E,
        mnemonic: "ROR",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        operation: Operation::Ror,
    },
    // 0x7F
    OpcodeMetadata {
        code: 0x7F,
        mnemonic: "ADC",
        addressing_mode: AddressingMode::AbsoluteLongX,
        base_cycles: 5,
        size_bytes: 4,
        operation: Operation::Adc,
    },
    // 0x80
    OpcodeMetadata {
        code: 0x80,
        mnemonic: "BRA",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        operation: Operation::Bra,
    },
    // 0x81
    OpcodeMetadata {
        code: 0x81,
        mnemonic: "STA",
        addressing_mode: AddressingMode::DirectIndexedIndirect,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Sta,
    },
    // 0x82
    OpcodeMetadata {
        code: 0x82,
        mnemonic: "BRL",
        addressing_mode: AddressingMode::RelativeLong,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Brl,
    },
    // 0x83
    OpcodeMetadata {
        code: 0x83,
        mnemonic: "STA",
        addressing_mode: AddressingMode::StackRelative,
        base_cycles: 4,
        size_bytes: 2,
        operation: Operation::Sta,
    },
    // 0x84
    OpcodeMetadata {
        code: 0x84,
        mnemonic: "STY",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 3,
        size_bytes: 2,
        operation: Operation::Sty,
    },
    // 0x85
    OpcodeMetadata {
        code: 0x85,
        mnemonic: "STA",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 3,
        size_bytes: 2,
        operation: Operation::Sta,
    },
    // 0x86
    OpcodeMetadata {
        code: 0x86,
        mnemonic: "STX",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 3,
        size_bytes: 2,
        operation: Operation::Stx,
    },
    // 0x87
    OpcodeMetadata {
        code: 0x87,
        mnemonic: "STA",
        addressing_mode: AddressingMode::DirectIndirectLong,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Sta,
    },
    // 0x88
    OpcodeMetadata {
        code: 0x88,
        mnemonic: "DEY",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Dey,
    },
    // 0x89
    OpcodeMetadata {
        code: 0x89,
        mnemonic: "BIT",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        operation: Operation::Bit,
    },
    // 0x8A
    OpcodeMetadata {
        code: 0x8A,
        mnemonic: "TXA",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Txa,
    },
    // 0x8B
    OpcodeMetadata {
        code: 0x8B,
        mnemonic: "PHB",
        addressing_mode: AddressingMode::StackImplied,
        base_cycles: 3,
        size_bytes: 1,
        operation: Operation::Phb,
    },
    // 0x8C
    OpcodeMetadata {
        code: 0x8C,
        mnemonic: "STY",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Sty,
    },
    // 0x8D
    OpcodeMetadata {
        code: 0x8D,
        mnemonic: "STA",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Sta,
    },
    // 0x8E
    OpcodeMetadata {
        code: 0x8E,
        mnemonic: "STX",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Stx,
    },
    // 0x8F
    OpcodeMetadata {
        code: 0x8F,
        mnemonic: "STA",
        addressing_mode: AddressingMode::AbsoluteLong,
        base_cycles: 5,
        size_bytes: 4,
        operation: Operation::Sta,
    },
    // 0x90
    OpcodeMetadata {
        code: 0x90,
        mnemonic: "BCC",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        operation: Operation::Bcc,
    },
    // 0x91
    OpcodeMetadata {
        code: 0x91,
        mnemonic: "STA",
        addressing_mode: AddressingMode::DirectIndirectIndexed,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Sta,
    },
    // 0x92
    OpcodeMetadata {
        code: 0x92,
        mnemonic: "STA",
        addressing_mode: AddressingMode::DirectIndirect,
        base_cycles: 5,
        size_bytes: 2,
        operation: Operation::Sta,
    },
    // 0x93
    OpcodeMetadata {
        code: 0x93,
        mnemonic: "STA",
        addressing_mode: AddressingMode::StackRelativeIndirectIndexed,
        base_cycles: 7,
        size_bytes: 2,
        operation: Operation::Sta,
    },
    // 0x94
    OpcodeMetadata {
        code: 0x94,
        mnemonic: "STY",
        addressing_mode: AddressingMode::DirectX,
        base_cycles: 4,
        size_bytes: 2,
        operation: Operation::Sty,
    },
    // 0x95
    OpcodeMetadata {
        code: 0x95,
        mnemonic: "STA",
        addressing_mode: AddressingMode::DirectX,
        base_cycles: 4,
        size_bytes: 2,
        operation: Operation::Sta,
    },
    // 0x96
    OpcodeMetadata {
        code: 0x96,
        mnemonic: "STX",
        addressing_mode: AddressingMode::DirectY,
        base_cycles: 4,
        size_bytes: 2,
        operation: Operation::Stx,
    },
    // 0x97
    OpcodeMetadata {
        code: 0x97,
        mnemonic: "STA",
        addressing_mode: AddressingMode::DirectIndirectLongIndexed,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Sta,
    },
    // 0x98
    OpcodeMetadata {
        code: 0x98,
        mnemonic: "TYA",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Tya,
    },
    // 0x99
    OpcodeMetadata {
        code: 0x99,
        mnemonic: "STA",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 5,
        size_bytes: 3,
        operation: Operation::Sta,
    },
    // 0x9A
    OpcodeMetadata {
        code: 0x9A,
        mnemonic: "TXS",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Txs,
    },
    // 0x9B
    OpcodeMetadata {
        code: 0x9B,
        mnemonic: "TXY",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Txy,
    },
    // 0x9C
    OpcodeMetadata {
        code: 0x9C,
        mnemonic: "STZ",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Stz,
    },
    // 0x9D
    OpcodeMetadata {
        code: 0x9D,
        mnemonic: "STA",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 5,
        size_bytes: 3,
        operation: Operation::Sta,
    },
    // 0x9E
    OpcodeMetadata {
        code: 0x9E,
        mnemonic: "STZ",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 5,
        size_bytes: 3,
        operation: Operation::Stz,
    },
    // 0x9F
    OpcodeMetadata {
        code: 0x9F,
        mnemonic: "STA",
        addressing_mode: AddressingMode::AbsoluteLongX,
        base_cycles: 5,
        size_bytes: 4,
        operation: Operation::Sta,
    },
    // 0xA0
    OpcodeMetadata {
        code: 0xA0,
        mnemonic: "LDY",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        operation: Operation::Ldy,
    },
    // 0xA1
    OpcodeMetadata {
        code: 0xA1,
        mnemonic: "LDA",
        addressing_mode: AddressingMode::DirectIndexedIndirect,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Lda,
    },
    // 0xA2
    OpcodeMetadata {
        code: 0xA2,
        mnemonic: "LDX",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        operation: Operation::Ldx,
    },
    // 0xA3
    OpcodeMetadata {
        code: 0xA3,
        mnemonic: "LDA",
        addressing_mode: AddressingMode::StackRelative,
        base_cycles: 4,
        size_bytes: 2,
        operation: Operation::Lda,
    },
    // 0xA4
    OpcodeMetadata {
        code: 0xA4,
        mnemonic: "LDY",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 3,
        size_bytes: 2,
        operation: Operation::Ldy,
    },
    // 0xA5
    OpcodeMetadata {
        code: 0xA5,
        mnemonic: "LDA",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 3,
        size_bytes: 2,
        operation: Operation::Lda,
    },
    // 0xA6
    OpcodeMetadata {
        code: 0xA6,
        mnemonic: "LDX",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 3,
        size_bytes: 2,
        operation: Operation::Ldx,
    },
    // 0xA7
    OpcodeMetadata {
        code: 0xA7,
        mnemonic: "LDA",
        addressing_mode: AddressingMode::DirectIndirectLong,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Lda,
    },
    // 0xA8
    OpcodeMetadata {
        code: 0xA8,
        mnemonic: "TAY",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Tay,
    },
    // 0xA9
    OpcodeMetadata {
        code: 0xA9,
        mnemonic: "LDA",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        operation: Operation::Lda,
    },
    // 0xAA
    OpcodeMetadata {
        code: 0xAA,
        mnemonic: "TAX",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Tax,
    },
    // 0xAB
    OpcodeMetadata {
        code: 0xAB,
        mnemonic: "PLB",
        addressing_mode: AddressingMode::StackImplied,
        base_cycles: 4,
        size_bytes: 1,
        operation: Operation::Plb,
    },
    // 0xAC
    OpcodeMetadata {
        code: 0xAC,
        mnemonic: "LDY",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Ldy,
    },
    // 0xAD
    OpcodeMetadata {
        code: 0xAD,
        mnemonic: "LDA",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Lda,
    },
    // 0xAE
    OpcodeMetadata {
        code: 0xAE,
        mnemonic: "LDX",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Ldx,
    },
    // 0xAF
    OpcodeMetadata {
        code: 0xAF,
        mnemonic: "LDA",
        addressing_mode: AddressingMode::AbsoluteLong,
        base_cycles: 5,
        size_bytes: 4,
        operation: Operation::Lda,
    },
    // 0xB0
    OpcodeMetadata {
        code: 0xB0,
        mnemonic: "BCS",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        operation: Operation::Bcs,
    },
    // 0xB1
    OpcodeMetadata {
        code: 0xB1,
        mnemonic: "LDA",
        addressing_mode: AddressingMode::DirectIndirectIndexed,
        base_cycles: 5,
        size_bytes: 2,
        operation: Operation::Lda,
    },
    // 0xB2
    OpcodeMetadata {
        code: 0xB2,
        mnemonic: "LDA",
        addressing_mode: AddressingMode::DirectIndirect,
        base_cycles: 5,
        size_bytes: 2,
        operation: Operation::Lda,
    },
    // 0xB3
    OpcodeMetadata {
        code: 0xB3,
        mnemonic: "LDA",
        addressing_mode: AddressingMode::StackRelativeIndirectIndexed,
        base_cycles: 7,
        size_bytes: 2,
        operation: Operation::Lda,
    },
    // 0xB4
    OpcodeMetadata {
        code: 0xB4,
        mnemonic: "LDY",
        addressing_mode: AddressingMode::DirectX,
        base_cycles: 4,
        size_bytes: 2,
        operation: Operation::Ldy,
    },
    // 0xB5
    OpcodeMetadata {
        code: 0xB5,
        mnemonic: "LDA",
        addressing_mode: AddressingMode::DirectX,
        base_cycles: 4,
        size_bytes: 2,
        operation: Operation::Lda,
    },
    // 0xB6
    OpcodeMetadata {
        code: 0xB6,
        mnemonic: "LDX",
        addressing_mode: AddressingMode::DirectY,
        base_cycles: 4,
        size_bytes: 2,
        operation: Operation::Ldx,
    },
    // 0xB7
    OpcodeMetadata {
        code: 0xB7,
        mnemonic: "LDA",
        addressing_mode: AddressingMode::DirectIndirectLongIndexed,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Lda,
    },
    // 0xB8
    OpcodeMetadata {
        code: 0xB8,
        mnemonic: "CLV",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Clv,
    },
    // 0xB9
    OpcodeMetadata {
        code: 0xB9,
        mnemonic: "LDA",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Lda,
    },
    // 0xBA
    OpcodeMetadata {
        code: 0xBA,
        mnemonic: "TSX",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Tsx,
    },
    // 0xBB
    OpcodeMetadata {
        code: 0xBB,
        mnemonic: "TYX",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Tyx,
    },
    // 0xBC
    OpcodeMetadata {
        code: 0xBC,
        mnemonic: "LDY",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Ldy,
    },
    // 0xBD
    OpcodeMetadata {
        code: 0xBD,
        mnemonic: "LDA",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Lda,
    },
    // 0xBE
    OpcodeMetadata {
        code: 0xBE,
        mnemonic: "LDX",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Ldx,
    },
    // 0xBF
    OpcodeMetadata {
        code: 0xBF,
        mnemonic: "LDA",
        addressing_mode: AddressingMode::AbsoluteLongX,
        base_cycles: 5,
        size_bytes: 4,
        operation: Operation::Lda,
    },
    // 0xC0
    OpcodeMetadata {
        code: 0xC0,
        mnemonic: "CPY",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        operation: Operation::Cpy,
    },
    // 0xC1
    OpcodeMetadata {
        code: 0xC1,
        mnemonic: "CMP",
        addressing_mode: AddressingMode::DirectIndexedIndirect,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Cmp,
    },
    // 0xC2
    OpcodeMetadata {
        code: 0xC2,
        mnemonic: "REP",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 3,
        size_bytes: 2,
        operation: Operation::Rep,
    },
    // 0xC3
    OpcodeMetadata {
        code: 0xC3,
        mnemonic: "CMP",
        addressing_mode: AddressingMode::StackRelative,
        base_cycles: 4,
        size_bytes: 2,
        operation: Operation::Cmp,
    },
    // 0xC4
    OpcodeMetadata {
        code: 0xC4,
        mnemonic: "CPY",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 3,
        size_bytes: 2,
        operation: Operation::Cpy,
    },
    // 0xC5
    OpcodeMetadata {
        code: 0xC5,
        mnemonic: "CMP",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 3,
        size_bytes: 2,
        operation: Operation::Cmp,
    },
    // 0xC6
    OpcodeMetadata {
        code: 0xC6,
        mnemonic: "DEC",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 5,
        size_bytes: 2,
        operation: Operation::Dec,
    },
    // 0xC7
    OpcodeMetadata {
        code: 0xC7,
        mnemonic: "CMP",
        addressing_mode: AddressingMode::DirectIndirectLong,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Cmp,
    },
    // 0xC8
    OpcodeMetadata {
        code: 0xC8,
        mnemonic: "INY",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Iny,
    },
    // 0xC9
    OpcodeMetadata {
        code: 0xC9,
        mnemonic: "CMP",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        operation: Operation::Cmp,
    },
    // 0xCA
    OpcodeMetadata {
        code: 0xCA,
        mnemonic: "DEX",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Dex,
    },
    // 0xCB
    OpcodeMetadata {
        code: 0xCB,
        mnemonic: "WAI",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 3,
        size_bytes: 1,
        operation: Operation::Wai,
    },
    // 0xCC
    OpcodeMetadata {
        code: 0xCC,
        mnemonic: "CPY",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Cpy,
    },
    // 0xCD
    OpcodeMetadata {
        code: 0xCD,
        mnemonic: "CMP",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Cmp,
    },
    // 0xCE
    OpcodeMetadata {
        code: 0xCE,
        mnemonic: "DEC",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        operation: Operation::Dec,
    },
    // 0xCF
    OpcodeMetadata {
        code: 0xCF,
        mnemonic: "CMP",
        addressing_mode: AddressingMode::AbsoluteLong,
        base_cycles: 5,
        size_bytes: 4,
        operation: Operation::Cmp,
    },
    // 0xD0
    OpcodeMetadata {
        code: 0xD0,
        mnemonic: "BNE",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        operation: Operation::Bne,
    },
    // 0xD1
    OpcodeMetadata {
        code: 0xD1,
        mnemonic: "CMP",
        addressing_mode: AddressingMode::DirectIndirectIndexed,
        base_cycles: 5,
        size_bytes: 2,
        operation: Operation::Cmp,
    },
    // 0xD2
    OpcodeMetadata {
        code: 0xD2,
        mnemonic: "CMP",
        addressing_mode: AddressingMode::DirectIndirect,
        base_cycles: 5,
        size_bytes: 2,
        operation: Operation::Cmp,
    },
    // 0xD3
    OpcodeMetadata {
        code: 0xD3,
        mnemonic: "CMP",
        addressing_mode: AddressingMode::StackRelativeIndirectIndexed,
        base_cycles: 7,
        size_bytes: 2,
        operation: Operation::Cmp,
    },
    // 0xD4
    OpcodeMetadata {
        code: 0xD4,
        mnemonic: "PEI",
        addressing_mode: AddressingMode::StackDirectIndirect,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Pei,
    },
    // 0xD5
    OpcodeMetadata {
        code: 0xD5,
        mnemonic: "CMP",
        addressing_mode: AddressingMode::DirectX,
        base_cycles: 4,
        size_bytes: 2,
        operation: Operation::Cmp,
    },
    // 0xD6
    OpcodeMetadata {
        code: 0xD6,
        mnemonic: "DEC",
        addressing_mode: AddressingMode::DirectX,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Dec,
    },
    // 0xD7
    OpcodeMetadata {
        code: 0xD7,
        mnemonic: "CMP",
        addressing_mode: AddressingMode::DirectIndirectLongIndexed,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Cmp,
    },
    // 0xD8
    OpcodeMetadata {
        code: 0xD8,
        mnemonic: "CLD",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Cld,
    },
    // 0xD9
    OpcodeMetadata {
        code: 0xD9,
        mnemonic: "CMP",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Cmp,
    },
    // 0xDA
    OpcodeMetadata {
        code: 0xDA,
        mnemonic: "PHX",
        addressing_mode: AddressingMode::StackImplied,
        base_cycles: 3,
        size_bytes: 1,
        operation: Operation::Phx,
    },
    // 0xDB
    OpcodeMetadata {
        code: 0xDB,
        mnemonic: "STP",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 3,
        size_bytes: 1,
        operation: Operation::Stp,
    },
    // 0xDC
    OpcodeMetadata {
        code: 0xDC,
        mnemonic: "JML",
        addressing_mode: AddressingMode::AbsoluteIndirectLong,
        base_cycles: 6,
        size_bytes: 3,
        operation: Operation::Jml,
    },
    // 0xDD
    OpcodeMetadata {
        code: 0xDD,
        mnemonic: "CMP",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Cmp,
    },
    // 0xDE
    OpcodeMetadata {
        code: 0xDE,
        mnemonic: "DEC",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        operation: Operation::Dec,
    },
    // 0xDF
    OpcodeMetadata {
        code: 0xDF,
        mnemonic: "CMP",
        addressing_mode: AddressingMode::AbsoluteLongX,
        base_cycles: 5,
        size_bytes: 4,
        operation: Operation::Cmp,
    },
    // 0xE0
    OpcodeMetadata {
        code: 0xE0,
        mnemonic: "CPX",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        operation: Operation::Cpx,
    },
    // 0xE1
    OpcodeMetadata {
        code: 0xE1,
        mnemonic: "SBC",
        addressing_mode: AddressingMode::DirectIndexedIndirect,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Sbc,
    },
    // 0xE2
    OpcodeMetadata {
        code: 0xE2,
        mnemonic: "SEP",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 3,
        size_bytes: 2,
        operation: Operation::Sep,
    },
    // 0xE3
    OpcodeMetadata {
        code: 0xE3,
        mnemonic: "SBC",
        addressing_mode: AddressingMode::StackRelative,
        base_cycles: 4,
        size_bytes: 2,
        operation: Operation::Sbc,
    },
    // 0xE4
    OpcodeMetadata {
        code: 0xE4,
        mnemonic: "CPX",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 3,
        size_bytes: 2,
        operation: Operation::Cpx,
    },
    // 0xE5
    OpcodeMetadata {
        code: 0xE5,
        mnemonic: "SBC",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 3,
        size_bytes: 2,
        operation: Operation::Sbc,
    },
    // 0xE6
    OpcodeMetadata {
        code: 0xE6,
        mnemonic: "INC",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 5,
        size_bytes: 2,
        operation: Operation::Inc,
    },
    // 0xE7
    OpcodeMetadata {
        code: 0xE7,
        mnemonic: "SBC",
        addressing_mode: AddressingMode::DirectIndirectLong,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Sbc,
    },
    // 0xE8
    OpcodeMetadata {
        code: 0xE8,
        mnemonic: "INX",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Inx,
    },
    // 0xE9
    OpcodeMetadata {
        code: 0xE9,
        mnemonic: "SBC",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        operation: Operation::Sbc,
    },
    // 0xEA
    OpcodeMetadata {
        code: 0xEA,
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Nop,
    },
    // 0xEB
    OpcodeMetadata {
        code: 0xEB,
        mnemonic: "XBA",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 3,
        size_bytes: 1,
        operation: Operation::Xba,
    },
    // 0xEC
    OpcodeMetadata {
        code: 0xEC,
        mnemonic: "CPX",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Cpx,
    },
    // 0xED
    OpcodeMetadata {
        code: 0xED,
        mnemonic: "SBC",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Sbc,
    },
    // 0xEE
    OpcodeMetadata {
        code: 0xEE,
        mnemonic: "INC",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        operation: Operation::Inc,
    },
    // 0xEF
    OpcodeMetadata {
        code: 0xEF,
        mnemonic: "SBC",
        addressing_mode: AddressingMode::AbsoluteLong,
        base_cycles: 5,
        size_bytes: 4,
        operation: Operation::Sbc,
    },
    // 0xF0
    OpcodeMetadata {
        code: 0xF0,
        mnemonic: "BEQ",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        operation: Operation::Beq,
    },
    // 0xF1
    OpcodeMetadata {
        code: 0xF1,
        mnemonic: "SBC",
        addressing_mode: AddressingMode::DirectIndirectIndexed,
        base_cycles: 5,
        size_bytes: 2,
        operation: Operation::Sbc,
    },
    // 0xF2
    OpcodeMetadata {
        code: 0xF2,
        mnemonic: "SBC",
        addressing_mode: AddressingMode::DirectIndirect,
        base_cycles: 5,
        size_bytes: 2,
        operation: Operation::Sbc,
    },
    // 0xF3
    OpcodeMetadata {
        code: 0xF3,
        mnemonic: "SBC",
        addressing_mode: AddressingMode::StackRelativeIndirectIndexed,
        base_cycles: 7,
        size_bytes: 2,
        operation: Operation::Sbc,
    },
    // 0xF4
    OpcodeMetadata {
        code: 0xF4,
        mnemonic: "PEA",
        addressing_mode: AddressingMode::StackAbsolute,
        base_cycles: 5,
        size_bytes: 3,
        operation: Operation::Pea,
    },
    // 0xF5
    OpcodeMetadata {
        code: 0xF5,
        mnemonic: "SBC",
        addressing_mode: AddressingMode::DirectX,
        base_cycles: 4,
        size_bytes: 2,
        operation: Operation::Sbc,
    },
    // 0xF6
    OpcodeMetadata {
        code: 0xF6,
        mnemonic: "INC",
        addressing_mode: AddressingMode::DirectX,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Inc,
    },
    // 0xF7
    OpcodeMetadata {
        code: 0xF7,
        mnemonic: "SBC",
        addressing_mode: AddressingMode::DirectIndirectLongIndexed,
        base_cycles: 6,
        size_bytes: 2,
        operation: Operation::Sbc,
    },
    // 0xF8
    OpcodeMetadata {
        code: 0xF8,
        mnemonic: "SED",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Sed,
    },
    // 0xF9
    OpcodeMetadata {
        code: 0xF9,
        mnemonic: "SBC",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Sbc,
    },
    // 0xFA
    OpcodeMetadata {
        code: 0xFA,
        mnemonic: "PLX",
        addressing_mode: AddressingMode::StackImplied,
        base_cycles: 4,
        size_bytes: 1,
        operation: Operation::Plx,
    },
    // 0xFB
    OpcodeMetadata {
        code: 0xFB,
        mnemonic: "XCE",
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        size_bytes: 1,
        operation: Operation::Xce,
    },
    // 0xFC
    OpcodeMetadata {
        code: 0xFC,
        mnemonic: "JSR",
        addressing_mode: AddressingMode::AbsoluteIndexedIndirect,
        base_cycles: 8,
        size_bytes: 3,
        operation: Operation::Jsr,
    },
    // 0xFD
    OpcodeMetadata {
        code: 0xFD,
        mnemonic: "SBC",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        operation: Operation::Sbc,
    },
    // 0xFE
    OpcodeMetadata {
        code: 0xFE,
        mnemonic: "INC",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        operation: Operation::Inc,
    },
    // 0xFF
    OpcodeMetadata {
        code: 0xFF,
        mnemonic: "SBC",
        addressing_mode: AddressingMode::AbsoluteLongX,
        base_cycles: 5,
        size_bytes: 4,
        operation: Operation::Sbc,
    },
];
