//! # Instruction Trace
//!
//! When tracing is enabled, the CPU captures a [`TraceLine`] before each
//! instruction and emits it through `log::trace!`. Capturing only peeks at the
//! bus, so devices never see the extra reads.

use std::fmt;

use crate::{Address, MemoryBus, CPU, OPCODE_TABLE};

/// Number of bytes above the stack pointer included in a trace line.
const STACK_DEPTH: u16 = 3;

/// Snapshot of the CPU state at the start of one instruction.
///
/// # Examples
///
/// ```
/// use lib65816::{CPU, FlatMemory, TraceLine};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x00FFFC, &[0x00, 0x80]);
/// memory.load(0x008000, &[0xA9, 0x42]); // LDA #$42
///
/// let cpu = CPU::new(memory);
/// let line = TraceLine::capture(&cpu);
///
/// assert_eq!(line.mnemonic, "LDA");
/// assert_eq!(line.operands, vec![0x42]);
/// assert!(line.to_string().starts_with("00:8000  A9 42"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceLine {
    /// Address of the opcode byte
    pub address: Address,
    /// Opcode byte
    pub opcode: u8,
    /// Instruction mnemonic
    pub mnemonic: &'static str,
    /// Operand bytes as encoded under the current width flags
    pub operands: Vec<u8>,
    /// Accumulator (C)
    pub a: u16,
    /// X index register
    pub x: u16,
    /// Y index register
    pub y: u16,
    /// Stack pointer
    pub sp: u16,
    /// Direct page register
    pub d: u16,
    /// Data bank register
    pub dbr: u8,
    /// Packed status register
    pub status: u8,
    /// Emulation flag
    pub emulation: bool,
    /// Bytes just above the stack pointer, most recently pushed first
    pub stack: Vec<u8>,
}

impl TraceLine {
    /// Captures the instruction at the current program address.
    pub fn capture<M: MemoryBus>(cpu: &CPU<M>) -> Self {
        let address = cpu.program_address();
        let opcode = cpu.memory.peek_byte(address);
        let metadata = &OPCODE_TABLE[opcode as usize];

        let size = metadata.instruction_size(&cpu.flags);
        let operands = (1..size)
            .map(|i| cpu.memory.peek_byte(address.with_offset_wrap(i as i32)))
            .collect();

        let stack = (1..=STACK_DEPTH)
            .map(|depth| cpu.stack.peek(&cpu.memory, depth))
            .collect();

        Self {
            address,
            opcode,
            mnemonic: metadata.mnemonic,
            operands,
            a: cpu.a,
            x: cpu.x,
            y: cpu.y,
            sp: cpu.stack.pointer(),
            d: cpu.d,
            dbr: cpu.dbr,
            status: cpu.flags.register_value(),
            emulation: cpu.flags.emulation,
            stack,
        }
    }
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bytes = format!("{:02X}", self.opcode);
        for operand in &self.operands {
            bytes.push_str(&format!(" {:02X}", operand));
        }

        write!(
            f,
            "{}  {:<11}  {}  A={:04X} X={:04X} Y={:04X} S={:04X} D={:04X} DB={:02X} P={:02X} {}",
            self.address,
            bytes,
            self.mnemonic,
            self.a,
            self.x,
            self.y,
            self.sp,
            self.d,
            self.dbr,
            self.status,
            if self.emulation { 'E' } else { 'N' },
        )?;

        write!(f, " |")?;
        for byte in &self.stack {
            write!(f, " {:02X}", byte)?;
        }
        Ok(())
    }
}
