//! # Hardware Stack
//!
//! The 65816 stack always lives in bank 0 and grows downward. The stack
//! pointer is 16 bits wide in native mode. In emulation mode its high byte is
//! pinned to `0x01` and the pointer wraps inside page 1, like the 6502.
//!
//! Pushes store at `S` and then decrement; pulls increment and then load.
//! Multi-byte values are pushed high byte first so they sit little-endian in
//! memory at `S+1..`.

use crate::{Address, MemoryBus};

/// Stack pointer value after power-on.
pub const STACK_POINTER_POWER_ON: u16 = 0x01FF;

/// Bus-backed push/pull stack.
///
/// The stack holds only the pointer; the bytes are read and written through
/// whatever [`MemoryBus`] is passed in.
///
/// # Examples
///
/// ```
/// use lib65816::{Address, FlatMemory, MemoryBus, Stack};
///
/// let mut mem = FlatMemory::new();
/// let mut stack = Stack::new(0x01FF, true);
///
/// stack.push_word(&mut mem, 0x1234);
/// assert_eq!(stack.pointer(), 0x01FD);
/// assert_eq!(mem.read_byte(Address::new(0x00, 0x01FE)), 0x34);
/// assert_eq!(mem.read_byte(Address::new(0x00, 0x01FF)), 0x12);
///
/// assert_eq!(stack.pull_word(&mut mem), 0x1234);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stack {
    pointer: u16,
    emulation: bool,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new(STACK_POINTER_POWER_ON, true)
    }
}

impl Stack {
    /// Creates a stack at `pointer`. In emulation mode the high byte is forced
    /// to `0x01`.
    pub fn new(pointer: u16, emulation: bool) -> Self {
        let mut stack = Self { pointer, emulation };
        stack.relocate(pointer);
        stack
    }

    /// Returns the current stack pointer.
    pub fn pointer(&self) -> u16 {
        self.pointer
    }

    /// Returns the bank-0 address the next push will write to.
    pub fn address(&self) -> Address {
        Address::new(0x00, self.pointer)
    }

    /// Moves the stack to `pointer` (TXS, TCS, reset).
    pub fn relocate(&mut self, pointer: u16) {
        self.pointer = if self.emulation {
            0x0100 | (pointer & 0x00FF)
        } else {
            pointer
        };
    }

    /// Switches between page-1 confinement (emulation) and a free 16-bit
    /// pointer (native). Entering emulation mode re-homes the pointer to page 1.
    pub fn set_emulation(&mut self, emulation: bool) {
        self.emulation = emulation;
        self.relocate(self.pointer);
    }

    /// Pushes one byte.
    pub fn push_byte<M: MemoryBus>(&mut self, memory: &mut M, value: u8) {
        memory.store_byte(self.address(), value);
        self.step_pointer(-1);
    }

    /// Pushes a 16-bit value, high byte first.
    pub fn push_word<M: MemoryBus>(&mut self, memory: &mut M, value: u16) {
        self.push_byte(memory, (value >> 8) as u8);
        self.push_byte(memory, value as u8);
    }

    /// Pushes the low 8 or all 16 bits of `value`.
    pub fn push<M: MemoryBus>(&mut self, memory: &mut M, value: u16, is_8bit: bool) {
        if is_8bit {
            self.push_byte(memory, value as u8);
        } else {
            self.push_word(memory, value);
        }
    }

    /// Pulls one byte.
    pub fn pull_byte<M: MemoryBus>(&mut self, memory: &mut M) -> u8 {
        self.step_pointer(1);
        memory.read_byte(self.address())
    }

    /// Pulls a 16-bit value, low byte first.
    pub fn pull_word<M: MemoryBus>(&mut self, memory: &mut M) -> u16 {
        let low = self.pull_byte(memory) as u16;
        let high = self.pull_byte(memory) as u16;
        (high << 8) | low
    }

    /// Pulls 8 or 16 bits.
    pub fn pull<M: MemoryBus>(&mut self, memory: &mut M, is_8bit: bool) -> u16 {
        if is_8bit {
            self.pull_byte(memory) as u16
        } else {
            self.pull_word(memory)
        }
    }

    /// Reads the byte `depth` positions above the top of the stack without
    /// moving the pointer (`depth` 1 is the most recently pushed byte).
    pub fn peek<M: MemoryBus>(&self, memory: &M, depth: u16) -> u8 {
        let mut probe = *self;
        probe.step_pointer(depth as i32);
        memory.peek_byte(probe.address())
    }

    fn step_pointer(&mut self, delta: i32) {
        let moved = self.pointer.wrapping_add(delta as u16);
        self.relocate(moved);
    }
}
