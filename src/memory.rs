//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from specific
//! memory implementations. The CPU performs every access through it with a full
//! 24-bit [`Address`].
//!
//! Two implementations ship with the crate:
//!
//! - [`FlatMemory`]: the whole 16 MiB space as one RAM array, for tests and tools
//! - [`SystemBus`](crate::SystemBus): flat regions plus an ordered device registry
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 65816 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Unclaimed reads return 0 (open bus)
//! - Writes to ROM/unclaimed regions are ignored
//! - Multi-byte values are little-endian and composed without bank wrap

use crate::Address;

/// Memory bus trait for the CPU to read/write bytes.
///
/// Only the three byte-level methods are required. The multi-byte helpers have
/// default implementations composed from byte accesses; implementations with a
/// faster path (such as `SystemBus`) override them.
///
/// # Design
///
/// - `read_byte(&mut self)`: reads may have side effects on I/O devices
/// - `peek_byte(&self)`: side-effect-free read for tracers and debuggers
/// - No error types: the 65816 has no bus error mechanism
///
/// # Examples
///
/// ```
/// use lib65816::{Address, FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
///
/// mem.store_word(Address::new(0x7E, 0x1000), 0xBEEF);
/// assert_eq!(mem.read_byte(Address::new(0x7E, 0x1000)), 0xEF);
/// assert_eq!(mem.read_byte(Address::new(0x7E, 0x1001)), 0xBE);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 24-bit address.
    ///
    /// This method must never panic. Unclaimed addresses read as 0.
    fn read_byte(&mut self, address: Address) -> u8;

    /// Writes a byte to the specified 24-bit address.
    ///
    /// This method must never panic. Writes to read-only or unclaimed
    /// addresses are discarded.
    fn store_byte(&mut self, address: Address, value: u8);

    /// Reads a byte without triggering device side effects.
    fn peek_byte(&self, address: Address) -> u8;

    /// Reads a little-endian 16-bit value. The second byte is taken from the
    /// next 24-bit address, crossing into the next bank if needed.
    fn read_word(&mut self, address: Address) -> u16 {
        let low = self.read_byte(address) as u16;
        let high = self.read_byte(address.with_offset_no_wrap(1)) as u16;
        (high << 8) | low
    }

    /// Writes a little-endian 16-bit value, low byte first.
    fn store_word(&mut self, address: Address, value: u16) {
        self.store_byte(address, value as u8);
        self.store_byte(address.with_offset_no_wrap(1), (value >> 8) as u8);
    }

    /// Reads a little-endian 32-bit value.
    fn read_long(&mut self, address: Address) -> u32 {
        let mut value = 0u32;
        for i in 0..4 {
            value |= (self.read_byte(address.with_offset_no_wrap(i)) as u32) << (8 * i);
        }
        value
    }

    /// Writes a little-endian 32-bit value, low byte first.
    fn store_long(&mut self, address: Address, value: u32) {
        for i in 0..4 {
            self.store_byte(address.with_offset_no_wrap(i), (value >> (8 * i)) as u8);
        }
    }

    /// Reads a packed 24-bit pointer (offset low, offset high, bank).
    ///
    /// Used by the indirect-long addressing modes and by JML/JSL-style operands.
    fn read_address_at(&mut self, address: Address) -> Address {
        let offset = self.read_word(address);
        let bank = self.read_byte(address.with_offset_no_wrap(2));
        Address::new(bank, offset)
    }

    /// Checks if any attached device is asserting the IRQ line.
    ///
    /// The IRQ line is **level-sensitive** and **shared**: the CPU ORs this
    /// with its own IRQ pin at every instruction boundary. The default returns
    /// `false`, for memory implementations without interrupt-capable devices.
    fn irq_active(&self) -> bool {
        false
    }
}

/// Size of the full 65816 address space.
pub const ADDRESS_SPACE_SIZE: usize = 0x0100_0000;

/// Simple flat memory covering the whole 16 MiB address space.
///
/// Every address is writable RAM initialized to 0x00. Useful for tests,
/// tools and programs that need no memory-mapped I/O.
///
/// # Examples
///
/// ```
/// use lib65816::{CPU, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x00FFFC, &[0x00, 0x80]); // Emulation reset vector -> $8000
/// memory.load(0x008000, &[0xEA]); // NOP
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    data: Box<[u8]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: vec![0u8; ADDRESS_SPACE_SIZE].into_boxed_slice(),
        }
    }

    /// Copies `bytes` into memory starting at the 24-bit address `start`.
    ///
    /// Bytes past the top of the address space wrap around to bank 0.
    pub fn load(&mut self, start: u32, bytes: &[u8]) {
        let start = Address::from_integer(start);
        for (i, byte) in bytes.iter().enumerate() {
            let address = start.with_offset_no_wrap(i as i32);
            self.data[address.as_integer() as usize] = *byte;
        }
    }

    /// Returns the whole address space as a byte slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read_byte(&mut self, address: Address) -> u8 {
        self.data[address.as_integer() as usize]
    }

    fn store_byte(&mut self, address: Address, value: u8) {
        self.data[address.as_integer() as usize] = value;
    }

    fn peek_byte(&self, address: Address) -> u8 {
        self.data[address.as_integer() as usize]
    }
}
