//! Memory-mapped device support for the 65816 emulator.
//!
//! This module defines the contract between the system bus and the hardware
//! attached to it (RAM, ROM, video, controllers, ...).
//!
//! # Architecture
//!
//! - **Device trait**: a component that claims addresses through `decode` and
//!   serves byte reads/writes at device-local addresses
//! - **MemoryRegion**: a flat, directly addressable byte range the bus checks
//!   before asking any device
//! - **Device implementations**: RAM and ROM; every other peripheral lives
//!   outside this crate and plugs in through the same trait
//!
//! # Example
//!
//! ```rust
//! use lib65816::{Address, MemoryBus, RamDevice, RomDevice, SystemBus};
//!
//! let mut bus = SystemBus::new();
//!
//! // 64KB of RAM in bank 0x7E
//! bus.register_device(Box::new(RamDevice::new(0x7E_0000, 0x1_0000)));
//!
//! // 32KB ROM in the upper half of bank 0
//! bus.register_device(Box::new(RomDevice::new(0x00_8000, vec![0xEA; 0x8000])));
//!
//! bus.store_byte(Address::new(0x7E, 0x0010), 0x42);
//! assert_eq!(bus.read_byte(Address::new(0x7E, 0x0010)), 0x42);
//! assert_eq!(bus.read_byte(Address::new(0x00, 0x8000)), 0xEA);
//! ```

use crate::address::ADDRESS_MASK;
use crate::Address;
use thiserror::Error;

pub mod ram;
pub mod rom;

pub use ram::RamDevice;
pub use rom::RomDevice;

/// Abstract interface for memory-mapped hardware devices.
///
/// The bus first asks [`Device::decode`] whether the device claims a 24-bit
/// address. If it does, the returned device-local address is passed to
/// `read_byte`/`store_byte`.
///
/// Both access methods may also hand back a *direct-access slice*: the device's
/// backing bytes starting at the byte just accessed, laid out at consecutive bus
/// addresses. The bus uses it to finish 16/24/32-bit accesses without another
/// dispatch. Returning `None` is always correct; the slice is only an
/// optimization.
///
/// # Examples
///
/// ```rust
/// use lib65816::{Address, Device};
///
/// /// A single write-only latch at 00:4200
/// struct Latch {
///     value: u8,
/// }
///
/// impl Device for Latch {
///     fn decode(&self, address: Address) -> Option<u32> {
///         (address == Address::new(0x00, 0x4200)).then_some(0)
///     }
///
///     fn read_byte(&mut self, _local: u32) -> (u8, Option<&[u8]>) {
///         (0, None)
///     }
///
///     fn store_byte(&mut self, _local: u32, value: u8) -> Option<&mut [u8]> {
///         self.value = value;
///         None
///     }
/// }
/// ```
pub trait Device {
    /// Returns the device-local address if this device claims `address`.
    fn decode(&self, address: Address) -> Option<u32>;

    /// Reads the byte at a device-local address, with an optional
    /// direct-access slice starting at that byte.
    fn read_byte(&mut self, local: u32) -> (u8, Option<&[u8]>);

    /// Writes the byte at a device-local address, returning an optional
    /// direct-access slice starting at that byte.
    fn store_byte(&mut self, local: u32, value: u8) -> Option<&mut [u8]>;

    /// Reads without side effects, for tracers and debuggers.
    ///
    /// Devices whose reads have side effects should leave the default, which
    /// reports open bus.
    fn peek_byte(&self, _local: u32) -> u8 {
        0
    }

    /// Flat regions this device wants the bus to serve directly.
    ///
    /// Called once at registration. Ownership of the returned bytes moves to
    /// the bus; accesses inside those ranges no longer reach the device.
    fn memory_regions(&mut self) -> Vec<MemoryRegion> {
        Vec::new()
    }

    /// Returns true while the device is asserting the shared IRQ line.
    fn irq_active(&self) -> bool {
        false
    }
}

/// Error returned when a flat memory region cannot be registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusError {
    /// The range ends before it starts or runs past the 24-bit address space.
    #[error("invalid memory region ${start:06X}-${end:06X}")]
    InvalidRegion {
        /// First address of the region
        start: u32,
        /// Last address of the region (inclusive)
        end: u32,
    },

    /// The backing storage does not match the size of the range.
    #[error("memory region expects {expected} bytes of backing, got {actual}")]
    RegionSizeMismatch {
        /// Size implied by the range
        expected: usize,
        /// Length of the backing bytes
        actual: usize,
    },

    /// The range overlaps a flat region that is already registered.
    #[error("memory region ${start:06X}-${end:06X} overlaps ${existing_start:06X}-${existing_end:06X}")]
    RegionOverlap {
        /// First address of the new region
        start: u32,
        /// Last address of the new region
        end: u32,
        /// First address of the registered region
        existing_start: u32,
        /// Last address of the registered region
        existing_end: u32,
    },
}

/// A flat, directly addressable byte range of the bus.
///
/// Both bounds are inclusive 24-bit addresses; `bytes[0]` is the byte at `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRegion {
    start: u32,
    end: u32,
    bytes: Box<[u8]>,
}

impl MemoryRegion {
    /// Creates a region starting at `start` and covering `bytes.len()` bytes.
    pub fn new(start: u32, bytes: Vec<u8>) -> Result<Self, BusError> {
        if bytes.is_empty() {
            return Err(BusError::InvalidRegion { start, end: start });
        }
        let end = start as u64 + bytes.len() as u64 - 1;
        Self::with_range(start, end.min(u32::MAX as u64) as u32, bytes)
    }

    /// Creates a region for the inclusive range `start..=end`, checking that the
    /// backing storage has exactly the right length.
    pub fn with_range(start: u32, end: u32, bytes: Vec<u8>) -> Result<Self, BusError> {
        if end < start || end > ADDRESS_MASK {
            return Err(BusError::InvalidRegion { start, end });
        }

        let expected = (end - start) as usize + 1;
        if bytes.len() != expected {
            return Err(BusError::RegionSizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        Ok(Self {
            start,
            end,
            bytes: bytes.into_boxed_slice(),
        })
    }

    /// First address of the region.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Last address of the region (inclusive).
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Returns true if the 24-bit `address` falls inside the region.
    pub fn contains(&self, address: u32) -> bool {
        self.start <= address && address <= self.end
    }

    /// Returns true if the two regions share at least one address.
    pub fn overlaps(&self, other: &MemoryRegion) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// The bytes from `address` to the end of the region.
    pub(crate) fn tail(&self, address: u32) -> &[u8] {
        &self.bytes[(address - self.start) as usize..]
    }

    /// The mutable bytes from `address` to the end of the region.
    pub(crate) fn tail_mut(&mut self, address: u32) -> &mut [u8] {
        &mut self.bytes[(address - self.start) as usize..]
    }
}
