//! RAM device implementation.
//!
//! Provides readable and writable memory storage via the Device trait.

use super::{Device, MemoryRegion};
use crate::Address;

/// Simple RAM device with readable and writable storage.
///
/// `RamDevice` claims `size` consecutive bus addresses starting at `base`.
/// Reads and writes return direct-access slices, so word and long accesses
/// cost one dispatch.
///
/// A RAM built with [`RamDevice::flat`] goes further: it hands its storage to
/// the bus as a [`MemoryRegion`] at registration, and every access is then
/// served by the bus fast path without reaching the device at all.
///
/// # Examples
///
/// ```rust
/// use lib65816::{Address, Device, RamDevice};
///
/// let mut ram = RamDevice::new(0x7E_0000, 1024);
///
/// let local = ram.decode(Address::new(0x7E, 0x0042)).unwrap();
/// ram.store_byte(local, 0xAA);
/// assert_eq!(ram.read_byte(local).0, 0xAA);
/// ```
pub struct RamDevice {
    base: u32,
    data: Vec<u8>,
    flat: bool,
}

impl RamDevice {
    /// Create a new RAM device of `size` bytes mapped at the 24-bit address `base`.
    ///
    /// All bytes are initialized to zero.
    pub fn new(base: u32, size: usize) -> Self {
        Self {
            base,
            data: vec![0; size],
            flat: false,
        }
    }

    /// Create a RAM device that moves its storage into the bus fast path when
    /// registered.
    pub fn flat(base: u32, size: usize) -> Self {
        Self {
            flat: true,
            ..Self::new(base, size)
        }
    }

    /// Load bytes into RAM at the specified device-local offset.
    ///
    /// Bytes that would land past the end of the device are dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lib65816::{Device, RamDevice};
    ///
    /// let mut ram = RamDevice::new(0x0000, 1024);
    /// ram.load_bytes(0x100, &[0x01, 0x02, 0x03]);
    ///
    /// assert_eq!(ram.peek_byte(0x100), 0x01);
    /// assert_eq!(ram.peek_byte(0x102), 0x03);
    /// ```
    pub fn load_bytes(&mut self, offset: usize, bytes: &[u8]) {
        if offset >= self.data.len() {
            return;
        }
        let end = (offset + bytes.len()).min(self.data.len());
        self.data[offset..end].copy_from_slice(&bytes[..end - offset]);
    }

    /// Number of bytes the device still serves itself.
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

impl Device for RamDevice {
    fn decode(&self, address: Address) -> Option<u32> {
        let local = address.as_integer().checked_sub(self.base)?;
        ((local as usize) < self.data.len()).then_some(local)
    }

    fn read_byte(&mut self, local: u32) -> (u8, Option<&[u8]>) {
        let tail = &self.data[local as usize..];
        (tail[0], Some(tail))
    }

    fn store_byte(&mut self, local: u32, value: u8) -> Option<&mut [u8]> {
        let tail = &mut self.data[local as usize..];
        tail[0] = value;
        Some(tail)
    }

    fn peek_byte(&self, local: u32) -> u8 {
        self.data.get(local as usize).copied().unwrap_or(0)
    }

    fn memory_regions(&mut self) -> Vec<MemoryRegion> {
        if !self.flat || self.data.is_empty() {
            return Vec::new();
        }

        let data = std::mem::take(&mut self.data);
        match MemoryRegion::new(self.base, data) {
            Ok(region) => vec![region],
            Err(err) => {
                log::error!("RAM at ${:06X} cannot be flattened: {}", self.base, err);
                Vec::new()
            }
        }
    }
}
