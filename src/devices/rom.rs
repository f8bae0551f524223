//! ROM device implementation.
//!
//! Provides read-only memory storage via the Device trait.

use super::Device;
use crate::Address;

/// Read-only memory device.
///
/// `RomDevice` stores immutable data that can be read but not written.
/// Writes are silently ignored, matching typical ROM hardware behavior.
/// Reads offer a direct-access slice; writes never do.
///
/// # Examples
///
/// ```rust
/// use lib65816::{Device, RomDevice};
///
/// let mut rom = RomDevice::new(0x00_8000, vec![0xEA, 0xEA, 0xEA]);
///
/// // Reads work
/// assert_eq!(rom.read_byte(0).0, 0xEA);
///
/// // Writes are ignored
/// rom.store_byte(0, 0xFF);
/// assert_eq!(rom.read_byte(0).0, 0xEA);
/// ```
pub struct RomDevice {
    base: u32,
    data: Vec<u8>,
}

impl RomDevice {
    /// Create a new ROM device with `data` mapped at the 24-bit address `base`.
    ///
    /// The data is immutable after construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lib65816::RomDevice;
    ///
    /// // 32KB ROM in the top half of bank 0
    /// let mut rom_data = vec![0; 0x8000];
    ///
    /// // Emulation reset vector at $FFFC-$FFFD
    /// rom_data[0x7FFC] = 0x00;
    /// rom_data[0x7FFD] = 0x80;
    ///
    /// let rom = RomDevice::new(0x00_8000, rom_data);
    /// assert_eq!(rom.size(), 0x8000);
    /// ```
    pub fn new(base: u32, data: Vec<u8>) -> Self {
        Self { base, data }
    }

    /// Number of bytes in the ROM.
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

impl Device for RomDevice {
    fn decode(&self, address: Address) -> Option<u32> {
        let local = address.as_integer().checked_sub(self.base)?;
        ((local as usize) < self.data.len()).then_some(local)
    }

    fn read_byte(&mut self, local: u32) -> (u8, Option<&[u8]>) {
        let tail = &self.data[local as usize..];
        (tail[0], Some(tail))
    }

    fn store_byte(&mut self, _local: u32, _value: u8) -> Option<&mut [u8]> {
        None
    }

    fn peek_byte(&self, local: u32) -> u8 {
        self.data.get(local as usize).copied().unwrap_or(0)
    }
}
