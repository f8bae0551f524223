//! # System Bus
//!
//! `SystemBus` routes every CPU access to exactly one handler:
//!
//! 1. **Flat regions** are checked first. They are plain byte arrays owned by
//!    the bus, either added directly or advertised by a device at registration.
//! 2. **Devices** are then asked, in registration order, whether they decode the
//!    address. The first device that claims it wins, so registration order is
//!    priority.
//! 3. **Open bus**: if nothing claims the address, reads return 0 and writes are
//!    discarded.
//!
//! Multi-byte accesses dispatch once for the first byte. If the winning handler
//! offers a direct-access slice, the remaining bytes are copied straight from
//! (or into) it; otherwise each remaining byte is dispatched on its own.

use crate::address::ADDRESS_MASK;
use crate::devices::{BusError, Device, MemoryRegion};
use crate::{Address, MemoryBus};

/// Device-mapped 24-bit bus with a flat-region fast path.
///
/// # Examples
///
/// ```rust
/// use lib65816::{Address, MemoryBus, MemoryRegion, RamDevice, SystemBus};
///
/// let mut bus = SystemBus::new();
///
/// // Bank 0 as a flat region
/// bus.add_region(MemoryRegion::new(0x00_0000, vec![0; 0x1_0000]).unwrap()).unwrap();
///
/// // Bank 1 served by a device
/// bus.register_device(Box::new(RamDevice::new(0x01_0000, 0x1_0000)));
///
/// bus.store_byte(Address::new(0x00, 0x0002), 0x11);
/// bus.store_byte(Address::new(0x01, 0x0005), 0x22);
///
/// assert_eq!(bus.read_byte(Address::new(0x00, 0x0002)), 0x11);
/// assert_eq!(bus.read_byte(Address::new(0x01, 0x0005)), 0x22);
///
/// // Nobody claims bank 2
/// assert_eq!(bus.read_byte(Address::new(0x02, 0x0000)), 0x00);
/// ```
#[derive(Default)]
pub struct SystemBus {
    regions: Vec<MemoryRegion>,
    devices: Vec<Box<dyn Device>>,
}

impl SystemBus {
    /// Create an empty bus. Every address reads as open bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a flat region to the fast path.
    ///
    /// Fails if the region overlaps a region that is already registered.
    pub fn add_region(&mut self, region: MemoryRegion) -> Result<(), BusError> {
        if let Some(existing) = self.regions.iter().find(|r| r.overlaps(&region)) {
            return Err(BusError::RegionOverlap {
                start: region.start(),
                end: region.end(),
                existing_start: existing.start(),
                existing_end: existing.end(),
            });
        }

        self.regions.push(region);
        Ok(())
    }

    /// Appends a device to the dispatch list.
    ///
    /// Any flat regions the device advertises are moved into the fast path.
    /// A device registered earlier takes priority over one registered later.
    pub fn register_device(&mut self, mut device: Box<dyn Device>) {
        for region in device.memory_regions() {
            let (start, end) = (region.start(), region.end());
            if let Err(err) = self.add_region(region) {
                log::error!("dropping flat region ${:06X}-${:06X}: {}", start, end, err);
            }
        }

        self.devices.push(device);
    }

    /// Number of registered devices.
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Number of flat regions on the fast path.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Writes `bytes` starting at the 24-bit address `start` through normal
    /// dispatch. Writes to ROM or open bus are discarded as usual.
    pub fn load(&mut self, start: u32, bytes: &[u8]) {
        self.store_bytes(Address::from_integer(start), bytes);
    }

    /// Reads `out.len()` consecutive bytes starting at `address`.
    pub fn read_bytes(&mut self, address: Address, out: &mut [u8]) {
        let mut filled = 0;
        while filled < out.len() {
            let at = address.with_offset_no_wrap(filled as i32);
            filled += self.read_chunk(at, &mut out[filled..]);
        }
    }

    /// Writes `bytes` to consecutive addresses starting at `address`.
    pub fn store_bytes(&mut self, address: Address, bytes: &[u8]) {
        let mut written = 0;
        while written < bytes.len() {
            let at = address.with_offset_no_wrap(written as i32);
            written += self.store_chunk(at, &bytes[written..]);
        }
    }

    /// Reads the byte at `address` into `out[0]`, plus as many following bytes
    /// as the handler's direct-access slice covers. Returns the count (at least 1).
    fn read_chunk(&mut self, address: Address, out: &mut [u8]) -> usize {
        let addr = address.as_integer();
        let limit = out.len().min(bytes_to_top(addr));

        if let Some(region) = self.regions.iter().find(|r| r.contains(addr)) {
            let tail = region.tail(addr);
            let count = tail.len().min(limit);
            out[..count].copy_from_slice(&tail[..count]);
            return count;
        }

        for device in self.devices.iter_mut() {
            if let Some(local) = device.decode(address) {
                let (value, direct) = device.read_byte(local);
                out[0] = value;
                return match direct {
                    Some(tail) if tail.len() > 1 && limit > 1 => {
                        let count = tail.len().min(limit);
                        out[1..count].copy_from_slice(&tail[1..count]);
                        count
                    }
                    _ => 1,
                };
            }
        }

        out[0] = 0;
        1
    }

    /// Writes `bytes[0]` at `address`, plus as many following bytes as the
    /// handler's direct-access slice covers. Returns the count (at least 1).
    fn store_chunk(&mut self, address: Address, bytes: &[u8]) -> usize {
        let addr = address.as_integer();
        let limit = bytes.len().min(bytes_to_top(addr));

        if let Some(region) = self.regions.iter_mut().find(|r| r.contains(addr)) {
            let tail = region.tail_mut(addr);
            let count = tail.len().min(limit);
            tail[..count].copy_from_slice(&bytes[..count]);
            return count;
        }

        for device in self.devices.iter_mut() {
            if let Some(local) = device.decode(address) {
                return match device.store_byte(local, bytes[0]) {
                    Some(tail) if tail.len() > 1 && limit > 1 => {
                        let count = tail.len().min(limit);
                        tail[1..count].copy_from_slice(&bytes[1..count]);
                        count
                    }
                    _ => 1,
                };
            }
        }

        1
    }
}

/// Bytes from `addr` to the top of the 24-bit space, inclusive.
fn bytes_to_top(addr: u32) -> usize {
    (ADDRESS_MASK - addr) as usize + 1
}

impl MemoryBus for SystemBus {
    fn read_byte(&mut self, address: Address) -> u8 {
        let mut out = [0u8; 1];
        self.read_chunk(address, &mut out);
        out[0]
    }

    fn store_byte(&mut self, address: Address, value: u8) {
        self.store_chunk(address, &[value]);
    }

    fn peek_byte(&self, address: Address) -> u8 {
        let addr = address.as_integer();

        if let Some(region) = self.regions.iter().find(|r| r.contains(addr)) {
            return region.tail(addr)[0];
        }

        self.devices
            .iter()
            .find_map(|device| device.decode(address).map(|local| device.peek_byte(local)))
            .unwrap_or(0)
    }

    fn read_word(&mut self, address: Address) -> u16 {
        let mut buf = [0u8; 2];
        self.read_bytes(address, &mut buf);
        u16::from_le_bytes(buf)
    }

    fn store_word(&mut self, address: Address, value: u16) {
        self.store_bytes(address, &value.to_le_bytes());
    }

    fn read_long(&mut self, address: Address) -> u32 {
        let mut buf = [0u8; 4];
        self.read_bytes(address, &mut buf);
        u32::from_le_bytes(buf)
    }

    fn store_long(&mut self, address: Address, value: u32) {
        self.store_bytes(address, &value.to_le_bytes());
    }

    fn read_address_at(&mut self, address: Address) -> Address {
        let mut buf = [0u8; 3];
        self.read_bytes(address, &mut buf);
        Address::new(buf[2], u16::from_le_bytes([buf[0], buf[1]]))
    }

    fn irq_active(&self) -> bool {
        self.devices.iter().any(|device| device.irq_active())
    }
}
