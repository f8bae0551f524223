//! # 24-bit Addresses
//!
//! The 65816 drives a 24-bit address bus. Every address is a bank byte (the
//! high 8 bits) plus a 16-bit offset inside that bank.
//!
//! Two kinds of arithmetic exist on real hardware and both are needed here:
//!
//! - **Wrapping** arithmetic keeps the bank and lets the offset roll over
//!   modulo 65536. Program counter increments, branches and direct page
//!   accesses behave this way.
//! - **Non-wrapping** arithmetic treats the address as one 24-bit integer, so an
//!   offset overflow carries into the bank. Indexed data accesses behave this way.

use std::cmp::Ordering;
use std::fmt;

/// Mask of the valid bits of a 24-bit address.
pub const ADDRESS_MASK: u32 = 0x00FF_FFFF;

/// A bank + offset pair naming one byte of the 16 MiB address space.
///
/// Equality and ordering are defined by the 24-bit integer value, so
/// `Address::new(0x01, 0x0000) > Address::new(0x00, 0xFFFF)`.
///
/// # Examples
///
/// ```
/// use lib65816::Address;
///
/// let addr = Address::new(0x7E, 0x2000);
/// assert_eq!(addr.as_integer(), 0x7E2000);
///
/// // Wrap-around arithmetic stays in the bank
/// assert_eq!(Address::new(0x00, 0xFFFF).with_offset_wrap(1), Address::new(0x00, 0x0000));
///
/// // No-wrap arithmetic carries into the next bank
/// assert_eq!(Address::new(0x00, 0xFFFF).with_offset_no_wrap(1), Address::new(0x01, 0x0000));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    /// Bank byte (bits 16-23)
    pub bank: u8,

    /// Offset inside the bank (bits 0-15)
    pub offset: u16,
}

impl Address {
    /// Creates an address from a bank and an offset.
    pub const fn new(bank: u8, offset: u16) -> Self {
        Self { bank, offset }
    }

    /// Creates an address from a raw integer. Bits above 23 are discarded.
    pub const fn from_integer(value: u32) -> Self {
        let value = value & ADDRESS_MASK;
        Self {
            bank: (value >> 16) as u8,
            offset: value as u16,
        }
    }

    /// Returns the 24-bit integer value `bank << 16 | offset`.
    pub const fn as_integer(&self) -> u32 {
        ((self.bank as u32) << 16) | self.offset as u32
    }

    /// Default offset arithmetic. Currently the same as [`Address::with_offset_wrap`].
    pub fn with_offset(&self, delta: i32) -> Self {
        self.with_offset_wrap(delta)
    }

    /// Adds `delta` to the offset modulo 65536, leaving the bank untouched.
    pub fn with_offset_wrap(&self, delta: i32) -> Self {
        Self {
            bank: self.bank,
            offset: self.offset.wrapping_add(delta as u16),
        }
    }

    /// Adds `delta` to the full 24-bit value, carrying into (or borrowing from)
    /// the bank. The result wraps modulo 2^24.
    pub fn with_offset_no_wrap(&self, delta: i32) -> Self {
        Self::from_integer(self.as_integer().wrapping_add(delta as u32))
    }

    /// Returns true if `start <= self <= end` (both bounds inclusive).
    pub fn in_range(&self, start: Address, end: Address) -> bool {
        start <= *self && *self <= end
    }

    /// Returns true if two 16-bit offsets lie on different 256-byte pages.
    ///
    /// Used to decide the page-crossing cycle penalties of indexed addressing
    /// and taken branches.
    pub fn offsets_are_on_different_pages(a: u16, b: u16) -> bool {
        (a >> 8) != (b >> 8)
    }
}

impl From<u32> for Address {
    fn from(value: u32) -> Self {
        Self::from_integer(value)
    }
}

impl From<Address> for u32 {
    fn from(address: Address) -> Self {
        address.as_integer()
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_integer().cmp(&other.as_integer())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02X}:{:04X}", self.bank, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_round_trip() {
        let addr = Address::from_integer(0x12_3456);
        assert_eq!(addr.bank, 0x12);
        assert_eq!(addr.offset, 0x3456);
        assert_eq!(addr.as_integer(), 0x12_3456);
    }

    #[test]
    fn test_from_integer_discards_high_bits() {
        let addr = Address::from_integer(0xAB12_3456);
        assert_eq!(addr.as_integer(), 0x12_3456);
    }

    #[test]
    fn test_wrap_stays_in_bank() {
        let addr = Address::new(0x05, 0xFFFE);
        assert_eq!(addr.with_offset_wrap(3), Address::new(0x05, 0x0001));
        assert_eq!(addr.with_offset(3), Address::new(0x05, 0x0001));

        let addr = Address::new(0x05, 0x0001);
        assert_eq!(addr.with_offset_wrap(-2), Address::new(0x05, 0xFFFF));
    }

    #[test]
    fn test_no_wrap_carries_into_bank() {
        let addr = Address::new(0x05, 0xFFFE);
        assert_eq!(addr.with_offset_no_wrap(3), Address::new(0x06, 0x0001));

        let addr = Address::new(0x05, 0x0001);
        assert_eq!(addr.with_offset_no_wrap(-2), Address::new(0x04, 0xFFFF));

        // Top of the address space wraps to the bottom
        let addr = Address::new(0xFF, 0xFFFF);
        assert_eq!(addr.with_offset_no_wrap(1), Address::new(0x00, 0x0000));
    }

    #[test]
    fn test_ordering_by_integer_value() {
        assert!(Address::new(0x01, 0x0000) > Address::new(0x00, 0xFFFF));
        assert!(Address::new(0x00, 0x1000) < Address::new(0x00, 0x1001));
        assert_eq!(Address::new(0x7E, 0x0000), Address::from_integer(0x7E_0000));
    }

    #[test]
    fn test_in_range_inclusive() {
        let start = Address::new(0x00, 0x2000);
        let end = Address::new(0x00, 0x20FF);

        assert!(Address::new(0x00, 0x2000).in_range(start, end));
        assert!(Address::new(0x00, 0x20FF).in_range(start, end));
        assert!(!Address::new(0x00, 0x2100).in_range(start, end));
        assert!(!Address::new(0x01, 0x2000).in_range(start, end));
    }

    #[test]
    fn test_page_predicate() {
        assert!(!Address::offsets_are_on_different_pages(0x1200, 0x12FF));
        assert!(Address::offsets_are_on_different_pages(0x12FF, 0x1300));
        assert!(Address::offsets_are_on_different_pages(0xFFFF, 0x0000));
    }

    #[test]
    fn test_display() {
        assert_eq!(Address::new(0x00, 0x1000).to_string(), "00:1000");
        assert_eq!(Address::new(0x7E, 0xABCD).to_string(), "7E:ABCD");
    }
}
