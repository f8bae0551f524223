//! # Processor Status Register
//!
//! The 65816 status register `P` is kept as a record of named booleans. The
//! packed 8-bit form only exists at the edges: PHP/PLP, interrupt entry/RTI
//! and REP/SEP.
//!
//! ## Bit layout
//!
//! ```text
//! bit   7 6 5 4 3 2 1 0
//! native  N V M X D I Z C
//! emul.   N V 1 B D I Z C
//! ```
//!
//! In native mode bit 5 (M) selects the accumulator width and bit 4 (X) the
//! index width. In emulation mode those widths are fixed at 8 bits, bit 5 reads
//! back as 1 and bit 4 is the break flag, which is only ever observed in the
//! copy of `P` pushed on the stack.

/// Bit positions of the packed status byte.
pub mod bits {
    /// Carry
    pub const C: u8 = 0x01;
    /// Zero
    pub const Z: u8 = 0x02;
    /// IRQ disable
    pub const I: u8 = 0x04;
    /// Decimal mode
    pub const D: u8 = 0x08;
    /// Index width (native) / break (emulation)
    pub const X: u8 = 0x10;
    /// Accumulator width (native) / always one (emulation)
    pub const M: u8 = 0x20;
    /// Overflow
    pub const V: u8 = 0x40;
    /// Negative (sign)
    pub const N: u8 = 0x80;
}

/// Bits that are not addressable by REP/SEP while in emulation mode.
const EMULATION_LOCKED_BITS: u8 = bits::X | bits::M;

/// The processor status as a record of flags.
///
/// `accumulator_width` and `index_width` follow the hardware polarity: `true`
/// means 8 bits. Use [`StatusFlags::accumulator_is_8bit`] and
/// [`StatusFlags::index_is_8bit`] to get the *effective* width, which also
/// accounts for emulation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusFlags {
    /// Carry (C)
    pub carry: bool,

    /// Zero (Z)
    pub zero: bool,

    /// IRQ disable (I)
    pub irq_disable: bool,

    /// Decimal arithmetic (D)
    pub decimal: bool,

    /// Break (B), emulation mode only
    pub break_flag: bool,

    /// Accumulator/memory width (M), `true` = 8-bit
    pub accumulator_width: bool,

    /// Index register width (X), `true` = 8-bit
    pub index_width: bool,

    /// Emulation mode (E), exchanged with carry by XCE
    pub emulation: bool,

    /// Overflow (V)
    pub overflow: bool,

    /// Sign / negative (N)
    pub sign: bool,
}

impl Default for StatusFlags {
    /// Power-on state: emulation mode, 8-bit registers, IRQs disabled.
    fn default() -> Self {
        Self {
            carry: false,
            zero: false,
            irq_disable: true,
            decimal: false,
            break_flag: false,
            accumulator_width: true,
            index_width: true,
            emulation: true,
            overflow: false,
            sign: false,
        }
    }
}

impl StatusFlags {
    /// Returns true if the accumulator and memory operands are 8 bits wide.
    ///
    /// Always true in emulation mode regardless of the stored M flag.
    pub fn accumulator_is_8bit(&self) -> bool {
        self.emulation || self.accumulator_width
    }

    /// Returns true if the index registers are 8 bits wide.
    ///
    /// Always true in emulation mode regardless of the stored X flag.
    pub fn index_is_8bit(&self) -> bool {
        self.emulation || self.index_width
    }

    /// Packs the flags into the 8-bit hardware encoding.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib65816::StatusFlags;
    ///
    /// let mut flags = StatusFlags::default();
    /// flags.emulation = false;
    /// flags.accumulator_width = false;
    /// flags.carry = true;
    ///
    /// // M clear, X set, I set, C set
    /// assert_eq!(flags.register_value(), 0b0001_0101);
    /// ```
    pub fn register_value(&self) -> u8 {
        let mut value = 0u8;

        if self.carry {
            value |= bits::C;
        }
        if self.zero {
            value |= bits::Z;
        }
        if self.irq_disable {
            value |= bits::I;
        }
        if self.decimal {
            value |= bits::D;
        }
        if self.overflow {
            value |= bits::V;
        }
        if self.sign {
            value |= bits::N;
        }

        if self.emulation {
            // Bit 5 is unused and reads as one
            value |= bits::M;
            if self.break_flag {
                value |= bits::X;
            }
        } else {
            if self.accumulator_width {
                value |= bits::M;
            }
            if self.index_width {
                value |= bits::X;
            }
        }

        value
    }

    /// Unpacks an 8-bit hardware encoding into the flags.
    ///
    /// The emulation flag is not part of `P` and is left unchanged. In
    /// emulation mode bit 4 loads the break flag and bit 5 is ignored.
    pub fn set_register_value(&mut self, value: u8) {
        self.carry = value & bits::C != 0;
        self.zero = value & bits::Z != 0;
        self.irq_disable = value & bits::I != 0;
        self.decimal = value & bits::D != 0;
        self.overflow = value & bits::V != 0;
        self.sign = value & bits::N != 0;

        if self.emulation {
            self.break_flag = value & bits::X != 0;
        } else {
            self.accumulator_width = value & bits::M != 0;
            self.index_width = value & bits::X != 0;
        }
    }

    /// Loads `P` as pulled from the stack by PLP or RTI.
    ///
    /// In emulation mode B only exists in pushed copies of `P`, so bit 4 of
    /// the pulled value is ignored and the live break flag is left alone.
    pub fn pull_register_value(&mut self, value: u8) {
        let break_flag = self.break_flag;
        self.set_register_value(value);
        if self.emulation {
            self.break_flag = break_flag;
        }
    }

    /// Sets every flag whose bit is set in `value` (SEP).
    ///
    /// In emulation mode bits 4 and 5 are masked off first: the width flags
    /// cannot be reached from emulation mode.
    pub fn set_bits(&mut self, value: u8) {
        let value = self.addressable_bits(value);
        self.apply_bits(value, true);
    }

    /// Clears every flag whose bit is set in `value` (REP).
    ///
    /// In emulation mode bits 4 and 5 are masked off first, so REP can never
    /// widen the registers there.
    pub fn reset_bits(&mut self, value: u8) {
        let value = self.addressable_bits(value);
        self.apply_bits(value, false);
    }

    /// Sets N from bit 7 and Z from `value == 0`.
    pub fn update_sign_and_zero_from_8bit(&mut self, value: u8) {
        self.sign = value & 0x80 != 0;
        self.zero = value == 0;
    }

    /// Sets N from bit 15 and Z from `value == 0`.
    pub fn update_sign_and_zero_from_16bit(&mut self, value: u16) {
        self.sign = value & 0x8000 != 0;
        self.zero = value == 0;
    }

    /// Sets N and Z from `value`, using 8 or 16 bits of it.
    pub fn update_sign_and_zero(&mut self, value: u16, is_8bit: bool) {
        if is_8bit {
            self.update_sign_and_zero_from_8bit(value as u8);
        } else {
            self.update_sign_and_zero_from_16bit(value);
        }
    }

    fn addressable_bits(&self, value: u8) -> u8 {
        if self.emulation {
            value & !EMULATION_LOCKED_BITS
        } else {
            value
        }
    }

    fn apply_bits(&mut self, value: u8, state: bool) {
        if value & bits::C != 0 {
            self.carry = state;
        }
        if value & bits::Z != 0 {
            self.zero = state;
        }
        if value & bits::I != 0 {
            self.irq_disable = state;
        }
        if value & bits::D != 0 {
            self.decimal = state;
        }
        if value & bits::X != 0 {
            self.index_width = state;
        }
        if value & bits::M != 0 {
            self.accumulator_width = state;
        }
        if value & bits::V != 0 {
            self.overflow = state;
        }
        if value & bits::N != 0 {
            self.sign = state;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn native() -> StatusFlags {
        StatusFlags {
            emulation: false,
            ..StatusFlags::default()
        }
    }

    #[test]
    fn test_power_on_state() {
        let flags = StatusFlags::default();
        assert!(flags.emulation);
        assert!(flags.irq_disable);
        assert!(flags.accumulator_is_8bit());
        assert!(flags.index_is_8bit());
        // 00100100: bit 5 always set, I set
        assert_eq!(flags.register_value(), 0x24);
    }

    #[test]
    fn test_native_encoding_uses_width_bits() {
        let mut flags = native();
        flags.accumulator_width = false;
        flags.index_width = false;
        flags.irq_disable = false;
        assert_eq!(flags.register_value(), 0x00);

        flags.set_register_value(0xFF);
        assert!(flags.carry && flags.zero && flags.irq_disable && flags.decimal);
        assert!(flags.index_width && flags.accumulator_width);
        assert!(flags.overflow && flags.sign);
        assert!(!flags.break_flag);
    }

    #[test]
    fn test_emulation_encoding_uses_break_bit() {
        let mut flags = StatusFlags::default();
        flags.irq_disable = false;
        flags.break_flag = true;
        assert_eq!(flags.register_value(), 0x30);

        // Bit 4 loads the break flag, widths are untouched
        flags.set_register_value(0x00);
        assert!(!flags.break_flag);
        assert!(flags.accumulator_width);
        assert!(flags.index_width);
    }

    #[test]
    fn test_pulled_break_bit_ignored_in_emulation() {
        let mut flags = StatusFlags::default();
        flags.pull_register_value(0b0011_0001);

        assert!(!flags.break_flag);
        assert!(flags.carry);
        assert!(!flags.irq_disable);
        assert_eq!(flags.register_value(), 0b0010_0001);

        // Native pulls still load X from bit 4
        flags.emulation = false;
        flags.pull_register_value(0b0001_0000);
        assert!(flags.index_width);
        assert!(!flags.accumulator_width);
    }

    #[test]
    fn test_emulation_forces_8bit_widths() {
        let mut flags = StatusFlags::default();
        flags.accumulator_width = false;
        flags.index_width = false;
        assert!(flags.accumulator_is_8bit());
        assert!(flags.index_is_8bit());
    }

    #[test]
    fn test_rep_sep_native() {
        let mut flags = native();
        flags.reset_bits(0x30);
        assert!(!flags.accumulator_width);
        assert!(!flags.index_width);
        assert!(flags.irq_disable);

        flags.set_bits(0x21);
        assert!(flags.accumulator_width);
        assert!(!flags.index_width);
        assert!(flags.carry);
    }

    #[test]
    fn test_sep_masks_width_bits_in_emulation() {
        let mut flags = StatusFlags::default();
        flags.set_bits(0x10);
        assert!(!flags.break_flag);

        flags.reset_bits(0x31);
        assert!(flags.accumulator_width);
        assert!(flags.index_width);
    }

    #[test]
    fn test_sign_and_zero_updates() {
        let mut flags = native();
        flags.update_sign_and_zero_from_8bit(0x80);
        assert!(flags.sign);
        assert!(!flags.zero);

        flags.update_sign_and_zero_from_16bit(0x0080);
        assert!(!flags.sign);
        assert!(!flags.zero);

        flags.update_sign_and_zero(0xFF00, true);
        assert!(flags.zero);
        assert!(!flags.sign);
    }
}
