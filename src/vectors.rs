//! # Interrupt Vector Tables
//!
//! The 65816 fetches interrupt handler addresses from two tables of 16-bit
//! vectors in bank 0, one per processor mode. The tables here hold the
//! *locations* of those vectors; the handler addresses themselves are read from
//! the bus when an interrupt is taken.

/// Bank-0 locations of the six vectors used in one processor mode.
///
/// In emulation mode BRK shares the IRQ vector and `brk` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterruptVectors {
    /// Coprocessor enable (COP)
    pub cop: u16,

    /// Software break (BRK). Unused in emulation mode.
    pub brk: u16,

    /// ABORT pin
    pub abort: u16,

    /// Non-maskable interrupt
    pub nmi: u16,

    /// Reset
    pub reset: u16,

    /// Maskable interrupt request (IRQ). Also BRK in emulation mode.
    pub irq: u16,
}

impl InterruptVectors {
    /// WDC 65C816 native-mode vector locations.
    pub const NATIVE: Self = Self {
        cop: 0xFFE4,
        brk: 0xFFE6,
        abort: 0xFFE8,
        nmi: 0xFFEA,
        reset: 0xFFEC,
        irq: 0xFFEE,
    };

    /// WDC 65C816 emulation-mode vector locations.
    pub const EMULATION: Self = Self {
        cop: 0xFFF4,
        brk: 0xFFF6,
        abort: 0xFFF8,
        nmi: 0xFFFA,
        reset: 0xFFFC,
        irq: 0xFFFE,
    };
}

/// The two vector tables, selected by the emulation flag at interrupt time.
///
/// # Examples
///
/// ```
/// use lib65816::VectorTables;
///
/// let tables = VectorTables::default();
/// assert_eq!(tables.for_mode(true).reset, 0xFFFC);
/// assert_eq!(tables.for_mode(false).irq, 0xFFEE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VectorTables {
    /// Vectors used while the emulation flag is clear
    pub native: InterruptVectors,

    /// Vectors used while the emulation flag is set
    pub emulation: InterruptVectors,
}

impl Default for VectorTables {
    fn default() -> Self {
        Self {
            native: InterruptVectors::NATIVE,
            emulation: InterruptVectors::EMULATION,
        }
    }
}

impl VectorTables {
    /// Returns the table for the given emulation flag.
    pub fn for_mode(&self, emulation: bool) -> &InterruptVectors {
        if emulation {
            &self.emulation
        } else {
            &self.native
        }
    }

    /// Location of the vector a BRK takes in the given mode.
    pub fn brk(&self, emulation: bool) -> u16 {
        if emulation {
            self.emulation.irq
        } else {
            self.native.brk
        }
    }
}
