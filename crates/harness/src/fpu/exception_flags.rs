//! Floating-point exception flags.
//!
//! Devices report the five IEEE 754 status flags on a 5-bit `fflags` port using the
//! RISC-V `fcsr.fflags` layout:
//!
//! | Bit | Flag | Description         |
//! |-----|------|---------------------|
//! |  4  | NV   | Invalid Operation   |
//! |  3  | DZ   | Divide by Zero      |
//! |  2  | OF   | Overflow            |
//! |  1  | UF   | Underflow           |
//! |  0  | NX   | Inexact             |
//!
//! The reference stream carries the same encoding as its last hex field.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::common::constants::FFLAGS_MASK;

/// Floating-point exception flags (5-bit `fflags` value).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FpFlags(u8);

impl FpFlags {
    /// No exceptions raised.
    pub const NONE: Self = Self(0);
    /// Invalid Operation.
    pub const NV: Self = Self(1 << 4);
    /// Divide by Zero.
    pub const DZ: Self = Self(1 << 3);
    /// Overflow.
    pub const OF: Self = Self(1 << 2);
    /// Underflow.
    pub const UF: Self = Self(1 << 1);
    /// Inexact.
    pub const NX: Self = Self(1 << 0);

    const NAMES: [(Self, &'static str); 5] = [
        (Self::NV, "NV"),
        (Self::DZ, "DZ"),
        (Self::OF, "OF"),
        (Self::UF, "UF"),
        (Self::NX, "NX"),
    ];

    /// Converts a raw flag value, rejecting anything outside the five defined bits.
    pub const fn from_bits(bits: u64) -> Option<Self> {
        if bits & !FFLAGS_MASK == 0 {
            Some(Self(bits as u8))
        } else {
            None
        }
    }

    /// Returns the raw 5-bit flag value.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if no flags are set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every flag in `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl BitOr for FpFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for FpFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<FpFlags> for u64 {
    fn from(flags: FpFlags) -> Self {
        Self::from(flags.0)
    }
}

impl fmt::Display for FpFlags {
    /// Formats as `NV|NX`, or `-` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
