//! Floating-point rounding modes.
//!
//! The five IEEE 754 rounding policies, with the 3-bit encoding driven onto a device's
//! `rm` port (RISC-V `frm` layout) and the selector spelling used on the command line:
//!
//! | Value | Mode | Selector        | Description                             |
//! |-------|------|-----------------|-----------------------------------------|
//! | 0b000 | RNE  | `-rnear_even`   | Round to Nearest, ties to Even          |
//! | 0b001 | RTZ  | `-rminMag`      | Round towards Zero                      |
//! | 0b010 | RDN  | `-rmin`         | Round Down (towards −∞)                 |
//! | 0b011 | RUP  | `-rmax`         | Round Up (towards +∞)                   |
//! | 0b100 | RMM  | `-rnear_maxMag` | Round to Nearest, ties to Max Magnitude |

use std::fmt;

use crate::common::{HarnessError, Result};

/// Rounding mode encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RoundingMode {
    /// Round to Nearest, ties to Even (default IEEE mode).
    #[default]
    Rne = 0b000,
    /// Round towards Zero.
    Rtz = 0b001,
    /// Round Down (towards −∞).
    Rdn = 0b010,
    /// Round Up (towards +∞).
    Rup = 0b011,
    /// Round to Nearest, ties to Max Magnitude.
    Rmm = 0b100,
}

impl RoundingMode {
    /// Selector spellings accepted on the command line, in encoding order.
    pub const SELECTORS: [(&'static str, Self); 5] = [
        ("-rnear_even", Self::Rne),
        ("-rminMag", Self::Rtz),
        ("-rmin", Self::Rdn),
        ("-rmax", Self::Rup),
        ("-rnear_maxMag", Self::Rmm),
    ];

    /// Resolves a command-line selector such as `-rnear_even`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Usage`] for anything not in [`Self::SELECTORS`].
    pub fn from_selector(selector: &str) -> Result<Self> {
        Self::SELECTORS
            .iter()
            .find(|(name, _)| *name == selector)
            .map(|&(_, rm)| rm)
            .ok_or_else(|| HarnessError::Usage(format!("unknown rounding mode: {selector}")))
    }

    /// Returns the command-line selector for this mode.
    pub const fn selector(self) -> &'static str {
        Self::SELECTORS[self as usize].0
    }

    /// Decodes a 3-bit `rm` port value.
    ///
    /// Returns `None` for reserved encodings (0b101, 0b110) and the dynamic sentinel (0b111).
    pub const fn from_bits(bits: u64) -> Option<Self> {
        match bits & 0x7 {
            0b000 => Some(Self::Rne),
            0b001 => Some(Self::Rtz),
            0b010 => Some(Self::Rdn),
            0b011 => Some(Self::Rup),
            0b100 => Some(Self::Rmm),
            _ => None,
        }
    }

    /// Value driven onto the device's `rm` port.
    pub const fn bits(self) -> u64 {
        self as u64
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}
