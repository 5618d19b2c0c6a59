//! Floating-point vocabulary shared by the harness and the device models.
//!
//! The harness never computes floating-point results itself; it only needs to name what it
//! asks a device to do. Definitions are organized into submodules:
//! - [`rounding_modes`]: the five rounding modes and their selector spellings.
//! - [`exception_flags`]: the 5-bit `fflags` encoding.
//! - [`operation`]: device families, operation selectors, and the resolved run configuration.

/// Floating-point exception flag types.
pub mod exception_flags;

/// Operation families and selectors.
pub mod operation;

/// Rounding mode definitions.
pub mod rounding_modes;

use serde::Deserialize;

pub use self::exception_flags::FpFlags;
pub use self::operation::{Arity, Latency, OpFamily, Operation, OperationConfig};
pub use self::rounding_modes::RoundingMode;

/// Floating-point format of the device datapath.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// IEEE 754 binary32; operands occupy the low 32 bits of each field.
    #[default]
    F32,
    /// IEEE 754 binary64.
    F64,
}
