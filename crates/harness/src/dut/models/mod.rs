//! Behavioral device models.
//!
//! Software stand-ins for each device family, cycle-compatible with the generated RTL at the
//! port level: same port names, results registered on the rising edge, outputs cleared by
//! reset, and a valid/ready handshake on the divider. They let the harness run without a
//! simulator attached and serve as known-good devices in tests.

/// Correctly rounded arithmetic kernels.
pub mod arith;

/// Adder/subtractor.
pub mod fadd;

/// Comparator.
pub mod fcmp;

/// Divide / square-root unit.
pub mod fdiv;

/// Float-to-float converter.
pub mod fptofp;

/// Integer-to-float converter.
pub mod inttofp;

/// Registered single-cycle shell.
pub mod registered;

pub use self::fadd::AddDatapath;
pub use self::fcmp::CompareDatapath;
pub use self::fdiv::DivSqrtModel;
pub use self::fptofp::ConvertDatapath;
pub use self::inttofp::IntConvertDatapath;
pub use self::registered::{Datapath, RegisteredModel};

use crate::fpu::{OpFamily, Precision};

use super::Dut;

/// Builds the model for a device family.
///
/// # Arguments
///
/// * `family` - Device family to model.
/// * `precision` - Datapath format (for the float-to-float converter, the destination format).
pub fn build(family: OpFamily, precision: Precision) -> Box<dyn Dut> {
    match family {
        OpFamily::Add => Box::new(RegisteredModel::new(AddDatapath::new(precision))),
        OpFamily::Compare => Box::new(RegisteredModel::new(CompareDatapath::new(precision))),
        OpFamily::FpToFp => Box::new(RegisteredModel::new(ConvertDatapath::new(precision))),
        OpFamily::IntToFp => Box::new(RegisteredModel::new(IntConvertDatapath::new(precision))),
        OpFamily::DivSqrt => Box::new(DivSqrtModel::new(precision)),
    }
}
