//! Family-specific port bindings.
//!
//! Three moments per run touch family-specific ports:
//! 1. **Configure:** Static control inputs, written once after reset.
//! 2. **Apply:** Operands (and any per-vector control), written before each vector.
//! 3. **Capture:** Result and flags, sampled after the device answers.

use crate::common::Result;
use crate::dut::{Dut, ports};
use crate::fpu::{OpFamily, Operation, OperationConfig};

use super::super::vector::TestVector;

/// Writes the inputs that stay constant for the whole run.
///
/// # Errors
///
/// Returns an unknown-port error if the device lacks one of the family's control inputs.
pub fn configure(dut: &mut dyn Dut, op: &OperationConfig) -> Result<()> {
    let rm = op.rounding_mode.bits();
    match op.family() {
        OpFamily::Add => {
            dut.set(ports::RM, rm)?;
            dut.set(ports::DO_SUB, op.op.selector_index())?;
        }
        OpFamily::FpToFp => dut.set(ports::RM, rm)?,
        OpFamily::IntToFp => {
            let index = op.op.selector_index();
            dut.set(ports::RM, rm)?;
            dut.set(ports::SIGN, index & 1)?;
            dut.set(ports::LONG, (index & 2) >> 1)?;
        }
        OpFamily::Compare | OpFamily::DivSqrt => {}
    }
    Ok(())
}

/// Writes one vector's operands.
///
/// # Errors
///
/// Returns an unknown-port error if the device lacks an operand input.
pub fn apply(dut: &mut dyn Dut, vector: &TestVector, op: &OperationConfig) -> Result<()> {
    let b = vector.b.unwrap_or(0);
    match op.family() {
        OpFamily::Add => {
            dut.set(ports::A, vector.a)?;
            dut.set(ports::B, b)?;
        }
        OpFamily::Compare => {
            dut.set(ports::A, vector.a)?;
            dut.set(ports::B, b)?;
            dut.set(ports::SIGNALING, u64::from(op.op != Operation::Eq))?;
        }
        OpFamily::FpToFp => dut.set(ports::IN, vector.a)?,
        OpFamily::IntToFp => dut.set(ports::INT, vector.a)?,
        OpFamily::DivSqrt => {
            dut.set(ports::A, vector.a)?;
            dut.set(ports::B, b)?;
            dut.set(ports::IS_SQRT, u64::from(op.op == Operation::Sqrt))?;
            dut.set(ports::RM, op.rounding_mode.bits())?;
        }
    }
    Ok(())
}

/// Samples the result and flags.
///
/// The comparator exposes one output per predicate; the configured one is the result.
///
/// # Errors
///
/// Returns an unknown-port error if the device lacks a result output.
pub fn capture(dut: &dyn Dut, op: &OperationConfig) -> Result<(u64, u64)> {
    let result_port = match op.op {
        Operation::Eq => ports::EQ,
        Operation::Le => ports::LE,
        Operation::Lt => ports::LT,
        _ => ports::RESULT,
    };
    Ok((dut.get(result_port)?, dut.get(ports::FFLAGS)?))
}
