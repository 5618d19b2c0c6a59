//! Device-under-test abstraction.
//!
//! This module defines the `Dut` trait implemented by every design the harness can drive. It provides:
//! 1. **Identification:** `name` for diagnostics.
//! 2. **Ports:** Named `set`/`get` accessors over plain fixed-width registers.
//! 3. **Evaluation:** `eval`, which settles the design for the current input values.
//!
//! Clocking is not part of the trait: the harness toggles the `clock` input and calls `eval`
//! after each transition, exactly as a Verilator testbench does with a generated model.
//! Adapters exist per device family; the built-in behavioral models live in [`models`].

/// Behavioral software models of each device family.
pub mod models;

/// Port names and the port register file used by the models.
pub mod ports;

use crate::common::Result;

/// A synchronous design under test.
///
/// Inputs written with `set` hold their value until written again. Outputs read with `get`
/// reflect the state after the most recent `eval`.
pub trait Dut {
    /// Returns a short name for this device (e.g. `"FADD"`).
    fn name(&self) -> &str;

    /// Drives an input port.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::UnknownPort`](crate::common::HarnessError::UnknownPort) if the
    /// device has no input with this name.
    fn set(&mut self, port: &str, value: u64) -> Result<()>;

    /// Samples an input or output port.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::UnknownPort`](crate::common::HarnessError::UnknownPort) if the
    /// device has no port with this name.
    fn get(&self, port: &str) -> Result<u64>;

    /// Evaluates the design with the current inputs.
    fn eval(&mut self);
}

impl<D: Dut + ?Sized> Dut for Box<D> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn set(&mut self, port: &str, value: u64) -> Result<()> {
        (**self).set(port, value)
    }

    fn get(&self, port: &str) -> Result<u64> {
        (**self).get(port)
    }

    fn eval(&mut self) {
        (**self).eval();
    }
}
