//! Port names and port storage.
//!
//! Names follow the flattened `io_*` convention of Chisel-generated designs as exposed by
//! Verilator, so an adapter around a generated model can forward them unchanged.

use std::collections::BTreeMap;

use crate::common::{HarnessError, Result};

/// Clock input.
pub const CLOCK: &str = "clock";
/// Synchronous reset input, active high.
pub const RESET: &str = "reset";

/// First operand.
pub const A: &str = "io_a";
/// Second operand.
pub const B: &str = "io_b";
/// Single operand of the float-to-float converter.
pub const IN: &str = "io_in";
/// Integer operand of the integer-to-float converter.
pub const INT: &str = "io_int";
/// Rounding mode.
pub const RM: &str = "io_rm";

/// Adder: subtract instead of add.
pub const DO_SUB: &str = "io_do_sub";
/// Comparator: raise invalid on quiet NaN operands too.
pub const SIGNALING: &str = "io_signaling";
/// Integer converter: operand is signed.
pub const SIGN: &str = "io_sign";
/// Integer converter: operand is 64 bits wide.
pub const LONG: &str = "io_long";

/// Divider: compute √a instead of a / b.
pub const IS_SQRT: &str = "io_specialIO_isSqrt";
/// Divider handshake: operands are valid.
pub const IN_VALID: &str = "io_specialIO_in_valid";
/// Divider handshake: the unit can accept operands.
pub const IN_READY: &str = "io_specialIO_in_ready";
/// Divider handshake: the consumer can accept a result.
pub const OUT_READY: &str = "io_specialIO_out_ready";
/// Divider handshake: result and flags are valid.
pub const OUT_VALID: &str = "io_specialIO_out_valid";

/// Result bits.
pub const RESULT: &str = "io_result";
/// Exception flags.
pub const FFLAGS: &str = "io_fflags";
/// Comparator: a == b.
pub const EQ: &str = "io_eq";
/// Comparator: a <= b.
pub const LE: &str = "io_le";
/// Comparator: a < b.
pub const LT: &str = "io_lt";

/// Register file backing a model's ports.
///
/// Every device implicitly has `clock` and `reset` inputs. Inputs are written by the harness,
/// outputs are driven by the model; reading an unwritten port yields 0.
#[derive(Debug, Clone)]
pub struct PortMap {
    device: &'static str,
    inputs: BTreeMap<&'static str, u64>,
    outputs: BTreeMap<&'static str, u64>,
}

impl PortMap {
    /// Creates a port map with the given input and output names, all zero.
    pub fn new(device: &'static str, inputs: &[&'static str], outputs: &[&'static str]) -> Self {
        let inputs = [CLOCK, RESET]
            .iter()
            .chain(inputs)
            .map(|&name| (name, 0))
            .collect();
        let outputs = outputs.iter().map(|&name| (name, 0)).collect();
        Self {
            device,
            inputs,
            outputs,
        }
    }

    /// Writes an input port.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::UnknownPort`] if `port` is not an input.
    pub fn set(&mut self, port: &str, value: u64) -> Result<()> {
        match self.inputs.get_mut(port) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(self.unknown(port)),
        }
    }

    /// Reads an input or output port.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::UnknownPort`] if `port` is neither.
    pub fn get(&self, port: &str) -> Result<u64> {
        self.inputs
            .get(port)
            .or_else(|| self.outputs.get(port))
            .copied()
            .ok_or_else(|| self.unknown(port))
    }

    /// Current value of an input, for the model's own use.
    pub fn input(&self, port: &str) -> u64 {
        self.inputs.get(port).copied().unwrap_or(0)
    }

    /// Current value of a 1-bit input.
    pub fn input_bit(&self, port: &str) -> bool {
        self.input(port) & 1 == 1
    }

    /// Drives an output. Names the model never declared are ignored.
    pub fn drive(&mut self, port: &str, value: u64) {
        if let Some(slot) = self.outputs.get_mut(port) {
            *slot = value;
        }
    }

    /// Zeroes every output, as a synchronous reset does.
    pub fn clear_outputs(&mut self) {
        self.outputs.values_mut().for_each(|value| *value = 0);
    }

    fn unknown(&self, port: &str) -> HarnessError {
        HarnessError::UnknownPort {
            device: self.device.to_string(),
            port: port.to_string(),
        }
    }
}

/// Rising-edge detector on the `clock` input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockEdge {
    last: bool,
}

impl ClockEdge {
    /// Samples the clock; returns true on a 0 → 1 transition.
    pub fn rising(&mut self, ports: &PortMap) -> bool {
        let now = ports.input_bit(CLOCK);
        let rising = now && !self.last;
        self.last = now;
        rising
    }
}
