use crate::dut::ports::{self, PortMap};
use crate::fpu::{Precision, RoundingMode};

use super::arith;
use super::registered::Datapath;

/// Integer-to-float converter datapath.
///
/// `io_long` selects a 64-bit operand (otherwise the low 32 bits of `io_int`), `io_sign`
/// selects two's-complement interpretation.
#[derive(Debug, Clone, Copy)]
pub struct IntConvertDatapath {
    precision: Precision,
}

impl IntConvertDatapath {
    /// Creates a converter producing the given precision.
    pub const fn new(precision: Precision) -> Self {
        Self { precision }
    }
}

/// Widens the raw operand according to the width and signedness controls.
fn operand(raw: u64, long: bool, signed: bool) -> i128 {
    match (long, signed) {
        (false, false) => i128::from(raw as u32),
        (false, true) => i128::from(raw as u32 as i32),
        (true, false) => i128::from(raw),
        (true, true) => i128::from(raw as i64),
    }
}

impl Datapath for IntConvertDatapath {
    const NAME: &'static str = "IntToFP";
    const INPUTS: &'static [&'static str] = &[ports::INT, ports::RM, ports::SIGN, ports::LONG];
    const OUTPUTS: &'static [&'static str] = &[ports::RESULT, ports::FFLAGS];

    fn evaluate(&self, io: &PortMap) -> Vec<(&'static str, u64)> {
        let rm = RoundingMode::from_bits(io.input(ports::RM)).unwrap_or_default();
        let value = operand(
            io.input(ports::INT),
            io.input_bit(ports::LONG),
            io.input_bit(ports::SIGN),
        );
        let (result, flags) = match self.precision {
            Precision::F32 => arith::from_int::<f32>(value, rm),
            Precision::F64 => arith::from_int::<f64>(value, rm),
        };
        vec![(ports::RESULT, result), (ports::FFLAGS, flags.into())]
    }
}
