use crate::dut::ports::{self, PortMap};
use crate::fpu::{Precision, RoundingMode};

use super::arith;
use super::registered::Datapath;

/// Float-to-float converter datapath.
///
/// The precision names the destination format: `F32` narrows a double operand, `F64`
/// widens a single operand taken from the low 32 bits of `io_in`.
#[derive(Debug, Clone, Copy)]
pub struct ConvertDatapath {
    precision: Precision,
}

impl ConvertDatapath {
    /// Creates a converter producing the given precision.
    pub const fn new(precision: Precision) -> Self {
        Self { precision }
    }
}

impl Datapath for ConvertDatapath {
    const NAME: &'static str = "FPToFP";
    const INPUTS: &'static [&'static str] = &[ports::IN, ports::RM];
    const OUTPUTS: &'static [&'static str] = &[ports::RESULT, ports::FFLAGS];

    fn evaluate(&self, io: &PortMap) -> Vec<(&'static str, u64)> {
        let rm = RoundingMode::from_bits(io.input(ports::RM)).unwrap_or_default();
        let operand = io.input(ports::IN);
        let (result, flags) = match self.precision {
            Precision::F32 => arith::narrow(f64::from_bits(operand), rm),
            Precision::F64 => arith::widen(f32::from_bits(operand as u32)),
        };
        vec![(ports::RESULT, result), (ports::FFLAGS, flags.into())]
    }
}
