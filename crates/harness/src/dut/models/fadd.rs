use crate::dut::ports::{self, PortMap};
use crate::fpu::{Precision, RoundingMode};

use super::arith::{self, Ieee};
use super::registered::Datapath;

/// Adder/subtractor datapath (`io_a ± io_b`).
#[derive(Debug, Clone, Copy)]
pub struct AddDatapath {
    precision: Precision,
}

impl AddDatapath {
    /// Creates an adder of the given precision.
    pub const fn new(precision: Precision) -> Self {
        Self { precision }
    }
}

fn add_sub<F: Ieee>(io: &PortMap, rm: RoundingMode) -> (u64, u64) {
    let a = F::from_port(io.input(ports::A));
    let b = F::from_port(io.input(ports::B));
    let (result, flags) = arith::add(a, b, io.input_bit(ports::DO_SUB), rm);
    (result, flags.into())
}

impl Datapath for AddDatapath {
    const NAME: &'static str = "FADD";
    const INPUTS: &'static [&'static str] = &[ports::A, ports::B, ports::RM, ports::DO_SUB];
    const OUTPUTS: &'static [&'static str] = &[ports::RESULT, ports::FFLAGS];

    fn evaluate(&self, io: &PortMap) -> Vec<(&'static str, u64)> {
        let rm = RoundingMode::from_bits(io.input(ports::RM)).unwrap_or_default();
        let (result, flags) = match self.precision {
            Precision::F32 => add_sub::<f32>(io, rm),
            Precision::F64 => add_sub::<f64>(io, rm),
        };
        vec![(ports::RESULT, result), (ports::FFLAGS, flags)]
    }
}
