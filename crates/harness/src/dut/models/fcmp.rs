use crate::dut::ports::{self, PortMap};
use crate::fpu::Precision;

use super::arith::{self, Comparison, Ieee};
use super::registered::Datapath;

/// Comparator datapath: drives all three predicates at once.
///
/// `io_signaling` selects whether quiet NaN operands raise invalid (`le`/`lt`) or only
/// signaling ones do (`eq`).
#[derive(Debug, Clone, Copy)]
pub struct CompareDatapath {
    precision: Precision,
}

impl CompareDatapath {
    /// Creates a comparator of the given precision.
    pub const fn new(precision: Precision) -> Self {
        Self { precision }
    }
}

fn compare<F: Ieee>(io: &PortMap) -> Comparison {
    arith::compare(
        F::from_port(io.input(ports::A)),
        F::from_port(io.input(ports::B)),
        io.input_bit(ports::SIGNALING),
    )
}

impl Datapath for CompareDatapath {
    const NAME: &'static str = "FCMP";
    const INPUTS: &'static [&'static str] = &[ports::A, ports::B, ports::SIGNALING];
    const OUTPUTS: &'static [&'static str] = &[ports::EQ, ports::LE, ports::LT, ports::FFLAGS];

    fn evaluate(&self, io: &PortMap) -> Vec<(&'static str, u64)> {
        let outcome = match self.precision {
            Precision::F32 => compare::<f32>(io),
            Precision::F64 => compare::<f64>(io),
        };
        vec![
            (ports::EQ, u64::from(outcome.eq)),
            (ports::LE, u64::from(outcome.le)),
            (ports::LT, u64::from(outcome.lt)),
            (ports::FFLAGS, outcome.flags.into()),
        ]
    }
}
