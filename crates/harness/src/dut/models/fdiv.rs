//! Iterative divide / square-root unit with a valid/ready handshake.
//!
//! The unit accepts operands on a rising edge where `in_valid` is high and it is idle, spends
//! a data-dependent number of cycles busy, then raises `out_valid` with the result and flags.
//! A result is consumed on an edge where `out_ready` is high; the same edge may accept the
//! next operands.

use crate::common::Result;
use crate::dut::Dut;
use crate::dut::ports::{self, ClockEdge, PortMap};
use crate::fpu::{Precision, RoundingMode};

use super::arith::{self, Ieee};

/// Cycle costs of the iterative datapath.
mod timing {
    /// Busy cycles when an operand is NaN, infinite, or zero (no iteration needed).
    pub const SPECIAL: u32 = 2;
    /// Digit-recurrence iterations for a single-precision quotient.
    pub const ITERATIONS_F32: u32 = 13;
    /// Digit-recurrence iterations for a double-precision quotient.
    pub const ITERATIONS_F64: u32 = 27;
    /// Extra cycle for the square-root final correction step.
    pub const SQRT_EXTRA: u32 = 1;
    /// Pre-normalization cycle per subnormal operand.
    pub const SUBNORMAL: u32 = 1;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum UnitState {
    Idle,
    Busy { remaining: u32 },
    Done,
}

/// Behavioral model of the `FDIV` unit.
#[derive(Debug, Clone)]
pub struct DivSqrtModel {
    precision: Precision,
    ports: PortMap,
    edge: ClockEdge,
    state: UnitState,
    pending: (u64, u64),
}

impl DivSqrtModel {
    /// Device name reported through [`Dut::name`].
    pub const NAME: &'static str = "FDIV";

    /// Creates an idle unit of the given precision.
    pub fn new(precision: Precision) -> Self {
        Self {
            precision,
            ports: PortMap::new(
                Self::NAME,
                &[
                    ports::A,
                    ports::B,
                    ports::RM,
                    ports::IS_SQRT,
                    ports::IN_VALID,
                    ports::OUT_READY,
                ],
                &[
                    ports::RESULT,
                    ports::FFLAGS,
                    ports::IN_READY,
                    ports::OUT_VALID,
                ],
            ),
            edge: ClockEdge::default(),
            state: UnitState::Idle,
            pending: (0, 0),
        }
    }

    /// Latches the operands, computes the result, and returns the busy time.
    fn accept(&mut self) -> u32 {
        let a = self.ports.input(ports::A);
        let b = self.ports.input(ports::B);
        let is_sqrt = self.ports.input_bit(ports::IS_SQRT);
        let rm = RoundingMode::from_bits(self.ports.input(ports::RM)).unwrap_or_default();
        let (pending, latency) = match self.precision {
            Precision::F32 => compute::<f32>(a, b, is_sqrt, rm, timing::ITERATIONS_F32),
            Precision::F64 => compute::<f64>(a, b, is_sqrt, rm, timing::ITERATIONS_F64),
        };
        self.pending = pending;
        latency
    }

    fn reset(&mut self) {
        self.state = UnitState::Idle;
        self.pending = (0, 0);
        self.ports.clear_outputs();
    }
}

fn compute<F: Ieee>(
    a: u64,
    b: u64,
    is_sqrt: bool,
    rm: RoundingMode,
    iterations: u32,
) -> ((u64, u64), u32) {
    let a = F::from_port(a);
    let b = F::from_port(b);
    let (result, flags) = if is_sqrt {
        arith::sqrt(a, rm)
    } else {
        arith::div(a, b, rm)
    };

    let both = [a, b];
    let operands = if is_sqrt { &both[..1] } else { &both[..] };
    let special = operands
        .iter()
        .any(|&x| x.is_nan() || x.is_infinite() || x == F::ZERO);
    let latency = if special {
        timing::SPECIAL
    } else {
        let subnormals = operands
            .iter()
            .filter(|&&x| x.abs() < F::MIN_POSITIVE)
            .count() as u32;
        let extra = if is_sqrt { timing::SQRT_EXTRA } else { 0 };
        iterations + extra + subnormals * timing::SUBNORMAL
    };
    ((result, flags.into()), latency)
}

impl Dut for DivSqrtModel {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn set(&mut self, port: &str, value: u64) -> Result<()> {
        self.ports.set(port, value)
    }

    fn get(&self, port: &str) -> Result<u64> {
        self.ports.get(port)
    }

    fn eval(&mut self) {
        if !self.edge.rising(&self.ports) {
            return;
        }
        if self.ports.input_bit(ports::RESET) {
            self.reset();
            return;
        }

        if self.state == UnitState::Done && self.ports.input_bit(ports::OUT_READY) {
            self.state = UnitState::Idle;
            self.ports.drive(ports::OUT_VALID, 0);
        }
        let state = self.state;
        self.state = match state {
            UnitState::Idle if self.ports.input_bit(ports::IN_VALID) => UnitState::Busy {
                remaining: self.accept(),
            },
            UnitState::Busy { remaining } if remaining > 1 => UnitState::Busy {
                remaining: remaining - 1,
            },
            UnitState::Busy { .. } => {
                let (result, flags) = self.pending;
                self.ports.drive(ports::RESULT, result);
                self.ports.drive(ports::FFLAGS, flags);
                self.ports.drive(ports::OUT_VALID, 1);
                UnitState::Done
            }
            state => state,
        };
        self.ports
            .drive(ports::IN_READY, u64::from(self.state == UnitState::Idle));
    }
}
