//! Per-vector device drivers.
//!
//! A runner takes one [`TestVector`], drives it through the device, and returns what the
//! device produced. Two timing disciplines exist:
//! - [`SingleCycleRunner`]: apply operands, step one period, sample.
//! - [`HandshakeRunner`]: assert input-valid, step until output-valid (bounded), sample.
//!
//! Which port carries which operand is family-specific and lives in [`binding`].

/// Family-specific port bindings.
pub mod binding;

/// Handshake (valid/ready) runner.
pub mod handshake;

/// Fixed one-cycle runner.
pub mod single_cycle;

pub use self::handshake::HandshakeRunner;
pub use self::single_cycle::SingleCycleRunner;

use crate::common::Result;
use crate::config::HarnessConfig;
use crate::dut::Dut;
use crate::fpu::{Latency, OperationConfig};

use super::sequencer::ClockSequencer;
use super::vector::TestVector;

/// What the device produced for one vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunResult {
    /// Result bits.
    pub result: u64,
    /// Exception flags as sampled from the device.
    pub flags: u64,
    /// Clock periods from applying the operands to sampling the result.
    pub cycles: u64,
}

/// Drives one vector through a device.
pub trait Runner {
    /// Applies `vector` under `op`, clocks the device through `seq`, and samples the outputs.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::UnknownPort`](crate::common::HarnessError::UnknownPort) if the
    /// device lacks a port the family needs, and
    /// [`HarnessError::DeviceTimeout`](crate::common::HarnessError::DeviceTimeout) if a
    /// handshake device never answers.
    fn run(
        &mut self,
        seq: &mut ClockSequencer,
        dut: &mut dyn Dut,
        vector: &TestVector,
        op: &OperationConfig,
    ) -> Result<RunResult>;
}

/// Picks the runner matching a family's latency class.
pub fn for_latency(latency: Latency, config: &HarnessConfig) -> Box<dyn Runner> {
    match latency {
        Latency::Fixed => Box::new(SingleCycleRunner),
        Latency::Handshake => Box::new(HandshakeRunner::new(config.max_wait_cycles)),
    }
}
