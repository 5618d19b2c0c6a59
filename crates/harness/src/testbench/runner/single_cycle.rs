use crate::common::Result;
use crate::dut::Dut;
use crate::fpu::OperationConfig;

use super::super::sequencer::ClockSequencer;
use super::super::vector::TestVector;
use super::{RunResult, Runner, binding};

/// Runner for fixed-latency devices: the result is registered on the next rising edge.
#[derive(Clone, Copy, Debug, Default)]
pub struct SingleCycleRunner;

impl Runner for SingleCycleRunner {
    fn run(
        &mut self,
        seq: &mut ClockSequencer,
        dut: &mut dyn Dut,
        vector: &TestVector,
        op: &OperationConfig,
    ) -> Result<RunResult> {
        binding::apply(dut, vector, op)?;
        seq.step(dut)?;
        let (result, flags) = binding::capture(dut, op)?;
        Ok(RunResult {
            result,
            flags,
            cycles: 1,
        })
    }
}
