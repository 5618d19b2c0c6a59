//! Valid/ready handshake runner.
//!
//! Per vector the runner walks three states:
//!
//! ```text
//! Issue ──step──▶ Wait{n} ──out_valid──▶ Capture
//!                   │  ▲
//!                   └──┘ step while !out_valid and n < budget
//! ```
//!
//! Input-valid and output-ready are held high throughout, so the device may consume the
//! result on the same edge that accepts the next operands.

use tracing::trace;

use crate::common::{HarnessError, Result};
use crate::dut::{Dut, ports};
use crate::fpu::OperationConfig;

use super::super::sequencer::ClockSequencer;
use super::super::vector::TestVector;
use super::{RunResult, Runner, binding};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HandshakeState {
    Issue,
    Wait { waited: u64 },
    Capture { cycles: u64 },
}

/// Runner for devices with a data-dependent latency announced by output-valid.
#[derive(Clone, Copy, Debug)]
pub struct HandshakeRunner {
    max_wait_cycles: u64,
}

impl HandshakeRunner {
    /// Creates a runner that gives up after `max_wait_cycles` periods without output-valid.
    pub const fn new(max_wait_cycles: u64) -> Self {
        Self { max_wait_cycles }
    }
}

impl Runner for HandshakeRunner {
    fn run(
        &mut self,
        seq: &mut ClockSequencer,
        dut: &mut dyn Dut,
        vector: &TestVector,
        op: &OperationConfig,
    ) -> Result<RunResult> {
        let mut state = HandshakeState::Issue;
        loop {
            state = match state {
                HandshakeState::Issue => {
                    binding::apply(dut, vector, op)?;
                    dut.set(ports::IN_VALID, 1)?;
                    dut.set(ports::OUT_READY, 1)?;
                    seq.step(dut)?;
                    HandshakeState::Wait { waited: 0 }
                }
                HandshakeState::Wait { waited } => {
                    if dut.get(ports::OUT_VALID)? & 1 == 1 {
                        HandshakeState::Capture {
                            cycles: waited + 1,
                        }
                    } else if waited >= self.max_wait_cycles {
                        return Err(HarnessError::DeviceTimeout {
                            device: dut.name().to_string(),
                            index: vector.index,
                            cycles: waited,
                        });
                    } else {
                        seq.step(dut)?;
                        HandshakeState::Wait { waited: waited + 1 }
                    }
                }
                HandshakeState::Capture { cycles } => {
                    let (result, flags) = binding::capture(dut, op)?;
                    trace!(index = vector.index, cycles, "handshake complete");
                    return Ok(RunResult {
                        result,
                        flags,
                        cycles,
                    });
                }
            };
        }
    }
}
