//! Per-cycle observation hooks.
//!
//! Observers are attached to the [`ClockSequencer`](super::sequencer::ClockSequencer) and see
//! the device after every full clock period. They exist so that waveform dumps or step logs
//! can be bolted on without touching the runners.

use tracing::trace;

use crate::dut::{Dut, ports};
use crate::fpu::OpFamily;

/// Receives the device state after each clock period.
pub trait StepObserver {
    /// Called once the rising edge of cycle `cycle` has been evaluated.
    fn on_step(&mut self, cycle: u64, dut: &dyn Dut);
}

/// Emits one `trace`-level event per cycle with the values of a fixed set of ports.
#[derive(Debug, Clone)]
pub struct TraceObserver {
    ports: Vec<&'static str>,
}

impl TraceObserver {
    /// Observes the given ports.
    pub const fn new(ports: Vec<&'static str>) -> Self {
        Self { ports }
    }

    /// Observes the ports that matter for `family`: reset, operands, result, flags, and
    /// handshake signals where present.
    pub fn for_family(family: OpFamily) -> Self {
        let mut watched = vec![ports::RESET];
        watched.extend_from_slice(match family {
            OpFamily::Add => &[ports::A, ports::B, ports::RESULT][..],
            OpFamily::Compare => &[ports::A, ports::B, ports::EQ, ports::LE, ports::LT][..],
            OpFamily::FpToFp => &[ports::IN, ports::RESULT][..],
            OpFamily::IntToFp => &[ports::INT, ports::RESULT][..],
            OpFamily::DivSqrt => &[
                ports::A,
                ports::B,
                ports::IN_VALID,
                ports::OUT_VALID,
                ports::RESULT,
            ][..],
        });
        watched.push(ports::FFLAGS);
        Self::new(watched)
    }
}

impl StepObserver for TraceObserver {
    fn on_step(&mut self, cycle: u64, dut: &dyn Dut) {
        let values = self
            .ports
            .iter()
            .filter_map(|&port| dut.get(port).ok().map(|value| format!("{port}={value:x}")))
            .collect::<Vec<_>>()
            .join(" ");
        trace!(target: "fpuconf::step", cycle, device = dut.name(), "{values}");
    }
}
