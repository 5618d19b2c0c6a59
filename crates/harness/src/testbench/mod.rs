//! Conformance testbench.
//!
//! This module ties the pieces of a run together. It provides:
//! 1. **Sequencing:** [`sequencer::ClockSequencer`] for reset and clock periods.
//! 2. **Input:** [`vector::VectorReader`] over the reference stream.
//! 3. **Driving:** [`runner`] implementations per latency class.
//! 4. **Verdicts:** [`report::Comparator`] and [`report::Reporter`].
//! 5. **Orchestration:** [`Session`], which runs a whole stream against one device.
//!
//! A session is strictly sequential: one vector is in flight at a time, and every vector
//! is compared before the next one is read.

/// Per-cycle observation hooks.
pub mod observer;

/// Comparison and reporting.
pub mod report;

/// Per-vector device drivers.
pub mod runner;

/// Clock and reset sequencing.
pub mod sequencer;

/// Reference vector parsing.
pub mod vector;

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::common::{HarnessError, Result};
use crate::config::{HarnessConfig, MismatchPolicy};
use crate::dut::{Dut, ports};
use crate::fpu::{Latency, OperationConfig};
use crate::stats::RunStatistics;

use self::observer::{StepObserver, TraceObserver};
use self::report::{Comparator, Mismatch, Outcome, Reporter};
use self::runner::Runner;
use self::sequencer::ClockSequencer;
use self::vector::VectorReader;

/// One conformance run: a resolved operation, a device, and a vector stream.
///
/// The lifecycle is reset → configure → vector loop → summary. The device and the
/// operation configuration are fixed for the lifetime of the session.
pub struct Session {
    config: HarnessConfig,
    op: OperationConfig,
    sequencer: ClockSequencer,
    runner: Box<dyn Runner>,
}

impl Session {
    /// Creates a session for `op` under `config`.
    ///
    /// The runner is chosen from the operation's latency class. If `config.trace_steps` is
    /// set, a [`TraceObserver`] for the family is attached to the sequencer.
    pub fn new(config: HarnessConfig, op: OperationConfig) -> Self {
        let mut sequencer = ClockSequencer::new();
        if config.trace_steps {
            sequencer.add_observer(Box::new(TraceObserver::for_family(op.family())));
        }
        let runner = runner::for_latency(op.family().latency(), &config);
        Self {
            config,
            op,
            sequencer,
            runner,
        }
    }

    /// Attaches an additional step observer.
    pub fn add_observer(&mut self, observer: Box<dyn StepObserver>) {
        self.sequencer.add_observer(observer);
    }

    /// Runs every record of `input` through `dut`.
    ///
    /// # Arguments
    ///
    /// * `dut` - The device under test; it is reset before the first vector.
    /// * `input` - The reference vector stream.
    /// * `reporter` - Destination for mismatch diagnostics and the summary line.
    ///
    /// # Returns
    ///
    /// The run statistics when every vector matched. The summary line has been written.
    ///
    /// # Errors
    ///
    /// * [`HarnessError::ConformanceMismatch`] at the first mismatch under fail-fast; the
    ///   diagnostic has been written, the summary has not.
    /// * [`HarnessError::ConformanceFailures`] after the summary under collect-all when any
    ///   vector mismatched.
    /// * [`HarnessError::DeviceNotIdle`] if a handshake device asserts output-valid after reset.
    /// * Malformed-record, timeout, port, and I/O errors abort the run where they occur.
    pub fn run<R, W>(
        &mut self,
        dut: &mut dyn Dut,
        input: R,
        reporter: &mut Reporter<W>,
    ) -> Result<RunStatistics>
    where
        R: BufRead,
        W: Write,
    {
        let family = self.op.family();
        let start_cycle = self.sequencer.cycle();
        info!(
            device = dut.name(),
            op = %self.op.op,
            rm = %self.op.rounding_mode,
            "starting conformance run"
        );

        self.sequencer.reset(dut, self.config.reset_cycles)?;
        if family.latency() == Latency::Handshake && dut.get(ports::OUT_VALID)? & 1 == 1 {
            return Err(HarnessError::DeviceNotIdle {
                device: dut.name().to_string(),
            });
        }
        runner::binding::configure(dut, &self.op)?;

        let mut stats = RunStatistics::default();
        let mut reader = VectorReader::new(input, family.arity());
        while let Some(vector) = reader.next_vector()? {
            let actual = self
                .runner
                .run(&mut self.sequencer, dut, &vector, &self.op)?;
            let outcome = Comparator::check(&vector, &actual);
            stats.record(actual.cycles, outcome == Outcome::Pass);
            if outcome == Outcome::Pass {
                continue;
            }

            let mismatch = Mismatch { vector, actual };
            warn!(index = vector.index, line = vector.line, "{mismatch}");
            reporter.mismatch(&mismatch)?;
            if self.config.policy == MismatchPolicy::FailFast {
                return Err(HarnessError::ConformanceMismatch(Box::new(mismatch)));
            }
        }

        stats.cycles = self.sequencer.cycle() - start_cycle;
        reporter.summary(&stats)?;
        debug!(
            processed = stats.processed,
            mismatches = stats.mismatches,
            cycles = stats.cycles,
            "conformance run finished"
        );
        if stats.passed() {
            Ok(stats)
        } else {
            Err(HarnessError::ConformanceFailures {
                processed: stats.processed,
                mismatches: stats.mismatches,
            })
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("op", &self.op)
            .field("sequencer", &self.sequencer)
            .finish_non_exhaustive()
    }
}
