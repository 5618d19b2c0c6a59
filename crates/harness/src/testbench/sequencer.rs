//! Clock and reset sequencing.
//!
//! One clock period is: clock low, evaluate, clock high, evaluate. The sequencer is the only
//! code that touches `clock` and `reset`; runners ask it for whole periods.

use std::fmt;

use tracing::debug;

use crate::common::Result;
use crate::dut::{Dut, ports};

use super::observer::StepObserver;

/// Drives clock and reset, counts cycles, and notifies observers.
pub struct ClockSequencer {
    cycle: u64,
    observers: Vec<Box<dyn StepObserver>>,
}

impl ClockSequencer {
    /// Creates a sequencer at cycle 0 with no observers.
    pub fn new() -> Self {
        Self {
            cycle: 0,
            observers: Vec::new(),
        }
    }

    /// Adds an observer called after every period.
    pub fn add_observer(&mut self, observer: Box<dyn StepObserver>) {
        self.observers.push(observer);
    }

    /// Clock periods stepped so far, reset included.
    pub const fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Resets the device.
    ///
    /// Holds `reset` high for `cycles` periods, releases it, and steps one more period so the
    /// device settles with reset deasserted.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::UnknownPort`](crate::common::HarnessError::UnknownPort) if the
    /// device lacks `clock` or `reset`.
    pub fn reset(&mut self, dut: &mut dyn Dut, cycles: u32) -> Result<()> {
        dut.set(ports::RESET, 1)?;
        for _ in 0..cycles {
            self.step(dut)?;
        }
        dut.set(ports::RESET, 0)?;
        self.step(dut)?;
        debug!(device = dut.name(), cycles, "reset complete");
        Ok(())
    }

    /// Advances the device by one full clock period.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::UnknownPort`](crate::common::HarnessError::UnknownPort) if the
    /// device has no `clock` input.
    pub fn step(&mut self, dut: &mut dyn Dut) -> Result<()> {
        dut.set(ports::CLOCK, 0)?;
        dut.eval();
        dut.set(ports::CLOCK, 1)?;
        dut.eval();
        self.cycle += 1;
        for observer in &mut self.observers {
            observer.on_step(self.cycle, &*dut);
        }
        Ok(())
    }
}

impl Default for ClockSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ClockSequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClockSequencer")
            .field("cycle", &self.cycle)
            .field("observers", &self.observers.len())
            .finish()
    }
}
