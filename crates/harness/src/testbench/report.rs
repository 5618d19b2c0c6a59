//! Comparison and reporting.
//!
//! This module decides whether a device result conforms and tells the user about it. It provides:
//! 1. **Comparator:** Bit-exact check of result and flags against the reference record.
//! 2. **Mismatch:** Everything needed to reproduce a failing vector.
//! 3. **Reporter:** The three-line mismatch diagnostic and the final summary line.
//!
//! Hex values are printed lowercase without leading zeros, the way the reference
//! tooling prints them, so diagnostics can be grepped against the vector file.

use std::fmt;
use std::io::{self, Write};

use crate::stats::RunStatistics;

use super::runner::RunResult;
use super::vector::TestVector;

/// Verdict on one vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Result and flags match the reference bit for bit.
    Pass,
    /// Result or flags differ.
    Fail,
}

/// Bit-exact result comparison.
#[derive(Clone, Copy, Debug, Default)]
pub struct Comparator;

impl Comparator {
    /// Compares the device's result and flags with the record's expected values.
    ///
    /// No tolerance and no NaN canonicalization: the device must produce exactly the
    /// reference bits.
    pub fn check(vector: &TestVector, actual: &RunResult) -> Outcome {
        if actual.result == vector.expected_result
            && actual.flags == u64::from(vector.expected_flags)
        {
            Outcome::Pass
        } else {
            Outcome::Fail
        }
    }
}

/// A vector on which the device disagreed with the reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    /// The reference record.
    pub vector: TestVector,
    /// What the device produced.
    pub actual: RunResult,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vector {} (line {}) mismatched: dut {:x}/{:x}, ref {:x}/{:x}",
            self.vector.index,
            self.vector.line,
            self.actual.result,
            self.actual.flags,
            self.vector.expected_result,
            u64::from(self.vector.expected_flags),
        )
    }
}

/// Writes mismatch diagnostics and the run summary.
#[derive(Debug)]
pub struct Reporter<W> {
    out: W,
}

impl<W: Write> Reporter<W> {
    /// Reports to `out` (stdout in the CLI).
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the diagnostic for one mismatch:
    ///
    /// ```text
    /// [<index>] input: <a> [<b>]
    /// [<index>] dut_result: <result> dut_fflags: <flags>
    /// [<index>] ref_result: <result> ref_fflags: <flags>
    /// ```
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn mismatch(&mut self, mismatch: &Mismatch) -> io::Result<()> {
        let Mismatch { vector, actual } = mismatch;
        let index = vector.index;
        let operands = vector
            .operands()
            .map(|value| format!("{value:x}"))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(self.out, "[{index}] input: {operands}")?;
        writeln!(
            self.out,
            "[{index}] dut_result: {:x} dut_fflags: {:x}",
            actual.result, actual.flags
        )?;
        writeln!(
            self.out,
            "[{index}] ref_result: {:x} ref_fflags: {:x}",
            vector.expected_result,
            u64::from(vector.expected_flags)
        )?;
        self.out.flush()
    }

    /// Writes `cnt = <processed> error=<mismatches>`.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn summary(&mut self, stats: &RunStatistics) -> io::Result<()> {
        writeln!(self.out, "{}", stats.summary_line())?;
        self.out.flush()
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
