//! Run statistics collection and reporting.
//!
//! This module tracks what a conformance run did. It provides:
//! 1. **Totals:** Vectors compared and vectors that mismatched, which make up the summary line.
//! 2. **Timing:** Clock periods spent in the run, including reset.
//! 3. **Latency:** Per-vector device latency (total and worst case), interesting for handshake devices.

use std::io::{self, Write};
use std::time::Instant;

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"latency"`.
/// Pass an empty slice to `write_sections` to write all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "latency"];

/// Counters accumulated over one conformance run.
#[derive(Clone, Debug)]
pub struct RunStatistics {
    start_time: Instant,
    /// Vectors that completed a comparison.
    pub processed: u64,
    /// Vectors whose result or flags differed from the reference.
    pub mismatches: u64,
    /// Clock periods stepped during the run, reset included.
    pub cycles: u64,
    /// Sum of per-vector latencies in clock periods.
    pub total_latency: u64,
    /// Largest per-vector latency seen.
    pub max_latency: u64,
}

impl Default for RunStatistics {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            processed: 0,
            mismatches: 0,
            cycles: 0,
            total_latency: 0,
            max_latency: 0,
        }
    }
}

impl RunStatistics {
    /// Accounts for one compared vector.
    ///
    /// # Arguments
    ///
    /// * `latency` - Clock periods the device took to produce the result.
    /// * `passed` - Whether result and flags matched the reference.
    pub fn record(&mut self, latency: u64, passed: bool) {
        self.processed += 1;
        if !passed {
            self.mismatches += 1;
        }
        self.total_latency += latency;
        self.max_latency = self.max_latency.max(latency);
    }

    /// Returns true if no compared vector mismatched.
    pub const fn passed(&self) -> bool {
        self.mismatches == 0
    }

    /// Mean device latency in clock periods, 0 when nothing was compared.
    pub fn mean_latency(&self) -> f64 {
        if self.processed == 0 {
            0.0
        } else {
            self.total_latency as f64 / self.processed as f64
        }
    }

    /// The one-line run summary, `cnt = <processed> error=<mismatches>`.
    pub fn summary_line(&self) -> String {
        format!("cnt = {} error={}", self.processed, self.mismatches)
    }

    /// Writes the requested statistics sections.
    ///
    /// # Arguments
    ///
    /// * `out` - Destination writer.
    /// * `sections` - Slice of section names to write, or empty for all.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`.
    pub fn write_sections<W: Write>(&self, out: &mut W, sections: &[String]) -> io::Result<()> {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();

        writeln!(out, "==========================================================")?;
        writeln!(out, "FPU CONFORMANCE RUN STATISTICS")?;
        writeln!(out, "==========================================================")?;
        if want("summary") {
            let rate = if seconds > 0.0 {
                self.processed as f64 / seconds
            } else {
                0.0
            };
            writeln!(out, "host_seconds             {seconds:.4} s")?;
            writeln!(out, "vectors                  {}", self.processed)?;
            writeln!(out, "mismatches               {}", self.mismatches)?;
            writeln!(out, "vectors_per_sec          {rate:.2}")?;
            writeln!(out, "sim_cycles               {}", self.cycles)?;
            writeln!(out, "----------------------------------------------------------")?;
        }
        if want("latency") {
            writeln!(out, "DEVICE LATENCY")?;
            writeln!(out, "  latency.total          {}", self.total_latency)?;
            writeln!(out, "  latency.mean           {:.2}", self.mean_latency())?;
            writeln!(out, "  latency.max            {}", self.max_latency)?;
        }
        writeln!(out, "==========================================================")
    }
}
