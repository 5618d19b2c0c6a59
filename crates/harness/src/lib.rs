//! Floating-point unit conformance harness library.
//!
//! This crate checks FPU hardware designs against reference vectors, bit for bit, with the following:
//! 1. **FPU vocabulary:** Rounding modes, exception flags, device families, and operation selectors.
//! 2. **Devices:** The `Dut` port interface and behavioral models of each device family.
//! 3. **Testbench:** Clock/reset sequencing, vector parsing, single-cycle and handshake runners.
//! 4. **Reporting:** Bit-exact comparison, mismatch diagnostics, and run statistics.
//! 5. **Configuration:** Reset length, handshake cycle budget, and mismatch policy.

/// Common types and constants (errors, flag masks, canonical NaNs).
pub mod common;
/// Harness configuration (defaults, mismatch policy, JSON loading).
pub mod config;
/// Device-under-test interface and behavioral models.
pub mod dut;
/// Floating-point vocabulary (rounding modes, flags, families, operations).
pub mod fpu;
/// Run statistics collection and reporting.
pub mod stats;
/// Testbench (sequencer, vector reader, runners, comparator, reporter, session).
pub mod testbench;

/// Error type for every failing run; see [`HarnessError::exit_code`].
pub use crate::common::{HarnessError, Result};
/// Root configuration type; use `HarnessConfig::default()` or load from JSON.
pub use crate::config::HarnessConfig;
/// Port interface every device implements.
pub use crate::dut::Dut;
/// Resolved operation and rounding mode for a run.
pub use crate::fpu::OperationConfig;
/// Conformance run driver; construct with `Session::new`.
pub use crate::testbench::Session;
