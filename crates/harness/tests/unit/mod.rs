//! # Unit Components
//!
//! This module groups the unit tests by harness module: the FPU vocabulary, the run
//! configuration, the device interface and models, and the testbench.

/// Unit tests for harness configuration.
///
/// Defaults, JSON deserialization, and unknown-field rejection.
pub mod config;

/// Unit tests for the device interface and the behavioral models.
///
/// This module aggregates tests for:
/// - Port storage and unknown-port errors.
/// - Per-family model results and flags across rounding modes.
pub mod dut;

/// Unit tests for the floating-point vocabulary.
///
/// Rounding-mode selectors, exception flag encoding, and operation resolution.
pub mod fpu;
