//! Common types shared across the harness.
//!
//! This module provides the error type used by every fallible operation and the
//! handful of constants (reset length, handshake budget, flag mask, canonical NaNs)
//! that more than one component depends on.

/// Harness-wide constants.
pub mod constants;

/// Error kinds that end a run, and the exit status they map to.
pub mod error;

pub use error::{HarnessError, Result};
