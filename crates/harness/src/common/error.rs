//! Harness error definitions.
//!
//! This module defines every way a conformance run can end other than a clean pass. It provides:
//! 1. **Usage errors:** Unknown rounding-mode, family, or operation names, rejected before any device interaction.
//! 2. **Input errors:** Malformed vector records and I/O failures on the vector stream.
//! 3. **Conformance errors:** The first mismatch (fail-fast) or the collected mismatch count (collect-all).
//! 4. **Device errors:** Handshake timeouts, reset-invariant violations, and unknown port names.
//!
//! None of these are transient; the harness never retries.

use std::io;

use thiserror::Error;

use crate::testbench::report::Mismatch;

/// Exit status reported to the invoking process for every error kind.
pub const FAILURE_EXIT_CODE: i32 = -1;

/// Errors that terminate a conformance run.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Bad command-line selector (rounding mode, family, or operation name).
    #[error("usage: {0}")]
    Usage(String),

    /// A vector record could not be parsed.
    ///
    /// `line` is 1-based and refers to the input stream.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord {
        /// Line number of the offending record.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// The device disagreed with the reference on a vector (fail-fast policy).
    #[error("{0}")]
    ConformanceMismatch(Box<Mismatch>),

    /// One or more vectors mismatched under the collect-all policy.
    #[error("{mismatches} of {processed} vectors did not match the reference")]
    ConformanceFailures {
        /// Vectors that completed a comparison.
        processed: u64,
        /// Vectors that failed it.
        mismatches: u64,
    },

    /// The device never raised output-valid within the cycle budget.
    #[error("device `{device}` did not assert output-valid within {cycles} cycles (vector {index})")]
    DeviceTimeout {
        /// Device name.
        device: String,
        /// Zero-based vector index in flight.
        index: usize,
        /// Cycles waited before giving up.
        cycles: u64,
    },

    /// A handshake device reported output-valid straight out of reset.
    #[error("device `{device}` asserts output-valid immediately after reset")]
    DeviceNotIdle {
        /// Device name.
        device: String,
    },

    /// The harness addressed a port the device does not expose.
    #[error("device `{device}` has no port named `{port}`")]
    UnknownPort {
        /// Device name.
        device: String,
        /// Requested port name.
        port: String,
    },

    /// Reading the vector stream or writing the report failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A configuration file could not be deserialized.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl HarnessError {
    /// Process exit status for this error.
    ///
    /// Every kind is fatal and reported the same way; the distinction lives in the message.
    pub const fn exit_code(&self) -> i32 {
        FAILURE_EXIT_CODE
    }

    /// Builds a [`HarnessError::MalformedRecord`].
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the harness.
pub type Result<T> = std::result::Result<T, HarnessError>;
