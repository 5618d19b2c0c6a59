//! Configuration for a conformance run.
//!
//! This module defines the knobs that parameterize the harness. It provides:
//! 1. **Defaults:** Reset length and handshake cycle budget.
//! 2. **Structures:** [`HarnessConfig`], deserializable from JSON with every field optional.
//! 3. **Enums:** Mismatch policy and (re-exported) datapath precision.
//!
//! The CLI starts from `HarnessConfig::default()`, optionally loads a JSON file, then applies
//! command-line overrides on top.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::Result;
use crate::common::constants;
pub use crate::fpu::Precision;

/// Default configuration constants for the harness.
mod defaults {
    use super::constants;

    /// Clock periods with reset asserted.
    pub const RESET_CYCLES: u32 = constants::DEFAULT_RESET_CYCLES;

    /// Clock periods to wait for output-valid on handshake devices.
    ///
    /// Far above the latency of any iterative divider/square-root unit, so hitting it
    /// means the device is stuck rather than slow.
    pub const MAX_WAIT_CYCLES: u64 = constants::DEFAULT_MAX_WAIT_CYCLES;
}

/// What the harness does when a vector mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchPolicy {
    /// Stop at the first mismatch and exit non-zero.
    #[default]
    FailFast,
    /// Report every mismatch, finish the stream, then exit non-zero if any occurred.
    CollectAll,
}

/// Root configuration for a conformance run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    /// Clock periods with reset asserted before the settle cycle.
    #[serde(default = "HarnessConfig::default_reset_cycles")]
    pub reset_cycles: u32,

    /// Cycle budget for the handshake wait loop.
    #[serde(default = "HarnessConfig::default_max_wait_cycles")]
    pub max_wait_cycles: u64,

    /// Fail-fast or collect-all.
    #[serde(default)]
    pub policy: MismatchPolicy,

    /// Datapath precision of the built-in device models.
    #[serde(default)]
    pub precision: Precision,

    /// Attach the step-tracing observer to the clock sequencer.
    #[serde(default)]
    pub trace_steps: bool,
}

impl HarnessConfig {
    /// Returns the default reset length.
    const fn default_reset_cycles() -> u32 {
        defaults::RESET_CYCLES
    }

    /// Returns the default handshake cycle budget.
    const fn default_max_wait_cycles() -> u64 {
        defaults::MAX_WAIT_CYCLES
    }

    /// Parses a configuration from a JSON document; absent fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Config`](crate::common::HarnessError::Config) on malformed JSON
    /// or unknown fields.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a configuration error if it does
    /// not parse.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            reset_cycles: defaults::RESET_CYCLES,
            max_wait_cycles: defaults::MAX_WAIT_CYCLES,
            policy: MismatchPolicy::default(),
            precision: Precision::default(),
            trace_steps: false,
        }
    }
}
