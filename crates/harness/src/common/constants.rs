//! Harness-wide constants.

/// Clock periods with reset asserted before the first vector (matches the usual Verilator harness).
pub const DEFAULT_RESET_CYCLES: u32 = 10;

/// Clock periods the handshake runner waits for output-valid before declaring the device stuck.
pub const DEFAULT_MAX_WAIT_CYCLES: u64 = 10_000;

/// Mask of the five IEEE 754 exception flag bits.
pub const FFLAGS_MASK: u64 = 0x1f;

/// Canonical quiet NaN, single precision.
pub const CANONICAL_NAN_F32: u32 = 0x7fc0_0000;

/// Canonical quiet NaN, double precision.
pub const CANONICAL_NAN_F64: u64 = 0x7ff8_0000_0000_0000;
