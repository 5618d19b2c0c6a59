

/// Rounding-mode selectors and port encoding.
pub mod rounding_modes;
