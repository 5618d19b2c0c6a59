/// Behavioral model results per family.
pub mod models;

/// Port storage, unknown ports, and edge detection.
pub mod ports;
