//! Error types for the layout calculator.

use thiserror::Error;

/// Errors that can occur while computing a suction grid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Box dimensions or limits cannot produce a grid.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Column spacing falls below the minimum suction point distance.
    #[error("too much weight: column spacing {spacing:.2} mm is below the minimum of {min} mm")]
    SpacingTooSmall {
        /// Computed spacing between columns (mm).
        spacing: f64,
        /// Minimum allowed spacing (mm).
        min: f64,
    },
}

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
