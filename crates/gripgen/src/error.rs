//! Error types for gripper assembly.

use thiserror::Error;

use crate::template::PartKind;
use gripgen_layout::LayoutError;

/// Errors returned while loading templates or assembling a gripper.
#[derive(Error, Debug)]
pub enum AssemblyError {
    /// A part template was never loaded.
    #[error("template not loaded: {0}")]
    MissingTemplate(PartKind),

    /// A model file could not be read or parsed.
    #[error("failed to load {path}: {reason}")]
    Load {
        /// Path of the model file.
        path: String,
        /// Underlying failure.
        reason: String,
    },

    /// A model file contains no triangle geometry.
    #[error("model has no triangle geometry: {0}")]
    EmptyModel(String),

    /// Configuration file is malformed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Grid layout was rejected.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for assembly operations.
pub type Result<T> = std::result::Result<T, AssemblyError>;
