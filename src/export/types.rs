//! Error types for saving and sharing drawings.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while exporting the canvas.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode drawing as PNG: {0}")]
    Encode(#[from] cairo::IoError),

    #[error("Failed to save drawing: {0}")]
    SaveError(#[from] std::io::Error),

    #[error("Sharing not supported on this system")]
    ShareUnsupported,

    #[error("Share failed: {0}")]
    ShareFailed(String),
}

/// Outcome of a save or share request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Drawing written to this path
    Saved(PathBuf),
    /// Drawing handed to the share target
    Shared,
    /// The share target is not available; the user was notified
    Unsupported,
    /// The platform call failed; the error was logged
    Failed(String),
}
