//! Saving and sharing the drawing.
//!
//! This module provides:
//! - PNG file saving with templated filenames
//! - Sharing through a platform share target (the Wayland clipboard by default)

pub mod file;
pub mod share;
pub mod types;

pub use file::{FileSaveConfig, save_drawing};
pub use share::{ClipboardShare, ShareTarget};
pub use types::{ExportError, ExportOutcome};
