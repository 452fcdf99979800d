//! Library exports for the scribbleboard drawing board.
//!
//! Exposes the raster canvas and stroke renderer, the session state machine,
//! configuration types and export helpers so hosts other than the bundled
//! replay binary can drive a board.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod notification;
pub mod util;

pub use config::Config;
pub use input::Board;
