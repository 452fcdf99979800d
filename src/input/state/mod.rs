mod actions;
mod core;
mod mouse;

pub use actions::SHARE_UNSUPPORTED_NOTICE;
pub use core::{Board, BoardSettings, DrawingState};
