//! Input handling and the drawing session state machine.
//!
//! This module turns pointer, touch and command events into paint calls on the
//! board. It holds the live brush, the session state (idle or drawing) and the
//! command handlers (clear, text, save, share, resize).

pub mod events;
pub mod script;
pub mod state;
pub mod touch;

// Re-export commonly used types at module level
pub use events::{Action, InputEvent, PointerEvent, TouchEvent, TouchPoint};
pub use script::{ScriptError, parse_script};
pub use state::{Board, DrawingState};
pub use touch::normalize_touch;
