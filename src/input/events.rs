//! Normalized input events consumed by the board.

use crate::draw::Point;

/// Pointer vocabulary driving drawing sessions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed at a surface-local point
    Down(Point),
    /// Pointer moved to a surface-local point
    Move(Point),
    /// Primary button released
    Up,
}

/// One touch contact in client (window) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub client_x: f64,
    pub client_y: f64,
}

impl TouchPoint {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// Raw touch events. The first entry of a touch list is the primary touch.
#[derive(Debug, Clone, PartialEq)]
pub enum TouchEvent {
    Start(Vec<TouchPoint>),
    Move(Vec<TouchPoint>),
    End,
}

/// User commands and picker changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Tool picker changed (unrecognized names disable painting)
    SelectTool(String),
    /// Color picker changed
    SelectColor(String),
    /// Size input changed
    SelectSize(f64),
    /// Wipe the surface to the background color
    Clear,
    /// Stamp text at the anchor; `None` means the prompt was dismissed
    AddText(Option<String>),
    /// Export the surface to a PNG file
    Save,
    /// Export the surface and hand it to the share target
    Share,
    /// The viewport changed size
    Resize { width: u32, height: u32 },
}

/// Anything the board can be fed.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Touch(TouchEvent),
    Action(Action),
    /// The surface's top-left corner moved to this client position
    SurfaceOrigin(Point),
}
