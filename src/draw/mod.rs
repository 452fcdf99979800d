//! Raster drawing primitives (Cairo-based).
//!
//! This module defines the drawing types of the board:
//! - [`Canvas`]: the raster surface with its background and path cursor
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Tool`] and [`BrushConfig`]: the brush behaviors and the live brush
//! - [`paint_sample`]: the per-sample stroke renderer
//! - [`stamp_text`]: text stamping via Pango

pub mod brush;
pub mod canvas;
pub mod color;
pub mod font;
pub mod render;

// Re-export commonly used types at module level
pub use brush::{
    BrushConfig, DEFAULT_SPRAY_DENSITY, PcgScatter, ScatterSource, Tool, paint_sample, spray_dots,
};
pub use canvas::{Canvas, CapStyle, Point, SegmentStyle};
pub use color::Color;
pub use font::FontDescriptor;
pub use render::{TEXT_SCALE, stamp_text};

#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
