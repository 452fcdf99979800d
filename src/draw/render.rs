//! Cairo/Pango rendering for stamped text.

use super::canvas::{Canvas, Point};
use super::color::Color;
use super::font::FontDescriptor;

/// Font size multiplier applied to the brush size for stamped text.
pub const TEXT_SCALE: f64 = 5.0;

/// Stamps `text` onto the canvas with its first baseline at `anchor`.
///
/// Empty or whitespace-only text draws nothing. Returns `true` when text was
/// rendered.
///
/// # Arguments
/// * `canvas` - Surface to draw on
/// * `anchor` - Baseline start of the first line
/// * `text` - Text content (may contain '\n' for line breaks)
/// * `color` - Fill color
/// * `pixel_size` - Font size in pixels
/// * `font` - Font family
pub fn stamp_text(
    canvas: &mut Canvas,
    anchor: Point,
    text: &str,
    color: Color,
    pixel_size: f64,
    font: &FontDescriptor,
) -> Result<bool, cairo::Error> {
    if text.trim().is_empty() {
        return Ok(false);
    }

    let ctx = canvas.context()?;
    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(&ctx);
    layout.set_font_description(Some(&font.to_pango(pixel_size)));
    layout.set_text(text);

    // Pango lays out from the top-left corner; shift up so `anchor` is the baseline
    let baseline = layout.baseline() as f64 / pango::SCALE as f64;
    ctx.move_to(anchor.x, anchor.y - baseline);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    pangocairo::functions::show_layout(&ctx, &layout);

    ctx.status()?;
    Ok(true)
}
