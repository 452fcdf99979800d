//! Small geometry helpers.

/// Largest width or height Cairo accepts for an image surface.
pub const MAX_SURFACE_EXTENT: i32 = 32767;

/// Surface size for a viewport, as whole pixels.
///
/// Each dimension is `floor(viewport * fraction)`, kept within
/// `1..=MAX_SURFACE_EXTENT`.
pub fn surface_size(
    viewport_width: u32,
    viewport_height: u32,
    width_fraction: f64,
    height_fraction: f64,
) -> (i32, i32) {
    let scale = |extent: u32, fraction: f64| {
        ((extent as f64 * fraction).floor() as i32).clamp(1, MAX_SURFACE_EXTENT)
    };
    (
        scale(viewport_width, width_fraction),
        scale(viewport_height, height_fraction),
    )
}
