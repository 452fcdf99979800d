//! Raster surface backed by a Cairo image surface.

use super::color::Color;

/// Surface-local point in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Line cap and join pairing used when stroking a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapStyle {
    /// Round caps and round joins
    Round,
    /// Square caps and mitered joins
    Square,
}

impl CapStyle {
    fn apply(self, ctx: &cairo::Context) {
        match self {
            CapStyle::Round => {
                ctx.set_line_cap(cairo::LineCap::Round);
                ctx.set_line_join(cairo::LineJoin::Round);
            }
            CapStyle::Square => {
                ctx.set_line_cap(cairo::LineCap::Square);
                ctx.set_line_join(cairo::LineJoin::Miter);
            }
        }
    }
}

/// Paint parameters for one stroked segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentStyle {
    pub color: Color,
    pub width: f64,
    pub opacity: f64,
    pub cap: CapStyle,
}

/// The drawing surface: an ARGB32 pixel buffer, its background color and the
/// path cursor that joins consecutive segments of a session.
///
/// No [`cairo::Context`] is kept alive between operations so the pixel data
/// can always be read back.
pub struct Canvas {
    surface: cairo::ImageSurface,
    background: Color,
    cursor: Option<Point>,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("background", &self.background)
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl Canvas {
    /// Creates a canvas filled with `background`.
    ///
    /// Non-positive dimensions are raised to 1x1 since Cairo cannot paint on
    /// an empty surface.
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self, cairo::Error> {
        let surface = cairo::ImageSurface::create(
            cairo::Format::ARgb32,
            width.max(1),
            height.max(1),
        )?;
        let canvas = Self {
            surface,
            background,
            cursor: None,
        };
        canvas.fill_background()?;
        Ok(canvas)
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Last point of the current subpath, if a session is drawing.
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// Borrow the underlying Cairo surface.
    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    /// Creates a short-lived drawing context for the surface.
    pub fn context(&self) -> Result<cairo::Context, cairo::Error> {
        cairo::Context::new(&self.surface)
    }

    /// Wipes every pixel back to the background color.
    pub fn clear(&mut self) -> Result<(), cairo::Error> {
        self.fill_background()
    }

    /// Replaces the surface with a blank one of the new size.
    ///
    /// Existing contents are discarded, as is the path cursor. If Cairo
    /// rejects the new size the old surface is kept but still cleared.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), cairo::Error> {
        self.cursor = None;
        match cairo::ImageSurface::create(cairo::Format::ARgb32, width.max(1), height.max(1)) {
            Ok(surface) => self.surface = surface,
            Err(err) => {
                self.fill_background()?;
                return Err(err);
            }
        }
        self.fill_background()
    }

    /// Ends the current subpath so the next segment starts fresh.
    pub fn reset_path(&mut self) {
        self.cursor = None;
    }

    /// Extends the current path to `to` and strokes the new segment.
    ///
    /// With no cursor the segment is degenerate and the cap alone marks the
    /// point. Opacity applies to this segment only.
    pub fn stroke_segment(&mut self, to: Point, style: &SegmentStyle) -> Result<(), cairo::Error> {
        let from = self.cursor.unwrap_or(to);
        self.cursor = Some(to);

        let ctx = self.context()?;
        ctx.set_source_rgba(
            style.color.r,
            style.color.g,
            style.color.b,
            style.color.a * style.opacity,
        );
        ctx.set_line_width(style.width);
        style.cap.apply(&ctx);
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        ctx.stroke()
    }

    /// Fills a 1x1 opaque dot at each position. The path cursor is untouched.
    ///
    /// Positions snap down to the pixel grid so each dot covers exactly one
    /// pixel.
    pub fn fill_dots(&mut self, dots: &[Point], color: Color) -> Result<(), cairo::Error> {
        if dots.is_empty() {
            return Ok(());
        }
        let ctx = self.context()?;
        ctx.set_antialias(cairo::Antialias::None);
        ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        for dot in dots {
            ctx.rectangle(dot.x.floor(), dot.y.floor(), 1.0, 1.0);
        }
        ctx.fill()
    }

    /// Reads back one pixel as straight RGBA, or `None` outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        let stride = self.surface.stride() as usize;
        let offset = y as usize * stride + x as usize * 4;
        let mut rgba = None;
        self.surface.flush();
        let read = self.surface.with_data(|data| {
            if let Some(bytes) = data.get(offset..offset + 4) {
                rgba = Some(unpremultiply(u32::from_ne_bytes([
                    bytes[0], bytes[1], bytes[2], bytes[3],
                ])));
            }
        });
        if let Err(err) = read {
            log::warn!("Failed to read canvas pixel data: {}", err);
            return None;
        }
        rgba
    }

    /// Returns every pixel as straight RGBA in row-major order.
    pub fn pixels(&self) -> Vec<[u8; 4]> {
        let width = self.width() as usize;
        let height = self.height() as usize;
        let stride = self.surface.stride() as usize;
        let mut out = Vec::with_capacity(width * height);
        self.surface.flush();
        let read = self.surface.with_data(|data| {
            for row in data.chunks(stride).take(height) {
                for px in row[..width * 4].chunks_exact(4) {
                    out.push(unpremultiply(u32::from_ne_bytes([
                        px[0], px[1], px[2], px[3],
                    ])));
                }
            }
        });
        if let Err(err) = read {
            log::warn!("Failed to read canvas pixel data: {}", err);
        }
        out
    }

    /// True when every pixel equals the background color.
    pub fn is_blank(&self) -> bool {
        let background = self.background.to_rgba8();
        self.pixels().iter().all(|px| *px == background)
    }

    /// Encodes the current surface contents as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>, cairo::IoError> {
        let mut png = Vec::new();
        self.surface.write_to_png(&mut png)?;
        Ok(png)
    }

    fn fill_background(&self) -> Result<(), cairo::Error> {
        let ctx = self.context()?;
        ctx.set_operator(cairo::Operator::Source);
        ctx.set_source_rgba(
            self.background.r,
            self.background.g,
            self.background.b,
            self.background.a,
        );
        ctx.paint()
    }
}

/// Converts a native-endian premultiplied ARGB32 word to straight RGBA.
pub(crate) fn unpremultiply(argb: u32) -> [u8; 4] {
    let a = (argb >> 24) as u8;
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let channel = |shift: u32| {
        let c = ((argb >> shift) & 0xff) as u32;
        ((c * 255 + a as u32 / 2) / a as u32).min(255) as u8
    };
    [channel(16), channel(8), channel(0), a]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED, WHITE};

    #[test]
    fn new_canvas_is_blank() {
        let canvas = Canvas::new(20, 10, WHITE).unwrap();
        assert_eq!(canvas.width(), 20);
        assert_eq!(canvas.height(), 10);
        assert!(canvas.is_blank());
        assert_eq!(canvas.pixel(0, 0), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(20, 0), None);
        assert_eq!(canvas.pixel(-1, 3), None);
    }

    #[test]
    fn stroke_then_clear_restores_background() {
        let mut canvas = Canvas::new(40, 40, WHITE).unwrap();
        let style = SegmentStyle {
            color: BLACK,
            width: 4.0,
            opacity: 1.0,
            cap: CapStyle::Round,
        };
        canvas.stroke_segment(Point::new(5.0, 20.0), &style).unwrap();
        canvas.stroke_segment(Point::new(35.0, 20.0), &style).unwrap();
        assert_eq!(canvas.pixel(20, 20), Some([0, 0, 0, 255]));

        canvas.clear().unwrap();
        assert!(canvas.is_blank());
    }

    #[test]
    fn stroke_advances_cursor_and_reset_drops_it() {
        let mut canvas = Canvas::new(10, 10, WHITE).unwrap();
        let style = SegmentStyle {
            color: BLACK,
            width: 1.0,
            opacity: 1.0,
            cap: CapStyle::Square,
        };
        assert_eq!(canvas.cursor(), None);
        canvas.stroke_segment(Point::new(3.0, 4.0), &style).unwrap();
        assert_eq!(canvas.cursor(), Some(Point::new(3.0, 4.0)));
        canvas.reset_path();
        assert_eq!(canvas.cursor(), None);
    }

    #[test]
    fn resize_discards_contents_and_cursor() {
        let mut canvas = Canvas::new(30, 30, WHITE).unwrap();
        canvas
            .fill_dots(&[Point::new(10.0, 10.0)], BLACK)
            .unwrap();
        assert!(!canvas.is_blank());

        canvas.resize(50, 25).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (50, 25));
        assert!(canvas.is_blank());
        assert_eq!(canvas.cursor(), None);
    }

    #[test]
    fn rejected_resize_still_clears() {
        let mut canvas = Canvas::new(30, 30, WHITE).unwrap();
        let style = SegmentStyle {
            color: BLACK,
            width: 3.0,
            opacity: 1.0,
            cap: CapStyle::Round,
        };
        canvas.stroke_segment(Point::new(15.0, 15.0), &style).unwrap();
        assert!(!canvas.is_blank());

        assert!(canvas.resize(40000, 10).is_err());
        assert_eq!((canvas.width(), canvas.height()), (30, 30));
        assert!(canvas.is_blank());
        assert_eq!(canvas.cursor(), None);
    }

    #[test]
    fn dots_snap_to_single_opaque_pixels() {
        let mut canvas = Canvas::new(40, 40, WHITE).unwrap();
        canvas
            .fill_dots(&[Point::new(20.3, 20.3), Point::new(5.9, 31.5)], RED)
            .unwrap();

        let red = [255, 0, 0, 255];
        assert_eq!(canvas.pixel(20, 20), Some(red));
        assert_eq!(canvas.pixel(5, 31), Some(red));
        let painted: Vec<_> = canvas
            .pixels()
            .into_iter()
            .filter(|px| *px != [255, 255, 255, 255])
            .collect();
        assert_eq!(painted, vec![red, red]);
    }

    #[test]
    fn unpremultiply_handles_partial_alpha() {
        // 50% black over nothing: premultiplied channels are zero
        assert_eq!(unpremultiply(0x8000_0000), [0, 0, 0, 128]);
        // 50% white: premultiplied channels are 128
        assert_eq!(unpremultiply(0x8080_8080), [255, 255, 255, 128]);
        assert_eq!(unpremultiply(0), [0, 0, 0, 0]);
    }
}
