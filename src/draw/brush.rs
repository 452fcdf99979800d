//! Stroke rendering: maps one pointer sample to paint operations per tool.

use super::canvas::{Canvas, CapStyle, Point, SegmentStyle};
use super::color::{BLACK, Color};
use std::time::{SystemTime, UNIX_EPOCH};

/// Number of dots emitted by one spray sample unless configured otherwise.
pub const DEFAULT_SPRAY_DENSITY: usize = 50;

/// Brush behavior selected in the tool picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Thin opaque line with round ends
    Pencil,
    /// Double-width, slightly translucent line with square ends
    Marker,
    /// Double-width line painted in the board background color
    Eraser,
    /// Scattered single-pixel dots around the pointer
    Spray,
    /// Double-width, mostly transparent line with square ends
    Highlighter,
}

impl Tool {
    /// Every tool, in picker order.
    pub const ALL: [Tool; 5] = [
        Tool::Pencil,
        Tool::Marker,
        Tool::Eraser,
        Tool::Spray,
        Tool::Highlighter,
    ];

    /// Looks up a tool by its picker identifier (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "pencil" => Some(Tool::Pencil),
            "marker" => Some(Tool::Marker),
            "eraser" => Some(Tool::Eraser),
            "spray" => Some(Tool::Spray),
            "highlighter" => Some(Tool::Highlighter),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pencil => "pencil",
            Tool::Marker => "marker",
            Tool::Eraser => "eraser",
            Tool::Spray => "spray",
            Tool::Highlighter => "highlighter",
        }
    }

    /// Line width multiplier applied to the brush size.
    pub fn width_factor(&self) -> f64 {
        match self {
            Tool::Pencil => 1.0,
            Tool::Marker | Tool::Eraser | Tool::Highlighter => 2.0,
            Tool::Spray => 0.0,
        }
    }

    /// Per-segment opacity.
    pub fn opacity(&self) -> f64 {
        match self {
            Tool::Marker => 0.7,
            Tool::Highlighter => 0.3,
            Tool::Pencil | Tool::Eraser | Tool::Spray => 1.0,
        }
    }

    /// Whether samples join into a continuous path.
    pub fn is_path_based(&self) -> bool {
        !matches!(self, Tool::Spray)
    }
}

/// The live brush: what the next sample paints with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushConfig {
    /// Stroke and dot color (ignored by the eraser)
    pub color: Color,
    /// Brush size in pixels; non-positive values paint nothing visible
    pub size: f64,
    /// Active tool, `None` when the picker named something unrecognized
    pub tool: Option<Tool>,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            color: BLACK,
            size: 5.0,
            tool: Some(Tool::Pencil),
        }
    }
}

impl BrushConfig {
    /// Segment style for a path-based tool, or `None` for spray.
    ///
    /// The eraser paints with `background` rather than the brush color.
    pub fn segment_style(&self, tool: Tool, background: Color) -> Option<SegmentStyle> {
        if !tool.is_path_based() {
            return None;
        }
        let (color, cap) = match tool {
            Tool::Pencil => (self.color, CapStyle::Round),
            Tool::Eraser => (background, CapStyle::Round),
            _ => (self.color, CapStyle::Square),
        };
        Some(SegmentStyle {
            color,
            width: self.size * tool.width_factor(),
            opacity: tool.opacity(),
            cap,
        })
    }
}

/// Source of uniform random samples in `[0, 1)` for spray jitter.
pub trait ScatterSource {
    fn next_unit(&mut self) -> f64;
}

const PCG_MULT: u64 = 6364136223846793005;
const PCG_INIT: u64 = 0x853c49e6748fea9b;

/// PCG32 generator used for spray scatter outside of tests.
#[derive(Debug, Clone)]
pub struct PcgScatter {
    state: u64,
    inc: u64,
}

impl PcgScatter {
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = Self { state: 0, inc: 1 };
        rng.next_u32();
        rng.state = rng.state.wrapping_add(PCG_INIT.wrapping_add(seed));
        rng.next_u32();
        rng
    }

    /// Seeds from the wall clock.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(nanos)
    }

    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = old.wrapping_mul(PCG_MULT).wrapping_add(self.inc | 1);
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl ScatterSource for PcgScatter {
    fn next_unit(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }
}

/// Computes the dot positions for one spray burst.
///
/// Each dot is offset from `at` by two independent draws mapped to
/// `[-radius/2, radius/2]` with `radius = size * 2`.
pub fn spray_dots(
    at: Point,
    size: f64,
    density: usize,
    scatter: &mut dyn ScatterSource,
) -> Vec<Point> {
    let radius = size * 2.0;
    (0..density)
        .map(|_| {
            let dx = (scatter.next_unit() - 0.5) * radius;
            let dy = (scatter.next_unit() - 0.5) * radius;
            Point::new(at.x + dx, at.y + dy)
        })
        .collect()
}

/// Paints one pointer sample onto the canvas with the given brush.
///
/// Path-based tools stroke from the canvas cursor to `at`; spray drops a
/// burst of `density` dots and leaves the cursor alone. An unrecognized tool
/// paints nothing.
///
/// Opacity applies per segment. Consecutive segments overlap at their caps,
/// so marker and highlighter ink compounds at every sample joint and a
/// densely sampled stroke ends up darker than the tool's nominal opacity.
pub fn paint_sample(
    canvas: &mut Canvas,
    at: Point,
    brush: &BrushConfig,
    scatter: &mut dyn ScatterSource,
    density: usize,
) -> Result<(), cairo::Error> {
    let Some(tool) = brush.tool else {
        return Ok(());
    };

    match brush.segment_style(tool, canvas.background()) {
        Some(style) => canvas.stroke_segment(at, &style),
        None => {
            let dots = spray_dots(at, brush.size, density, scatter);
            canvas.fill_dots(&dots, brush.color.with_alpha(1.0))
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::draw::color::{RED, WHITE};

    /// Replays a fixed cycle of unit samples.
    pub(crate) struct FixedScatter {
        values: Vec<f64>,
        next: usize,
    }

    impl FixedScatter {
        pub(crate) fn new(values: Vec<f64>) -> Self {
            Self { values, next: 0 }
        }
    }

    impl ScatterSource for FixedScatter {
        fn next_unit(&mut self) -> f64 {
            let value = self.values[self.next % self.values.len()];
            self.next += 1;
            value
        }
    }

    #[test]
    fn tool_names_round_trip() {
        for tool in Tool::ALL {
            assert_eq!(Tool::from_name(tool.name()), Some(tool));
        }
        assert_eq!(Tool::from_name(" Marker "), Some(Tool::Marker));
        assert_eq!(Tool::from_name("crayon"), None);
    }

    #[test]
    fn segment_style_follows_tool_table() {
        let brush = BrushConfig {
            color: RED,
            size: 4.0,
            tool: None,
        };
        let pencil = brush.segment_style(Tool::Pencil, WHITE).unwrap();
        assert_eq!((pencil.width, pencil.opacity), (4.0, 1.0));
        assert_eq!(pencil.cap, CapStyle::Round);
        assert_eq!(pencil.color, RED);

        let marker = brush.segment_style(Tool::Marker, WHITE).unwrap();
        assert_eq!((marker.width, marker.opacity), (8.0, 0.7));
        assert_eq!(marker.cap, CapStyle::Square);

        let eraser = brush.segment_style(Tool::Eraser, WHITE).unwrap();
        assert_eq!((eraser.width, eraser.opacity), (8.0, 1.0));
        assert_eq!(eraser.color, WHITE);
        assert_eq!(eraser.cap, CapStyle::Round);

        let highlighter = brush.segment_style(Tool::Highlighter, WHITE).unwrap();
        assert_eq!((highlighter.width, highlighter.opacity), (8.0, 0.3));
        assert_eq!(highlighter.cap, CapStyle::Square);

        assert!(brush.segment_style(Tool::Spray, WHITE).is_none());
    }

    #[test]
    fn spray_dots_stay_inside_square() {
        let mut scatter = PcgScatter::with_seed(7);
        let at = Point::new(100.0, 60.0);
        let dots = spray_dots(at, 6.0, DEFAULT_SPRAY_DENSITY, &mut scatter);
        assert_eq!(dots.len(), DEFAULT_SPRAY_DENSITY);
        for dot in dots {
            assert!((dot.x - at.x).abs() <= 6.0, "{:?}", dot);
            assert!((dot.y - at.y).abs() <= 6.0, "{:?}", dot);
        }
    }

    #[test]
    fn spray_dots_use_scatter_extremes() {
        let mut scatter = FixedScatter::new(vec![0.0, 0.5]);
        let dots = spray_dots(Point::new(10.0, 10.0), 5.0, 2, &mut scatter);
        // radius 10: 0.0 maps to -5, 0.5 maps to 0
        assert_eq!(dots, vec![Point::new(5.0, 10.0), Point::new(5.0, 10.0)]);
    }

    #[test]
    fn pcg_scatter_is_deterministic_per_seed() {
        let mut a = PcgScatter::with_seed(42);
        let mut b = PcgScatter::with_seed(42);
        for _ in 0..16 {
            let value = a.next_unit();
            assert!((0.0..1.0).contains(&value));
            assert_eq!(value, b.next_unit());
        }
    }

    #[test]
    fn unknown_tool_paints_nothing() {
        let mut canvas = Canvas::new(20, 20, WHITE).unwrap();
        let brush = BrushConfig {
            tool: None,
            ..BrushConfig::default()
        };
        let mut scatter = PcgScatter::with_seed(1);
        paint_sample(&mut canvas, Point::new(10.0, 10.0), &brush, &mut scatter, 50).unwrap();
        assert!(canvas.is_blank());
        assert_eq!(canvas.cursor(), None);
    }

    #[test]
    fn spray_leaves_path_cursor_alone() {
        let mut canvas = Canvas::new(40, 40, WHITE).unwrap();
        let brush = BrushConfig {
            tool: Some(Tool::Spray),
            ..BrushConfig::default()
        };
        let mut scatter = PcgScatter::with_seed(3);
        paint_sample(&mut canvas, Point::new(20.0, 20.0), &brush, &mut scatter, 50).unwrap();
        assert!(!canvas.is_blank());
        assert_eq!(canvas.cursor(), None);
    }

    #[test]
    fn pencil_click_leaves_a_dot() {
        let mut canvas = Canvas::new(20, 20, WHITE).unwrap();
        let brush = BrushConfig {
            size: 6.0,
            ..BrushConfig::default()
        };
        let mut scatter = PcgScatter::with_seed(1);
        paint_sample(&mut canvas, Point::new(10.0, 10.0), &brush, &mut scatter, 50).unwrap();
        assert_eq!(canvas.pixel(10, 10), Some([0, 0, 0, 255]));
        assert_eq!(canvas.cursor(), Some(Point::new(10.0, 10.0)));
    }
}
