//! Drawing state machine and board state management.

use crate::config::Config;
use crate::draw::{BrushConfig, Canvas, FontDescriptor, PcgScatter, Point, ScatterSource};
use crate::export::{ClipboardShare, FileSaveConfig, ShareTarget};
use crate::input::events::InputEvent;
use crate::input::touch::normalize_touch;
use crate::notification::{DesktopNotifier, Notifier};

/// Current drawing session state.
///
/// A session spans one pointer-down to the next pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawingState {
    /// Not drawing - pointer moves are ignored
    Idle,
    /// Pointer held down; samples are painted. The canvas cursor holds the
    /// last sample.
    Drawing,
}

/// Layout and export settings the board reads but never changes.
#[derive(Debug, Clone)]
pub struct BoardSettings {
    /// Dots per spray sample
    pub spray_density: usize,
    /// Baseline start for stamped text
    pub text_anchor: Point,
    /// Font used for stamped text
    pub font: FontDescriptor,
    /// Surface width as a fraction of the viewport width
    pub width_fraction: f64,
    /// Surface height as a fraction of the viewport height
    pub height_fraction: f64,
    /// Where saved drawings go
    pub save: FileSaveConfig,
    /// Title passed along with shared drawings
    pub share_title: String,
}

impl BoardSettings {
    pub fn from_config(config: &Config) -> Self {
        let [anchor_x, anchor_y] = config.board.text_anchor;
        Self {
            spray_density: config.drawing.spray_density,
            text_anchor: Point::new(anchor_x, anchor_y),
            font: config.font(),
            width_fraction: config.board.width_fraction,
            height_fraction: config.board.height_fraction,
            save: config.file_save_config(),
            share_title: config.export.share_title.clone(),
        }
    }
}

/// The drawing board: surface, live brush, session state and collaborators.
///
/// Events are handled one at a time through `&mut self`; nothing here is
/// shared across threads.
pub struct Board {
    /// The raster surface
    pub canvas: Canvas,
    /// Brush applied to the next sample
    pub brush: BrushConfig,
    /// Current session state
    pub state: DrawingState,
    /// Client position of the surface's top-left corner (for touch mapping)
    pub origin: Point,
    pub(crate) settings: BoardSettings,
    pub(crate) scatter: Box<dyn ScatterSource>,
    pub(crate) share_target: Box<dyn ShareTarget>,
    pub(crate) notifier: Box<dyn Notifier>,
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("canvas", &self.canvas)
            .field("brush", &self.brush)
            .field("state", &self.state)
            .field("origin", &self.origin)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Board {
    /// Creates a board with a blank `width` x `height` surface.
    ///
    /// Spray uses a clock-seeded generator, sharing goes to the clipboard and
    /// notices go to the desktop notification service.
    pub fn new(config: &Config, width: i32, height: i32) -> Result<Self, cairo::Error> {
        let canvas = Canvas::new(width, height, config.background())?;
        Ok(Self {
            canvas,
            brush: config.initial_brush(),
            state: DrawingState::Idle,
            origin: Point::new(0.0, 0.0),
            settings: BoardSettings::from_config(config),
            scatter: Box::new(PcgScatter::from_clock()),
            share_target: Box::new(ClipboardShare),
            notifier: Box::new(DesktopNotifier),
        })
    }

    /// Creates a board sized for a viewport (see [`Board::resize_to_viewport`]).
    pub fn for_viewport(config: &Config, width: u32, height: u32) -> Result<Self, cairo::Error> {
        let (w, h) = crate::util::surface_size(
            width,
            height,
            config.board.width_fraction,
            config.board.height_fraction,
        );
        Self::new(config, w, h)
    }

    /// Replaces the spray randomness source.
    pub fn with_scatter(mut self, scatter: impl ScatterSource + 'static) -> Self {
        self.scatter = Box::new(scatter);
        self
    }

    /// Replaces the share target.
    pub fn with_share_target(mut self, target: impl ShareTarget + 'static) -> Self {
        self.share_target = Box::new(target);
        self
    }

    /// Replaces the notifier used for user-facing notices.
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn settings(&self) -> &BoardSettings {
        &self.settings
    }

    /// Whether a drawing session is in progress.
    pub fn is_drawing(&self) -> bool {
        self.state == DrawingState::Drawing
    }

    /// Dispatches one input event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Pointer(pointer) => self.on_pointer(pointer),
            InputEvent::Touch(touch) => {
                if let Some(pointer) = normalize_touch(&touch, self.origin) {
                    self.on_pointer(pointer);
                }
            }
            InputEvent::Action(action) => {
                self.handle_action(action);
            }
            InputEvent::SurfaceOrigin(origin) => {
                log::debug!("Surface origin moved to ({}, {})", origin.x, origin.y);
                self.origin = origin;
            }
        }
    }
}
