use crate::draw::{Point, paint_sample};
use crate::input::events::PointerEvent;

use super::{Board, DrawingState};

impl Board {
    /// Processes one pointer event.
    ///
    /// # Behavior
    /// - Down: starts a session and paints the first sample (a dot for a
    ///   stationary click). A down during a session restarts it without
    ///   connecting to the previous path.
    /// - Move: paints a sample while drawing, ignored while idle
    /// - Up: ends the session and resets the path; ignored while idle
    pub fn on_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(at) => {
                if self.is_drawing() {
                    log::debug!("Pointer down during a session; starting a new one");
                    self.canvas.reset_path();
                }
                self.state = DrawingState::Drawing;
                self.paint(at);
            }
            PointerEvent::Move(at) => {
                if self.is_drawing() {
                    self.paint(at);
                }
            }
            PointerEvent::Up => {
                if self.is_drawing() {
                    self.state = DrawingState::Idle;
                    self.canvas.reset_path();
                }
            }
        }
    }

    fn paint(&mut self, at: Point) {
        if let Err(err) = paint_sample(
            &mut self.canvas,
            at,
            &self.brush,
            self.scatter.as_mut(),
            self.settings.spray_density,
        ) {
            log::warn!("Failed to paint sample at ({}, {}): {}", at.x, at.y, err);
        }
    }
}
