use crate::draw::{Color, TEXT_SCALE, Tool, stamp_text};
use crate::export::{ExportError, ExportOutcome, save_drawing};
use crate::input::events::Action;

use super::Board;

/// Notice shown when no share target is available.
pub const SHARE_UNSUPPORTED_NOTICE: &str = "Sharing not supported on this system.";

impl Board {
    /// Executes a command or picker change.
    ///
    /// Save and share report what happened; every other action yields `None`.
    /// No action is fatal: failures are logged or shown to the user.
    pub fn handle_action(&mut self, action: Action) -> Option<ExportOutcome> {
        match action {
            Action::SelectTool(name) => self.select_tool(&name),
            Action::SelectColor(value) => self.select_color(&value),
            Action::SelectSize(size) => self.select_size(size),
            Action::Clear => self.clear(),
            Action::AddText(text) => {
                self.add_text(text.as_deref());
            }
            Action::Save => return Some(self.save()),
            Action::Share => return Some(self.share()),
            Action::Resize { width, height } => self.resize_to_viewport(width, height),
        }
        None
    }

    /// Switches the active tool.
    ///
    /// An unrecognized name is kept as "no tool": later samples paint nothing
    /// until a known tool is picked.
    pub fn select_tool(&mut self, name: &str) {
        let tool = Tool::from_name(name);
        if tool.is_none() {
            log::warn!("Unknown tool '{}'; drawing disabled until a tool is picked", name);
        } else {
            log::debug!("Tool set to {}", name);
        }
        self.brush.tool = tool;
    }

    /// Switches the brush color. Unparseable values keep the current color.
    pub fn select_color(&mut self, value: &str) {
        match Color::parse(value) {
            Some(color) => {
                log::debug!("Color set to {}", color.to_hex());
                self.brush.color = color;
            }
            None => log::warn!("Ignoring invalid color '{}'", value),
        }
    }

    /// Sets the brush size. Values are not clamped; non-positive sizes paint
    /// nothing visible.
    pub fn select_size(&mut self, size: f64) {
        if size <= 0.0 {
            log::debug!("Brush size {} will produce invisible strokes", size);
        }
        self.brush.size = size;
    }

    /// Wipes the surface to the background color.
    pub fn clear(&mut self) {
        if let Err(err) = self.canvas.clear() {
            log::warn!("Failed to clear canvas: {}", err);
        }
        log::info!("Canvas cleared");
    }

    /// Resizes the surface for a new viewport size. The surface is cleared.
    pub fn resize_to_viewport(&mut self, width: u32, height: u32) {
        let (w, h) = crate::util::surface_size(
            width,
            height,
            self.settings.width_fraction,
            self.settings.height_fraction,
        );
        log::debug!("Viewport {}x{} -> surface {}x{}", width, height, w, h);
        if let Err(err) = self.canvas.resize(w, h) {
            log::warn!("Failed to resize canvas to {}x{}: {}", w, h, err);
        }
    }

    /// Stamps text at the anchor with the brush color at `size * 5` pixels.
    ///
    /// Returns `false` when the text was absent or empty and nothing was drawn.
    pub fn add_text(&mut self, text: Option<&str>) -> bool {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            log::debug!("No text entered; nothing stamped");
            return false;
        };

        match stamp_text(
            &mut self.canvas,
            self.settings.text_anchor,
            text,
            self.brush.color,
            self.brush.size * TEXT_SCALE,
            &self.settings.font,
        ) {
            Ok(stamped) => stamped,
            Err(err) => {
                log::warn!("Failed to stamp text: {}", err);
                false
            }
        }
    }

    /// Writes the current surface to a PNG file.
    pub fn save(&self) -> ExportOutcome {
        let result = self
            .canvas
            .to_png()
            .map_err(ExportError::from)
            .and_then(|png| save_drawing(&png, &self.settings.save));

        match result {
            Ok(path) => ExportOutcome::Saved(path),
            Err(err) => {
                log::error!("Save failed: {}", err);
                ExportOutcome::Failed(err.to_string())
            }
        }
    }

    /// Hands the current surface to the share target as PNG.
    ///
    /// When the system cannot share at all the user gets a notice instead.
    pub fn share(&self) -> ExportOutcome {
        let filename = self.settings.save.file_name();
        let result = self.canvas.to_png().map_err(ExportError::from).and_then(|png| {
            self.share_target
                .share(&self.settings.share_title, &filename, &png)
        });

        match result {
            Ok(()) => ExportOutcome::Shared,
            Err(ExportError::ShareUnsupported) => {
                log::info!("Share requested but no share target is available");
                self.notifier
                    .alert(&self.settings.share_title, SHARE_UNSUPPORTED_NOTICE);
                ExportOutcome::Unsupported
            }
            Err(err) => {
                log::error!("Share failed: {}", err);
                ExportOutcome::Failed(err.to_string())
            }
        }
    }
}
