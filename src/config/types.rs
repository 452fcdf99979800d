//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::DEFAULT_SPRAY_DENSITY;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Brush defaults applied when the board starts.
///
/// The tool, color and size pickers change these at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial brush color - a named color, a `#rrggbb` string, or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Initial brush size in pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_size")]
    pub default_size: f64,

    /// Initial tool: pencil, marker, eraser, spray or highlighter
    #[serde(default = "default_tool")]
    pub default_tool: String,

    /// Dots emitted per spray sample (valid range: 1 - 1000)
    #[serde(default = "default_spray_density")]
    pub spray_density: usize,

    /// Font family used by the add-text command
    #[serde(default = "default_font_family")]
    pub font_family: String,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_size: default_size(),
            default_tool: default_tool(),
            spray_density: default_spray_density(),
            font_family: default_font_family(),
        }
    }
}

/// Board surface settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BoardConfig {
    /// Background color as [R, G, B] (0.0-1.0); also the eraser color
    #[serde(default = "default_background_color")]
    pub background_color: [f64; 3],

    /// Surface width as a fraction of the viewport width (valid range: 0.1 - 1.0)
    #[serde(default = "default_width_fraction")]
    pub width_fraction: f64,

    /// Surface height as a fraction of the viewport height (valid range: 0.1 - 1.0)
    #[serde(default = "default_height_fraction")]
    pub height_fraction: f64,

    /// Baseline position [x, y] where the add-text command stamps text
    #[serde(default = "default_text_anchor")]
    pub text_anchor: [f64; 2],
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
            width_fraction: default_width_fraction(),
            height_fraction: default_height_fraction(),
            text_anchor: default_text_anchor(),
        }
    }
}

/// Save and share settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory for saved drawings (supports ~ expansion)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// Filename template without extension (supports chrono format specifiers)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Title attached to shared drawings
    #[serde(default = "default_share_title")]
    pub share_title: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
            share_title: default_share_title(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("#000000".to_string())
}

fn default_size() -> f64 {
    5.0
}

fn default_tool() -> String {
    "pencil".to_string()
}

fn default_spray_density() -> usize {
    DEFAULT_SPRAY_DENSITY
}

fn default_font_family() -> String {
    "Arial".to_string()
}

fn default_background_color() -> [f64; 3] {
    [1.0, 1.0, 1.0]
}

fn default_width_fraction() -> f64 {
    0.9
}

fn default_height_fraction() -> f64 {
    0.7
}

fn default_text_anchor() -> [f64; 2] {
    [50.0, 50.0]
}

fn default_save_directory() -> String {
    "~/Pictures/Scribbleboard".to_string()
}

fn default_filename_template() -> String {
    "drawing".to_string()
}

fn default_share_title() -> String {
    "My Drawing".to_string()
}
