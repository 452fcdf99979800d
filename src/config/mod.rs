//! Configuration file support for scribbleboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/scribbleboard/config.toml`. Settings include brush defaults,
//! board surface sizing and export destinations.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{BoardConfig, DrawingConfig, ExportConfig};

use crate::draw::{BrushConfig, Color, FontDescriptor, Tool};
use crate::export::FileSaveConfig;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "#1e90ff"
/// default_size = 8.0
/// default_tool = "marker"
/// spray_density = 80
///
/// [board]
/// background_color = [1.0, 1.0, 0.95]
/// width_fraction = 0.9
/// height_fraction = 0.7
///
/// [export]
/// save_directory = "~/Pictures/Scribbleboard"
/// filename_template = "drawing_%Y-%m-%d_%H%M%S"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Brush defaults (color, size, tool, spray density, font)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Board surface settings (background, sizing, text anchor)
    #[serde(default)]
    pub board: BoardConfig,

    /// Save/share settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_size`: 1.0 - 100.0
    /// - `spray_density`: 1 - 1000
    /// - `width_fraction` / `height_fraction`: 0.1 - 1.0
    /// - `background_color` components: 0.0 - 1.0
    fn validate_and_clamp(&mut self) {
        if !(1.0..=100.0).contains(&self.drawing.default_size) {
            warn!(
                "Invalid default_size {:.1}, clamping to 1.0-100.0 range",
                self.drawing.default_size
            );
            self.drawing.default_size = if self.drawing.default_size.is_nan() {
                1.0
            } else {
                self.drawing.default_size.clamp(1.0, 100.0)
            };
        }

        if !(1..=1000).contains(&self.drawing.spray_density) {
            warn!(
                "Invalid spray_density {}, clamping to 1-1000 range",
                self.drawing.spray_density
            );
            self.drawing.spray_density = self.drawing.spray_density.clamp(1, 1000);
        }

        if Tool::from_name(&self.drawing.default_tool).is_none() {
            warn!(
                "Invalid default_tool '{}', falling back to 'pencil'",
                self.drawing.default_tool
            );
            self.drawing.default_tool = "pencil".to_string();
        }

        for (name, fraction) in [
            ("width_fraction", &mut self.board.width_fraction),
            ("height_fraction", &mut self.board.height_fraction),
        ] {
            let value = *fraction;
            if !(0.1..=1.0).contains(&value) {
                warn!("Invalid {} {:.2}, clamping to 0.1-1.0 range", name, value);
                *fraction = if value.is_nan() {
                    1.0
                } else {
                    value.clamp(0.1, 1.0)
                };
            }
        }

        for i in 0..3 {
            if !(0.0..=1.0).contains(&self.board.background_color[i]) {
                warn!(
                    "Invalid background_color[{}] = {:.3}, clamping to 0.0-1.0",
                    i, self.board.background_color[i]
                );
                self.board.background_color[i] = self.board.background_color[i].clamp(0.0, 1.0);
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/scribbleboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("scribbleboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file
    /// does not exist. Loaded values are validated and clamped.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the configuration to `config_path`, creating parent directories.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Brush the board starts with.
    pub fn initial_brush(&self) -> BrushConfig {
        BrushConfig {
            color: self.drawing.default_color.to_color(),
            size: self.drawing.default_size,
            tool: Tool::from_name(&self.drawing.default_tool),
        }
    }

    /// Board background, also painted by the eraser.
    pub fn background(&self) -> Color {
        let [r, g, b] = self.board.background_color;
        Color::new(r, g, b, 1.0)
    }

    pub fn font(&self) -> FontDescriptor {
        FontDescriptor::new(self.drawing.font_family.clone())
    }

    pub fn file_save_config(&self) -> FileSaveConfig {
        FileSaveConfig {
            save_directory: crate::export::file::expand_tilde(&self.export.save_directory),
            filename_template: self.export.filename_template.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, WHITE};
    use tempfile::TempDir;

    #[test]
    fn defaults_match_board_conventions() {
        let config = Config::default();
        assert_eq!(config.initial_brush(), BrushConfig::default());
        assert_eq!(config.background(), WHITE);
        assert_eq!(config.drawing.spray_density, 50);
        assert_eq!(config.board.width_fraction, 0.9);
        assert_eq!(config.board.height_fraction, 0.7);
        assert_eq!(config.board.text_anchor, [50.0, 50.0]);
        assert_eq!(config.export.filename_template, "drawing");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config.drawing.default_size, 5.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[drawing]
default_size = 500.0
spray_density = 0
default_tool = "crayon"

[board]
width_fraction = 2.0
height_fraction = 0.0
background_color = [1.5, -0.5, 0.5]
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.default_size, 100.0);
        assert_eq!(config.drawing.spray_density, 1);
        assert_eq!(config.drawing.default_tool, "pencil");
        assert_eq!(config.board.width_fraction, 1.0);
        assert_eq!(config.board.height_fraction, 0.1);
        assert_eq!(config.board.background_color, [1.0, 0.0, 0.5]);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[drawing\ndefault_size = ").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn save_then_load_preserves_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.drawing.default_color = ColorSpec::Rgb([0, 0, 0]);
        config.drawing.default_tool = "highlighter".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.initial_brush().tool, Some(Tool::Highlighter));
        assert_eq!(loaded.initial_brush().color, BLACK);
    }

    #[test]
    fn schema_names_every_section() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("drawing"));
        assert!(schema.contains("board"));
        assert!(schema.contains("export"));
    }
}
