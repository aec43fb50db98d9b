//! Configuration file support for sketchboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchboard/config.toml` (or a path given on the command line).
//! Settings include drawing defaults, export location, window and UI preferences,
//! and keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{
    DrawingConfig, ExportConfig, HelpOverlayStyle, PerformanceConfig, StatusBarStyle,
    ToolbarStyle, UiConfig,
};

use crate::draw::color::{BLACK, WHITE};
use crate::draw::Color;
use crate::input::settings::{InteractionState, MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Narrowest window; the default toolbar wraps into three rows at this width.
pub const MIN_WINDOW_WIDTH: u32 = 640;
/// Shortest window that still leaves a usable canvas under a three-row toolbar.
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// default_width = 4
/// default_tool = "freehand"
/// default_fill_mode = "outline"
///
/// [export]
/// save_directory = "~/Pictures/Sketchboard"
///
/// [ui]
/// window_width = 1000
/// window_height = 700
///
/// [keybindings]
/// undo = ["Ctrl+Z"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Startup tool state (color, width, tool, fill mode) and canvas colors
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// PNG export location and naming
    #[serde(default)]
    pub export: ExportConfig,

    /// Performance tuning options
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// Window and UI display preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or reset to the
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_width`: 1 - 40
    /// - `buffer_count`: 2 - 4
    /// - `window_width` / `window_height`: at least 200 x 150
    /// - `format`: "png"
    pub fn validate_and_clamp(&mut self) {
        let width_range = MIN_BRUSH_WIDTH..=MAX_BRUSH_WIDTH;
        if !width_range.contains(&self.drawing.default_width) {
            warn!(
                "Invalid default_width {}, clamping to {}-{} range",
                self.drawing.default_width, MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH
            );
            self.drawing.default_width = self
                .drawing
                .default_width
                .clamp(MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH);
        }

        for (name, spec, fallback) in [
            ("default_color", &mut self.drawing.default_color, "black"),
            ("canvas_background", &mut self.drawing.canvas_background, "white"),
            ("contrast_outline", &mut self.drawing.contrast_outline, "black"),
        ] {
            if !spec.is_valid() {
                warn!("Invalid {} {:?}, falling back to '{}'", name, spec, fallback);
                *spec = ColorSpec::from(fallback);
            }
        }

        if !(2..=4).contains(&self.performance.buffer_count) {
            warn!(
                "Invalid buffer_count {}, clamping to 2-4 range",
                self.performance.buffer_count
            );
            self.performance.buffer_count = self.performance.buffer_count.clamp(2, 4);
        }

        if self.ui.window_width < MIN_WINDOW_WIDTH || self.ui.window_height < MIN_WINDOW_HEIGHT {
            warn!(
                "Window size {}x{} too small, using at least {}x{}",
                self.ui.window_width, self.ui.window_height, MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT
            );
            self.ui.window_width = self.ui.window_width.max(MIN_WINDOW_WIDTH);
            self.ui.window_height = self.ui.window_height.max(MIN_WINDOW_HEIGHT);
        }

        if !self.export.format.eq_ignore_ascii_case("png") {
            warn!(
                "Unsupported export format '{}', falling back to 'png'",
                self.export.format
            );
            self.export.format = "png".to_string();
        }

        if self.export.filename_template.trim().is_empty() {
            warn!("Empty filename_template, using default");
            self.export.filename_template = ExportConfig::default().filename_template;
        }
    }

    /// Returns the path to the default configuration file.
    ///
    /// The config file is located at `~/.config/sketchboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from a specific file, or returns defaults if it does not exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses a config from TOML text and validates it.
    pub fn from_toml(text: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(text)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// JSON schema describing the config file, for editor integration.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Startup interaction state built from the drawing section.
    pub fn initial_interaction_state(&self) -> InteractionState {
        InteractionState::new(
            self.drawing.default_tool,
            self.drawing.default_color.to_color_or(BLACK),
            self.drawing.default_width,
            self.drawing.default_fill_mode,
        )
    }

    pub fn canvas_background(&self) -> Color {
        self.drawing.canvas_background.to_color_or(WHITE)
    }

    pub fn contrast_outline(&self) -> Color {
        self.drawing.contrast_outline.to_color_or(BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;
    use crate::input::tool::{FillMode, Tool};

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        let state = config.initial_interaction_state();
        assert_eq!(state.tool(), Tool::Freehand);
        assert_eq!(state.color(), BLACK);
        assert_eq!(state.brush_width(), 4);
        assert_eq!(state.fill_mode(), FillMode::Outline);
        assert_eq!(config.canvas_background(), WHITE);
        assert_eq!(config.ui.window_width, 1000);
        assert_eq!(config.ui.window_height, 700);
        assert!(!config.ui.desktop_notifications);
    }

    #[test]
    fn drawing_section_is_parsed() {
        let config = Config::from_toml(
            r##"
            [drawing]
            default_color = "#ff0000"
            default_width = 12
            default_tool = "oval"
            default_fill_mode = "both"
            contrast_outline = [0, 0, 255]
            "##,
        )
        .unwrap();

        let state = config.initial_interaction_state();
        assert_eq!(state.color(), RED);
        assert_eq!(state.brush_width(), 12);
        assert_eq!(state.tool(), Tool::Oval);
        assert_eq!(state.fill_mode(), FillMode::Both);
        assert_eq!(config.contrast_outline(), crate::draw::BLUE);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml(
            r#"
            [drawing]
            default_width = 400
            default_color = "not-a-color"

            [performance]
            buffer_count = 9

            [export]
            format = "jpeg"

            [ui]
            window_width = 300
            window_height = 2000
            "#,
        )
        .unwrap();

        assert_eq!(config.drawing.default_width, MAX_BRUSH_WIDTH);
        assert_eq!(config.drawing.default_color, ColorSpec::from("black"));
        assert_eq!(config.performance.buffer_count, 4);
        assert_eq!(config.export.format, "png");
        assert_eq!(config.ui.window_width, MIN_WINDOW_WIDTH);
        assert_eq!(config.ui.window_height, 2000);
    }

    #[test]
    fn unknown_tool_is_a_parse_error() {
        assert!(Config::from_toml("[drawing]\ndefault_tool = \"spray\"").is_err());
    }

    #[test]
    fn missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.export.format, "png");
    }

    #[test]
    fn file_on_disk_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[keybindings]\nundo = [\"Ctrl+U\"]\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.keybindings.undo, vec!["Ctrl+U".to_string()]);
        assert!(config.keybindings.build_action_map().is_ok());
    }

    #[test]
    fn schema_mentions_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        for section in ["drawing", "export", "ui", "keybindings"] {
            assert!(schema.contains(section), "schema missing {}", section);
        }
    }
}
