//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::tool::{FillMode, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the tool state the canvas starts with. Users can change these
/// values at runtime from the toolbar or with keybindings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default pen color - a named color, a `#rrggbb` hex string, or an RGB
    /// array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default brush width in pixels (valid range: 1 - 40)
    #[serde(default = "default_width")]
    pub default_width: u32,

    /// Tool selected at startup (freehand, line, rectangle, oval, eraser)
    #[serde(default)]
    pub default_tool: Tool,

    /// Fill mode at startup (outline, filled, both)
    #[serde(default)]
    pub default_fill_mode: FillMode,

    /// Canvas background. The eraser paints with this color.
    #[serde(default = "default_canvas_background")]
    pub canvas_background: ColorSpec,

    /// Outline color for shapes drawn in the "both" fill mode
    #[serde(default = "default_contrast_outline")]
    pub contrast_outline: ColorSpec,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
            default_tool: Tool::default(),
            default_fill_mode: FillMode::default(),
            canvas_background: default_canvas_background(),
            contrast_outline: default_contrast_outline(),
        }
    }
}

/// PNG export settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory offered by the save prompt (supports `~/`)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// Filename template using chrono strftime syntax, without extension
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Image format. Only "png" is supported.
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
            format: default_format(),
        }
    }
}

/// Performance tuning options.
///
/// These settings control rendering performance and smoothness. Most users
/// won't need to change these from their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PerformanceConfig {
    /// Number of buffers in the shared memory pool (valid range: 2 - 4)
    /// - 2 = double buffering (lower memory)
    /// - 3 = triple buffering (balanced, recommended)
    /// - 4 = quad buffering (highest memory)
    #[serde(default = "default_buffer_count")]
    pub buffer_count: u32,

    /// Wait for frame callbacks before redrawing
    /// Set to false for lower latency while dragging
    #[serde(default = "default_enable_vsync")]
    pub enable_vsync: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            buffer_count: default_buffer_count(),
            enable_vsync: default_enable_vsync(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Initial window width in pixels
    #[serde(default = "default_window_width")]
    pub window_width: u32,

    /// Initial window height in pixels
    #[serde(default = "default_window_height")]
    pub window_height: u32,

    /// Show the status bar with tool, color, width, fill mode and pointer position
    #[serde(default = "default_show_status")]
    pub show_status_bar: bool,

    /// Also report save results through desktop notifications
    #[serde(default)]
    pub desktop_notifications: bool,

    /// Toolbar styling options
    #[serde(default)]
    pub toolbar_style: ToolbarStyle,

    /// Status bar styling options
    #[serde(default)]
    pub status_bar_style: StatusBarStyle,

    /// Help overlay and dialog styling options
    #[serde(default)]
    pub help_overlay_style: HelpOverlayStyle,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            show_status_bar: default_show_status(),
            desktop_notifications: false,
            toolbar_style: ToolbarStyle::default(),
            status_bar_style: StatusBarStyle::default(),
            help_overlay_style: HelpOverlayStyle::default(),
        }
    }
}

/// Toolbar styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ToolbarStyle {
    /// Strip height in pixels
    #[serde(default = "default_toolbar_height")]
    pub height: f64,

    /// Font size for button labels
    #[serde(default = "default_toolbar_font_size")]
    pub font_size: f64,

    /// Gap between buttons and around the strip
    #[serde(default = "default_toolbar_spacing")]
    pub spacing: f64,

    /// Strip background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_toolbar_bg_color")]
    pub bg_color: [f64; 4],

    /// Button face color [R, G, B, A]
    #[serde(default = "default_toolbar_button_color")]
    pub button_color: [f64; 4],

    /// Highlight for the selected tool and fill mode [R, G, B, A]
    #[serde(default = "default_toolbar_active_color")]
    pub active_color: [f64; 4],

    /// Label color [R, G, B, A]
    #[serde(default = "default_toolbar_text_color")]
    pub text_color: [f64; 4],

    /// Label color for disabled buttons [R, G, B, A]
    #[serde(default = "default_toolbar_disabled_color")]
    pub disabled_text_color: [f64; 4],
}

impl Default for ToolbarStyle {
    fn default() -> Self {
        Self {
            height: default_toolbar_height(),
            font_size: default_toolbar_font_size(),
            spacing: default_toolbar_spacing(),
            bg_color: default_toolbar_bg_color(),
            button_color: default_toolbar_button_color(),
            active_color: default_toolbar_active_color(),
            text_color: default_toolbar_text_color(),
            disabled_text_color: default_toolbar_disabled_color(),
        }
    }
}

/// Status bar styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StatusBarStyle {
    /// Font size for status bar text
    #[serde(default = "default_status_font_size")]
    pub font_size: f64,

    /// Padding around status bar text
    #[serde(default = "default_status_padding")]
    pub padding: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_status_bg_color")]
    pub bg_color: [f64; 4],

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_status_text_color")]
    pub text_color: [f64; 4],

    /// Color indicator dot radius
    #[serde(default = "default_status_dot_radius")]
    pub dot_radius: f64,
}

impl Default for StatusBarStyle {
    fn default() -> Self {
        Self {
            font_size: default_status_font_size(),
            padding: default_status_padding(),
            bg_color: default_status_bg_color(),
            text_color: default_status_text_color(),
            dot_radius: default_status_dot_radius(),
        }
    }
}

/// Help overlay styling configuration, shared by the notice and save dialogs.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HelpOverlayStyle {
    /// Font size for overlay text
    #[serde(default = "default_help_font_size")]
    pub font_size: f64,

    /// Line height for overlay text
    #[serde(default = "default_help_line_height")]
    pub line_height: f64,

    /// Padding around the box
    #[serde(default = "default_help_padding")]
    pub padding: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_bg_color")]
    pub bg_color: [f64; 4],

    /// Border color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_border_color")]
    pub border_color: [f64; 4],

    /// Border line width
    #[serde(default = "default_help_border_width")]
    pub border_width: f64,

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_text_color")]
    pub text_color: [f64; 4],
}

impl Default for HelpOverlayStyle {
    fn default() -> Self {
        Self {
            font_size: default_help_font_size(),
            line_height: default_help_line_height(),
            padding: default_help_padding(),
            bg_color: default_help_bg_color(),
            border_color: default_help_border_color(),
            border_width: default_help_border_width(),
            text_color: default_help_text_color(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_width() -> u32 {
    4
}

fn default_canvas_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_contrast_outline() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_save_directory() -> String {
    "~/Pictures/Sketchboard".to_string()
}

fn default_filename_template() -> String {
    "sketch_%Y-%m-%d_%H%M%S".to_string()
}

fn default_format() -> String {
    "png".to_string()
}

fn default_buffer_count() -> u32 {
    3
}

fn default_enable_vsync() -> bool {
    true
}

fn default_window_width() -> u32 {
    1000
}

fn default_window_height() -> u32 {
    700
}

fn default_show_status() -> bool {
    true
}

fn default_toolbar_height() -> f64 {
    44.0
}

fn default_toolbar_font_size() -> f64 {
    13.0
}

fn default_toolbar_spacing() -> f64 {
    6.0
}

fn default_toolbar_bg_color() -> [f64; 4] {
    [0.93, 0.93, 0.93, 1.0]
}

fn default_toolbar_button_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_toolbar_active_color() -> [f64; 4] {
    [0.3, 0.6, 1.0, 1.0]
}

fn default_toolbar_text_color() -> [f64; 4] {
    [0.1, 0.1, 0.1, 1.0]
}

fn default_toolbar_disabled_color() -> [f64; 4] {
    [0.6, 0.6, 0.6, 1.0]
}

fn default_status_font_size() -> f64 {
    13.0
}

fn default_status_padding() -> f64 {
    6.0
}

fn default_status_bg_color() -> [f64; 4] {
    [0.15, 0.15, 0.15, 1.0]
}

fn default_status_text_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_status_dot_radius() -> f64 {
    5.0
}

fn default_help_font_size() -> f64 {
    15.0
}

fn default_help_line_height() -> f64 {
    21.0
}

fn default_help_padding() -> f64 {
    18.0
}

fn default_help_bg_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 0.85]
}

fn default_help_border_color() -> [f64; 4] {
    [0.3, 0.6, 1.0, 0.9]
}

fn default_help_border_width() -> f64 {
    2.0
}

fn default_help_text_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}
