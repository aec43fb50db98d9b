//! Keybinding configuration types and parsing.
//!
//! This module defines the configurable keybinding system that allows users
//! to customize keyboard shortcuts for every action the toolbar offers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Every command the UI can dispatch, from a key or a toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Exit and cancellation
    Exit,

    // History and file
    Undo,
    Redo,
    ClearCanvas,
    Save,

    // Tool selection
    SelectFreehand,
    SelectLine,
    SelectRectangle,
    SelectOval,
    SelectEraser,

    // Brush width
    IncreaseWidth,
    DecreaseWidth,

    // Fill mode
    FillOutline,
    FillFilled,
    FillBoth,
    CycleFillMode,

    // UI toggles
    ToggleHelp,
    ToggleStatusBar,

    // Color selections
    SetColorRed,
    SetColorGreen,
    SetColorBlue,
    SetColorYellow,
    SetColorOrange,
    SetColorPink,
    SetColorPurple,
    SetColorBlack,
    PickColor,
}

impl Action {
    /// Short description used by the help overlay.
    pub fn description(self) -> &'static str {
        match self {
            Action::Exit => "Exit",
            Action::Undo => "Undo",
            Action::Redo => "Redo",
            Action::ClearCanvas => "Clear canvas",
            Action::Save => "Save as PNG",
            Action::SelectFreehand => "Freehand tool",
            Action::SelectLine => "Line tool",
            Action::SelectRectangle => "Rectangle tool",
            Action::SelectOval => "Oval tool",
            Action::SelectEraser => "Eraser tool",
            Action::IncreaseWidth => "Wider brush",
            Action::DecreaseWidth => "Narrower brush",
            Action::FillOutline => "Fill: outline",
            Action::FillFilled => "Fill: filled",
            Action::FillBoth => "Fill: both",
            Action::CycleFillMode => "Cycle fill mode",
            Action::ToggleHelp => "Toggle help",
            Action::ToggleStatusBar => "Toggle status bar",
            Action::SetColorRed => "Red",
            Action::SetColorGreen => "Green",
            Action::SetColorBlue => "Blue",
            Action::SetColorYellow => "Yellow",
            Action::SetColorOrange => "Orange",
            Action::SetColorPink => "Pink",
            Action::SetColorPurple => "Purple",
            Action::SetColorBlack => "Black",
            Action::PickColor => "Pick color (hex)",
        }
    }
}

/// A single keybinding: a key name with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Shift+W" or "Escape".
    ///
    /// Modifiers can appear in any order and spaces around `+` are ignored.
    /// A trailing `+` names the plus key itself, so "Ctrl++" is Ctrl and plus.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let normalized: String = s.split('+').map(str::trim).collect::<Vec<_>>().join("+");

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key_parts = Vec::new();

        for part in normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(format!("No key specified in: {}", s));
        }

        // "Ctrl++" splits into ["Ctrl", "", ""]; the empty pieces are the plus key
        let key = key_parts.join("+");
        let key = if key.chars().all(|c| c == '+') {
            "+".to_string()
        } else {
            key
        };

        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
        })
    }

    /// Check if this keybinding matches the current input state.
    ///
    /// Symbol keys such as `+` already encode Shift in the key itself, so a
    /// binding without Shift still matches when Shift is held for them.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        let shift_matches = self.shift == shift || (!self.shift && is_shifted_symbol(key));
        self.key.eq_ignore_ascii_case(key) && self.ctrl == ctrl && shift_matches && self.alt == alt
    }
}

fn is_shifted_symbol(key: &str) -> bool {
    let mut chars = key.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_punctuation())
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// exit = ["Escape", "Ctrl+Q"]
/// undo = ["Ctrl+Z"]
/// select_rectangle = ["3", "Alt+R"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct KeybindingsConfig {
    pub exit: Vec<String>,
    pub undo: Vec<String>,
    pub redo: Vec<String>,
    pub clear_canvas: Vec<String>,
    pub save: Vec<String>,

    pub select_freehand: Vec<String>,
    pub select_line: Vec<String>,
    pub select_rectangle: Vec<String>,
    pub select_oval: Vec<String>,
    pub select_eraser: Vec<String>,

    pub increase_width: Vec<String>,
    pub decrease_width: Vec<String>,

    pub fill_outline: Vec<String>,
    pub fill_filled: Vec<String>,
    pub fill_both: Vec<String>,
    pub cycle_fill_mode: Vec<String>,

    pub toggle_help: Vec<String>,
    pub toggle_status_bar: Vec<String>,

    pub set_color_red: Vec<String>,
    pub set_color_green: Vec<String>,
    pub set_color_blue: Vec<String>,
    pub set_color_yellow: Vec<String>,
    pub set_color_orange: Vec<String>,
    pub set_color_pink: Vec<String>,
    pub set_color_purple: Vec<String>,
    pub set_color_black: Vec<String>,
    pub pick_color: Vec<String>,
}

fn keys(bindings: &[&str]) -> Vec<String> {
    bindings.iter().map(|s| s.to_string()).collect()
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            exit: keys(&["Escape", "Ctrl+Q"]),
            undo: keys(&["Ctrl+Z"]),
            redo: keys(&["Ctrl+Y"]),
            clear_canvas: keys(&["E"]),
            save: keys(&["Ctrl+S"]),

            select_freehand: keys(&["1"]),
            select_line: keys(&["2"]),
            select_rectangle: keys(&["3"]),
            select_oval: keys(&["4"]),
            select_eraser: keys(&["5"]),

            increase_width: keys(&["+", "="]),
            decrease_width: keys(&["-", "_"]),

            fill_outline: keys(&["Ctrl+1"]),
            fill_filled: keys(&["Ctrl+2"]),
            fill_both: keys(&["Ctrl+3"]),
            cycle_fill_mode: keys(&["F"]),

            toggle_help: keys(&["F1"]),
            toggle_status_bar: keys(&["F12"]),

            set_color_red: keys(&["R"]),
            set_color_green: keys(&["G"]),
            set_color_blue: keys(&["B"]),
            set_color_yellow: keys(&["Y"]),
            set_color_orange: keys(&["O"]),
            set_color_pink: keys(&["P"]),
            set_color_purple: keys(&["V"]),
            set_color_black: keys(&["K"]),
            pick_color: keys(&["C"]),
        }
    }
}

impl KeybindingsConfig {
    /// Binding lists paired with the action they trigger, in help-overlay order.
    pub fn entries(&self) -> [(&[String], Action); 27] {
        [
            (&self.undo, Action::Undo),
            (&self.redo, Action::Redo),
            (&self.save, Action::Save),
            (&self.clear_canvas, Action::ClearCanvas),
            (&self.select_freehand, Action::SelectFreehand),
            (&self.select_line, Action::SelectLine),
            (&self.select_rectangle, Action::SelectRectangle),
            (&self.select_oval, Action::SelectOval),
            (&self.select_eraser, Action::SelectEraser),
            (&self.increase_width, Action::IncreaseWidth),
            (&self.decrease_width, Action::DecreaseWidth),
            (&self.cycle_fill_mode, Action::CycleFillMode),
            (&self.fill_outline, Action::FillOutline),
            (&self.fill_filled, Action::FillFilled),
            (&self.fill_both, Action::FillBoth),
            (&self.set_color_red, Action::SetColorRed),
            (&self.set_color_green, Action::SetColorGreen),
            (&self.set_color_blue, Action::SetColorBlue),
            (&self.set_color_yellow, Action::SetColorYellow),
            (&self.set_color_orange, Action::SetColorOrange),
            (&self.set_color_pink, Action::SetColorPink),
            (&self.set_color_purple, Action::SetColorPurple),
            (&self.set_color_black, Action::SetColorBlack),
            (&self.pick_color, Action::PickColor),
            (&self.toggle_help, Action::ToggleHelp),
            (&self.toggle_status_bar, Action::ToggleStatusBar),
            (&self.exit, Action::Exit),
        ]
        .map(|(bindings, action)| (bindings.as_slice(), action))
    }

    /// Build a lookup map from keybindings to actions for efficient matching.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        for (bindings, action) in self.entries() {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing_action) = map.insert(binding, action) {
                    return Err(format!(
                        "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                        binding_str, existing_action, action
                    ));
                }
            }
        }

        Ok(map)
    }
}
