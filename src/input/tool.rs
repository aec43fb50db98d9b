//! Drawing tool and fill mode selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Drawing tool selection.
///
/// The active tool determines what primitive is created when the user drags the
/// mouse. The tool is captured when the button goes down, so switching tools in
/// the middle of a drag does not affect the gesture in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// Freehand drawing - follows mouse path (default)
    #[default]
    Freehand,
    /// Straight line between press and release points
    Line,
    /// Axis-aligned rectangle from corner to corner
    Rectangle,
    /// Oval inscribed in the drag box
    Oval,
    /// Freehand stroke in the canvas background color
    Eraser,
}

impl Tool {
    /// All tools in toolbar order.
    pub const ALL: [Tool; 5] = [
        Tool::Freehand,
        Tool::Line,
        Tool::Rectangle,
        Tool::Oval,
        Tool::Eraser,
    ];

    /// Human-readable label shown in the toolbar and status bar.
    pub fn label(self) -> &'static str {
        match self {
            Tool::Freehand => "Freehand",
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Oval => "Oval",
            Tool::Eraser => "Eraser",
        }
    }

    /// Returns true for tools that accumulate a point path while dragging.
    pub fn is_freehand(self) -> bool {
        matches!(self, Tool::Freehand | Tool::Eraser)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "freehand" | "pen" => Ok(Tool::Freehand),
            "line" => Ok(Tool::Line),
            "rectangle" | "rect" => Ok(Tool::Rectangle),
            "oval" | "ellipse" => Ok(Tool::Oval),
            "eraser" => Ok(Tool::Eraser),
            other => Err(format!(
                "unknown tool '{}' (expected freehand, line, rectangle, oval or eraser)",
                other
            )),
        }
    }
}

/// How rectangles and ovals are painted. Lines ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum FillMode {
    /// Stroke only
    #[default]
    Outline,
    /// Interior and stroke both in the current color
    Filled,
    /// Interior in the current color with a contrasting outline
    Both,
}

impl FillMode {
    /// All fill modes in toolbar order.
    pub const ALL: [FillMode; 3] = [FillMode::Outline, FillMode::Filled, FillMode::Both];

    pub fn label(self) -> &'static str {
        match self {
            FillMode::Outline => "Outline",
            FillMode::Filled => "Filled",
            FillMode::Both => "Both",
        }
    }

    /// Next mode in the Outline → Filled → Both cycle.
    pub fn next(self) -> Self {
        match self {
            FillMode::Outline => FillMode::Filled,
            FillMode::Filled => FillMode::Both,
            FillMode::Both => FillMode::Outline,
        }
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FillMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "outline" => Ok(FillMode::Outline),
            "filled" | "fill" => Ok(FillMode::Filled),
            "both" => Ok(FillMode::Both),
            other => Err(format!(
                "unknown fill mode '{}' (expected outline, filled or both)",
                other
            )),
        }
    }
}
