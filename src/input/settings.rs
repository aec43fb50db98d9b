//! Current tool, color, brush width and fill mode.

use super::tool::{FillMode, Tool};
use crate::draw::Color;
use log::debug;

/// Smallest selectable brush width in pixels.
pub const MIN_BRUSH_WIDTH: u32 = 1;
/// Largest selectable brush width in pixels.
pub const MAX_BRUSH_WIDTH: u32 = 40;

/// Interaction parameters read by the drawing engine.
///
/// Fields are only changed through the setters below so the width stays inside
/// `MIN_BRUSH_WIDTH..=MAX_BRUSH_WIDTH`.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    tool: Tool,
    color: Color,
    brush_width: u32,
    fill_mode: FillMode,
}

impl InteractionState {
    pub fn new(tool: Tool, color: Color, brush_width: u32, fill_mode: FillMode) -> Self {
        Self {
            tool,
            color,
            brush_width: clamp_width(brush_width as i64),
            fill_mode,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn brush_width(&self) -> u32 {
        self.brush_width
    }

    pub fn fill_mode(&self) -> FillMode {
        self.fill_mode
    }

    pub fn select_tool(&mut self, tool: Tool) {
        debug!("Tool: {:?} -> {:?}", self.tool, tool);
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the width, clamping out-of-range values. Returns the stored width.
    pub fn set_brush_width(&mut self, width: u32) -> u32 {
        self.brush_width = clamp_width(width as i64);
        self.brush_width
    }

    /// Changes the width by `delta`, clamping at the limits. Returns true if it changed.
    pub fn adjust_brush_width(&mut self, delta: i32) -> bool {
        let updated = clamp_width(self.brush_width as i64 + delta as i64);
        let changed = updated != self.brush_width;
        self.brush_width = updated;
        changed
    }

    pub fn set_fill_mode(&mut self, mode: FillMode) {
        self.fill_mode = mode;
    }

    /// Advances to the next fill mode and returns it.
    pub fn cycle_fill_mode(&mut self) -> FillMode {
        self.fill_mode = self.fill_mode.next();
        self.fill_mode
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(Tool::Freehand, crate::draw::BLACK, 4, FillMode::Outline)
    }
}

fn clamp_width(width: i64) -> u32 {
    width.clamp(MIN_BRUSH_WIDTH as i64, MAX_BRUSH_WIDTH as i64) as u32
}
