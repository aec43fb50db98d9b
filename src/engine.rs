//! Pointer gesture handling: live previews and committed primitives.
//!
//! A gesture runs from button press to button release. While it is active the
//! engine keeps exactly one preview primitive on the surface, replacing it on
//! every drag. Release turns the preview into a committed primitive that is
//! recorded in the [`HistoryManager`].

use crate::draw::{CanvasSurface, Color, LineCap, PrimitiveId, PrimitiveKind, Style};
use crate::history::HistoryManager;
use crate::input::settings::InteractionState;
use crate::input::tool::{FillMode, Tool};
use log::debug;

/// State of a press-drag-release interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    /// Press position
    pub anchor: (i32, i32),
    /// Tool captured at press time
    pub tool: Tool,
    /// Points visited so far (freehand and eraser only)
    pub path: Vec<(i32, i32)>,
    /// Primitive currently shown as the live preview
    pub preview: Option<PrimitiveId>,
}

/// Translates pointer events into canvas primitives.
#[derive(Debug)]
pub struct DrawingEngine {
    gesture: Option<Gesture>,
    /// Stroke color used by the eraser
    background: Color,
    /// Outline color for shapes in [`FillMode::Both`]
    contrast: Color,
    pointer: Option<(i32, i32)>,
}

impl DrawingEngine {
    pub fn new(background: Color, contrast: Color) -> Self {
        Self {
            gesture: None,
            background,
            contrast,
            pointer: None,
        }
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Last position reported by [`on_move`](Self::on_move) or a drag.
    pub fn pointer(&self) -> Option<(i32, i32)> {
        self.pointer
    }

    /// Starts a gesture with the current tool.
    ///
    /// A preview left behind by an unfinished gesture is removed first.
    pub fn on_press<S: CanvasSurface + ?Sized>(
        &mut self,
        x: i32,
        y: i32,
        settings: &InteractionState,
        surface: &mut S,
        history: &mut HistoryManager,
    ) {
        if let Some(stale) = self.gesture.take().and_then(|g| g.preview) {
            surface.delete_primitive(stale);
        }

        let tool = settings.tool();
        let path = if tool.is_freehand() {
            history.clear_redo();
            vec![(x, y)]
        } else {
            Vec::new()
        };

        debug!("Gesture start: {:?} at ({}, {})", tool, x, y);
        self.pointer = Some((x, y));
        self.gesture = Some(Gesture {
            anchor: (x, y),
            tool,
            path,
            preview: None,
        });
    }

    /// Extends the gesture and redraws its preview.
    ///
    /// Returns false if no gesture is active.
    pub fn on_drag<S: CanvasSurface + ?Sized>(
        &mut self,
        x: i32,
        y: i32,
        settings: &InteractionState,
        surface: &mut S,
    ) -> bool {
        self.pointer = Some((x, y));
        let (background, contrast) = (self.background, self.contrast);
        let Some(gesture) = self.gesture.as_mut() else {
            return false;
        };

        if let Some(previous) = gesture.preview.take() {
            surface.delete_primitive(previous);
        }

        let id = if gesture.tool.is_freehand() {
            gesture.path.push((x, y));
            let color = if gesture.tool == Tool::Eraser {
                background
            } else {
                settings.color()
            };
            let style = freehand_style(color, settings.brush_width(), gesture.path.len());
            surface.create_primitive(PrimitiveKind::Line, gesture.path.clone(), style)
        } else {
            let (kind, style) = shape_style(gesture.tool, settings, contrast, true);
            surface.create_primitive(kind, vec![gesture.anchor, (x, y)], style)
        };

        gesture.preview = Some(id);
        true
    }

    /// Finishes the gesture.
    ///
    /// Returns the id that was committed, if any. Releasing without a prior
    /// press does nothing.
    pub fn on_release<S: CanvasSurface + ?Sized>(
        &mut self,
        x: i32,
        y: i32,
        settings: &InteractionState,
        surface: &mut S,
        history: &mut HistoryManager,
    ) -> Option<PrimitiveId> {
        let gesture = self.gesture.take()?;
        self.pointer = Some((x, y));

        if gesture.tool.is_freehand() {
            // A click without movement leaves no preview and commits nothing
            let id = gesture.preview?;
            history.commit(id);
            debug!("Committed {:?} stroke {}", gesture.tool, id);
            return Some(id);
        }

        if let Some(preview) = gesture.preview {
            surface.delete_primitive(preview);
        }
        let (kind, style) = shape_style(gesture.tool, settings, self.contrast, false);
        let id = surface.create_primitive(kind, vec![gesture.anchor, (x, y)], style);
        history.commit(id);
        debug!(
            "Committed {:?} {} from {:?} to ({}, {})",
            kind, id, gesture.anchor, x, y
        );
        Some(id)
    }

    /// Tracks the pointer for the status line. Never touches the canvas.
    pub fn on_move(&mut self, x: i32, y: i32) -> String {
        self.pointer = Some((x, y));
        position_text(x, y)
    }

    /// Forgets the active gesture without touching the surface.
    ///
    /// Used after the surface has been cleared out from under it.
    pub fn reset(&mut self) {
        self.gesture = None;
    }

    /// Abandons the active gesture and removes its preview.
    ///
    /// Returns false if nothing was in progress.
    pub fn cancel<S: CanvasSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        let Some(gesture) = self.gesture.take() else {
            return false;
        };
        if let Some(preview) = gesture.preview {
            surface.delete_primitive(preview);
        }
        debug!("Gesture cancelled: {:?}", gesture.tool);
        true
    }
}

/// Status line fragment for a pointer position.
pub fn position_text(x: i32, y: i32) -> String {
    format!(" | Pos: {},{}", x, y)
}

/// Round-capped stroke, smoothed once enough points are buffered.
fn freehand_style(color: Color, width: u32, points: usize) -> Style {
    Style {
        cap: LineCap::Round,
        smooth: points >= 3,
        ..Style::stroke(color, width as f64)
    }
}

/// Primitive kind and style for a shape tool.
///
/// Previews are dashed and the two-color fill mode adds the stipple mask.
/// Final shapes are solid.
fn shape_style(
    tool: Tool,
    settings: &InteractionState,
    contrast: Color,
    preview: bool,
) -> (PrimitiveKind, Style) {
    let color = settings.color();
    let mut style = Style::stroke(color, settings.brush_width() as f64);
    if preview {
        style = style.dashed();
    }

    let kind = match tool {
        Tool::Rectangle => PrimitiveKind::Rectangle,
        Tool::Oval => PrimitiveKind::Oval,
        Tool::Line | Tool::Freehand | Tool::Eraser => return (PrimitiveKind::Line, style),
    };

    match settings.fill_mode() {
        FillMode::Outline => {}
        FillMode::Filled => style.fill = Some(color),
        FillMode::Both => {
            style.stroke = Some(contrast);
            style.fill = Some(color);
            style.stipple = preview;
        }
    }
    (kind, style)
}
