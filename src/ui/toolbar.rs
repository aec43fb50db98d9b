//! Toolbar strip: button layout, hit testing and rendering.
//!
//! Layout is computed without a Cairo context so hit testing works before the
//! first frame is drawn. Label widths are estimated from the font size and the
//! text is centered inside the estimated box at render time.

use crate::config::{Action, ToolbarStyle};
use crate::draw::Color;
use crate::draw::color::PALETTE;
use crate::input::InputState;
use crate::input::tool::{FillMode, Tool};
use crate::util::Rect;

/// Approximate advance of one label character relative to the font size.
const CHAR_WIDTH_FACTOR: f64 = 0.62;
/// Horizontal padding inside label buttons.
const LABEL_PADDING: f64 = 10.0;
/// Corner radius of button faces.
const BUTTON_RADIUS: f64 = 4.0;

/// What a toolbar slot shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarItemKind {
    /// Text button
    Label(&'static str),
    /// Palette swatch filled with its color
    Swatch(Color),
    /// Dot showing the current brush width and color (not clickable)
    BrushPreview,
}

/// A positioned toolbar slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarItem {
    pub kind: ToolbarItemKind,
    /// Action dispatched on click, `None` for passive items
    pub action: Option<Action>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ToolbarItem {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Integer bounds, rounded outward.
    pub fn rect(&self) -> Option<Rect> {
        Rect::from_min_max(
            self.x.floor() as i32,
            self.y.floor() as i32,
            (self.x + self.width).ceil() as i32,
            (self.y + self.height).ceil() as i32,
        )
    }
}

/// Positioned toolbar contents for one window width.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarLayout {
    pub items: Vec<ToolbarItem>,
    /// Number of button rows the strip wrapped into
    pub rows: usize,
    /// Total strip height, one style height per row
    pub height: f64,
}

/// Palette colors paired with the action that selects them.
pub fn palette_action(color: Color) -> Option<Action> {
    use crate::draw::color::*;
    let action = if color == BLACK {
        Action::SetColorBlack
    } else if color == RED {
        Action::SetColorRed
    } else if color == BLUE {
        Action::SetColorBlue
    } else if color == GREEN {
        Action::SetColorGreen
    } else if color == YELLOW {
        Action::SetColorYellow
    } else if color == ORANGE {
        Action::SetColorOrange
    } else if color == PURPLE {
        Action::SetColorPurple
    } else if color == PINK {
        Action::SetColorPink
    } else {
        return None;
    };
    Some(action)
}

/// A toolbar slot before it is given a position.
struct Slot {
    kind: ToolbarItemKind,
    action: Option<Action>,
    width: f64,
}

impl Slot {
    fn label(style: &ToolbarStyle, text: &'static str, action: Action) -> Self {
        let width = text.chars().count() as f64 * style.font_size * CHAR_WIDTH_FACTOR
            + 2.0 * LABEL_PADDING;
        Self {
            kind: ToolbarItemKind::Label(text),
            action: Some(action),
            width: width.ceil(),
        }
    }

    fn square(style: &ToolbarStyle, kind: ToolbarItemKind, action: Option<Action>) -> Self {
        Self {
            kind,
            action,
            width: item_height(style),
        }
    }
}

fn item_height(style: &ToolbarStyle) -> f64 {
    (style.height - 2.0 * style.spacing).max(1.0)
}

/// Places slots left to right and wraps to a new row at the window edge.
struct LayoutCursor<'a> {
    style: &'a ToolbarStyle,
    /// Rightmost x an item may reach
    limit: f64,
    x: f64,
    row: usize,
    items: Vec<ToolbarItem>,
}

impl LayoutCursor<'_> {
    fn at_row_start(&self) -> bool {
        self.x <= self.style.spacing
    }

    fn fits(&self, width: f64) -> bool {
        self.x + width <= self.limit
    }

    fn new_row(&mut self) {
        self.row += 1;
        self.x = self.style.spacing;
    }

    fn push(&mut self, slot: Slot) {
        if !self.at_row_start() && !self.fits(slot.width) {
            self.new_row();
        }
        self.items.push(ToolbarItem {
            kind: slot.kind,
            action: slot.action,
            x: self.x,
            y: self.row as f64 * self.style.height + self.style.spacing,
            width: slot.width,
            height: item_height(self.style),
        });
        self.x += slot.width + self.style.spacing;
    }

    /// Adds a group of related buttons, starting a new row if the whole group
    /// does not fit on the current one.
    fn group(&mut self, slots: Vec<Slot>) {
        let spacing = self.style.spacing;
        let width = slots.iter().map(|slot| slot.width + spacing).sum::<f64>() - spacing;
        if !self.at_row_start() && !self.fits(width) {
            self.new_row();
        }
        for slot in slots {
            self.push(slot);
        }
        self.x += spacing * 2.0;
    }
}

/// Lays out the toolbar for a window `window_width` pixels wide.
///
/// Groups appear in order: tools, fill modes, colors, width, then history and
/// file actions. A group that does not fit on the current row starts the next
/// one, so every button stays inside the window.
pub fn layout_toolbar(style: &ToolbarStyle, window_width: f64) -> ToolbarLayout {
    let mut cursor = LayoutCursor {
        style,
        limit: (window_width - style.spacing).max(style.spacing),
        x: style.spacing,
        row: 0,
        items: Vec::new(),
    };

    cursor.group(
        Tool::ALL
            .iter()
            .map(|tool| Slot::label(style, tool.label(), tool_action(*tool)))
            .collect(),
    );
    cursor.group(
        FillMode::ALL
            .iter()
            .map(|mode| Slot::label(style, mode.label(), fill_action(*mode)))
            .collect(),
    );

    let mut colors = vec![Slot::label(style, "Pick Color", Action::PickColor)];
    for color in PALETTE {
        let swatch = ToolbarItemKind::Swatch(color);
        colors.push(Slot::square(style, swatch, palette_action(color)));
    }
    cursor.group(colors);

    cursor.group(vec![
        Slot::label(style, "-", Action::DecreaseWidth),
        Slot::square(style, ToolbarItemKind::BrushPreview, None),
        Slot::label(style, "+", Action::IncreaseWidth),
    ]);
    cursor.group(vec![
        Slot::label(style, "Undo", Action::Undo),
        Slot::label(style, "Redo", Action::Redo),
        Slot::label(style, "Clear", Action::ClearCanvas),
        Slot::label(style, "Save PNG", Action::Save),
    ]);

    let rows = cursor.row + 1;
    ToolbarLayout {
        items: cursor.items,
        rows,
        height: rows as f64 * style.height,
    }
}

impl ToolbarLayout {
    /// Returns the clickable item under a point, if any.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&ToolbarItem> {
        if y < 0.0 || y >= self.height {
            return None;
        }
        self.items
            .iter()
            .find(|item| item.action.is_some() && item.contains(x, y))
    }

    /// Finds the item dispatching `action`.
    pub fn item_for(&self, action: Action) -> Option<&ToolbarItem> {
        self.items.iter().find(|item| item.action == Some(action))
    }
}

pub fn tool_action(tool: Tool) -> Action {
    match tool {
        Tool::Freehand => Action::SelectFreehand,
        Tool::Line => Action::SelectLine,
        Tool::Rectangle => Action::SelectRectangle,
        Tool::Oval => Action::SelectOval,
        Tool::Eraser => Action::SelectEraser,
    }
}

pub fn fill_action(mode: FillMode) -> Action {
    match mode {
        FillMode::Outline => Action::FillOutline,
        FillMode::Filled => Action::FillFilled,
        FillMode::Both => Action::FillBoth,
    }
}

fn rounded_rect(ctx: &cairo::Context, x: f64, y: f64, w: f64, h: f64, r: f64) {
    let r = r.min(w / 2.0).min(h / 2.0);
    let pi = std::f64::consts::PI;
    ctx.new_sub_path();
    ctx.arc(x + w - r, y + r, r, -pi / 2.0, 0.0);
    ctx.arc(x + w - r, y + h - r, r, 0.0, pi / 2.0);
    ctx.arc(x + r, y + h - r, r, pi / 2.0, pi);
    ctx.arc(x + r, y + r, r, pi, 1.5 * pi);
    ctx.close_path();
}

fn set_rgba(ctx: &cairo::Context, [r, g, b, a]: [f64; 4]) {
    ctx.set_source_rgba(r, g, b, a);
}

/// Render the toolbar strip across the top of the window.
pub fn render_toolbar(
    ctx: &cairo::Context,
    layout: &ToolbarLayout,
    input_state: &InputState,
    style: &ToolbarStyle,
    window_width: u32,
) {
    let _ = ctx.save();

    set_rgba(ctx, style.bg_color);
    ctx.rectangle(0.0, 0.0, window_width as f64, layout.height);
    let _ = ctx.fill();

    // Separator line under the strip
    ctx.set_source_rgba(0.0, 0.0, 0.0, 0.25);
    ctx.set_line_width(1.0);
    ctx.move_to(0.0, layout.height - 0.5);
    ctx.line_to(window_width as f64, layout.height - 0.5);
    let _ = ctx.stroke();

    ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
    ctx.set_font_size(style.font_size);

    for item in &layout.items {
        let active = item
            .action
            .is_some_and(|action| input_state.action_active(action));
        let enabled = item
            .action
            .is_none_or(|action| input_state.action_enabled(action));

        match &item.kind {
            ToolbarItemKind::Label(text) => {
                set_rgba(
                    ctx,
                    if active {
                        style.active_color
                    } else {
                        style.button_color
                    },
                );
                rounded_rect(ctx, item.x, item.y, item.width, item.height, BUTTON_RADIUS);
                let _ = ctx.fill_preserve();
                ctx.set_source_rgba(0.0, 0.0, 0.0, 0.3);
                let _ = ctx.stroke();

                let text_color = if !enabled {
                    style.disabled_text_color
                } else if active {
                    [1.0, 1.0, 1.0, 1.0]
                } else {
                    style.text_color
                };
                set_rgba(ctx, text_color);
                match ctx.text_extents(text) {
                    Ok(extents) => {
                        let tx =
                            item.x + (item.width - extents.width()) / 2.0 - extents.x_bearing();
                        let ty =
                            item.y + (item.height - extents.height()) / 2.0 - extents.y_bearing();
                        ctx.move_to(tx, ty);
                        let _ = ctx.show_text(text);
                    }
                    Err(e) => {
                        log::warn!("Failed to measure toolbar label '{}': {}", text, e);
                    }
                }
            }
            ToolbarItemKind::Swatch(color) => {
                ctx.set_source_rgba(color.r, color.g, color.b, color.a);
                rounded_rect(ctx, item.x, item.y, item.width, item.height, BUTTON_RADIUS);
                let _ = ctx.fill_preserve();
                if active {
                    set_rgba(ctx, style.active_color);
                    ctx.set_line_width(3.0);
                } else {
                    ctx.set_source_rgba(0.0, 0.0, 0.0, 0.4);
                    ctx.set_line_width(1.0);
                }
                let _ = ctx.stroke();
                ctx.set_line_width(1.0);
            }
            ToolbarItemKind::BrushPreview => {
                ctx.set_source_rgb(1.0, 1.0, 1.0);
                ctx.rectangle(item.x, item.y, item.width, item.height);
                let _ = ctx.fill();

                let settings = &input_state.settings;
                let color = settings.color();
                let radius = (settings.brush_width() as f64 / 2.0)
                    .max(2.0)
                    .min(item.height / 2.0 - 1.0);
                let (cx, cy) = (item.x + item.width / 2.0, item.y + item.height / 2.0);
                ctx.arc(cx, cy, radius, 0.0, 2.0 * std::f64::consts::PI);
                ctx.set_source_rgba(color.r, color.g, color.b, color.a);
                let _ = ctx.fill_preserve();
                ctx.set_source_rgb(0.0, 0.0, 0.0);
                let _ = ctx.stroke();
            }
        }
    }

    let _ = ctx.restore();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MIN_WINDOW_WIDTH, UiConfig};

    fn default_layout() -> ToolbarLayout {
        let ui = UiConfig::default();
        layout_toolbar(&ui.toolbar_style, ui.window_width as f64)
    }

    fn assert_inside(layout: &ToolbarLayout, width: f64) {
        for item in &layout.items {
            assert!(
                item.x >= 0.0 && item.x + item.width <= width,
                "{:?} spans {}..{} in a {}px window",
                item.kind,
                item.x,
                item.x + item.width,
                width
            );
            assert!(item.y + item.height <= layout.height);
        }
    }

    #[test]
    fn every_tool_and_fill_mode_has_a_button() {
        let layout = default_layout();
        for tool in Tool::ALL {
            assert!(layout.item_for(tool_action(tool)).is_some());
        }
        for mode in FillMode::ALL {
            assert!(layout.item_for(fill_action(mode)).is_some());
        }
        for action in [
            Action::Undo,
            Action::Redo,
            Action::ClearCanvas,
            Action::Save,
            Action::PickColor,
        ] {
            assert!(layout.item_for(action).is_some(), "{:?} missing", action);
        }
    }

    #[test]
    fn palette_swatches_map_to_color_actions() {
        let layout = default_layout();
        let swatches = layout
            .items
            .iter()
            .filter(|item| matches!(item.kind, ToolbarItemKind::Swatch(_)))
            .count();
        assert_eq!(swatches, PALETTE.len());
        assert!(PALETTE.iter().all(|c| palette_action(*c).is_some()));
    }

    #[test]
    fn default_window_shows_every_button() {
        let ui = UiConfig::default();
        let layout = default_layout();
        assert_inside(&layout, ui.window_width as f64);
        assert_eq!(layout.rows, 2);
        assert_eq!(layout.height, 2.0 * ui.toolbar_style.height);
    }

    #[test]
    fn narrowest_window_wraps_into_few_rows() {
        let style = ToolbarStyle::default();
        let width = MIN_WINDOW_WIDTH as f64;
        let layout = layout_toolbar(&style, width);
        assert_inside(&layout, width);
        assert!(layout.rows <= 3, "{} rows", layout.rows);
    }

    #[test]
    fn wide_window_uses_a_single_row() {
        let style = ToolbarStyle::default();
        let layout = layout_toolbar(&style, 2000.0);
        assert_eq!(layout.rows, 1);
        assert_eq!(layout.height, style.height);
        assert!(layout.items.iter().all(|item| item.y == style.spacing));
    }

    #[test]
    fn items_on_a_row_do_not_overlap() {
        for width in [MIN_WINDOW_WIDTH as f64, 1000.0, 2000.0] {
            let layout = layout_toolbar(&ToolbarStyle::default(), width);
            for pair in layout.items.windows(2) {
                if pair[0].y == pair[1].y {
                    assert!(pair[0].x + pair[0].width <= pair[1].x);
                } else {
                    assert!(pair[0].y < pair[1].y);
                }
            }
        }
    }

    #[test]
    fn hit_test_finds_button_centers_only() {
        let layout = default_layout();
        let undo = layout.item_for(Action::Undo).unwrap();
        let hit = layout
            .hit_test(undo.x + undo.width / 2.0, undo.y + undo.height / 2.0)
            .and_then(|item| item.action);
        assert_eq!(hit, Some(Action::Undo));

        assert!(layout.hit_test(undo.x, layout.height + 5.0).is_none());
        assert!(layout.hit_test(0.5, 0.5).is_none());

        let preview = layout
            .items
            .iter()
            .find(|item| item.kind == ToolbarItemKind::BrushPreview)
            .unwrap();
        assert!(
            layout
                .hit_test(preview.x + 1.0, preview.y + 1.0)
                .is_none()
        );
    }
}
