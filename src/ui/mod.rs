//! UI rendering: toolbar, status bar, help overlay and modal dialogs.

pub mod toolbar;

use crate::config::{HelpOverlayStyle, StatusBarStyle};
use crate::draw::{render_background, render_canvas};
use crate::input::InputState;
use crate::input::state::{Notice, NoticeKind, PromptKind, TextPrompt};

pub use toolbar::{ToolbarItem, ToolbarItemKind, ToolbarLayout, layout_toolbar, render_toolbar};

/// Fallback character width for monospace font estimation
const HELP_CHAR_WIDTH_ESTIMATE: f64 = 9.0;
/// Minimum width of notice and save dialogs
const DIALOG_MIN_WIDTH: f64 = 320.0;
/// Border color used for error notices
const ERROR_BORDER_COLOR: [f64; 4] = [0.9, 0.25, 0.2, 0.95];

/// Height of the status bar strip for a given style.
pub fn status_bar_height(style: &StatusBarStyle) -> f64 {
    (style.font_size + 2.0 * style.padding).ceil()
}

/// Renders the complete window contents for the current state.
pub fn render_frame(ctx: &cairo::Context, input_state: &InputState) {
    let ui = &input_state.ui;
    let (width, height) = (input_state.window_width, input_state.window_height);

    let _ = ctx.save();
    set_rgba(ctx, ui.toolbar_style.bg_color);
    let _ = ctx.paint();
    let _ = ctx.restore();

    // Canvas region, clipped so strokes never bleed into the toolbar
    let _ = ctx.save();
    let origin = input_state.canvas_origin_y() as f64;
    ctx.translate(0.0, origin);
    ctx.rectangle(
        0.0,
        0.0,
        input_state.canvas_width() as f64,
        input_state.canvas_height() as f64,
    );
    ctx.clip();
    render_background(ctx, input_state.engine.background());
    render_canvas(ctx, &input_state.canvas);
    let _ = ctx.restore();

    render_toolbar(
        ctx,
        input_state.toolbar(),
        input_state,
        &ui.toolbar_style,
        width,
    );

    if input_state.show_status_bar {
        render_status_bar(ctx, input_state, &ui.status_bar_style, width, height);
    }

    if input_state.show_help {
        render_help_overlay(
            ctx,
            input_state.help_entries(),
            &ui.help_overlay_style,
            width,
            height,
        );
    }

    if let Some(prompt) = input_state.prompt() {
        render_prompt(ctx, prompt, &ui.help_overlay_style, width, height);
    }

    if let Some(notice) = input_state.current_notice() {
        render_notice(ctx, notice, &ui.help_overlay_style, width, height);
    }
}

/// Render status bar showing tool, color, width, fill mode and pointer position
pub fn render_status_bar(
    ctx: &cairo::Context,
    input_state: &InputState,
    style: &StatusBarStyle,
    screen_width: u32,
    screen_height: u32,
) {
    let bar_height = status_bar_height(style);
    let top = screen_height as f64 - bar_height;
    let color = input_state.settings.color();
    let status_text = input_state.status_text();

    let _ = ctx.save();

    set_rgba(ctx, style.bg_color);
    ctx.rectangle(0.0, top, screen_width as f64, bar_height);
    let _ = ctx.fill();

    // Color indicator dot
    let dot_x = style.padding + style.dot_radius;
    let mid_y = top + bar_height / 2.0;
    ctx.arc(dot_x, mid_y, style.dot_radius, 0.0, 2.0 * std::f64::consts::PI);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.fill_preserve();
    ctx.set_source_rgba(0.5, 0.5, 0.5, 1.0);
    ctx.set_line_width(1.0);
    let _ = ctx.stroke();

    ctx.set_font_size(style.font_size);
    ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
    let baseline = match ctx.text_extents(&status_text) {
        Ok(extents) => mid_y - extents.height() / 2.0 - extents.y_bearing(),
        Err(e) => {
            log::warn!("Failed to measure status bar text: {}", e);
            mid_y + style.font_size / 2.0
        }
    };

    set_rgba(ctx, style.text_color);
    ctx.move_to(dot_x + style.dot_radius + style.padding, baseline);
    let _ = ctx.show_text(&status_text);

    let _ = ctx.restore();
}

/// Render help overlay listing the active keybindings.
///
/// `entries` pairs the binding text (e.g. "Ctrl+Z") with what it does.
pub fn render_help_overlay(
    ctx: &cairo::Context,
    entries: &[(String, &'static str)],
    style: &HelpOverlayStyle,
    screen_width: u32,
    screen_height: u32,
) {
    let mut lines = vec!["SKETCHBOARD SHORTCUTS".to_string(), String::new()];
    let key_column = entries
        .iter()
        .map(|(keys, _)| keys.chars().count())
        .max()
        .unwrap_or(0);
    lines.extend(
        entries
            .iter()
            .map(|(keys, description)| format!("  {:<key_column$}   {}", keys, description)),
    );
    lines.push(String::new());
    lines.push("  Drag on the canvas to draw. Click or press F1 to close.".to_string());

    let _ = ctx.save();
    ctx.set_font_size(style.font_size);
    ctx.select_font_face(
        "Monospace",
        cairo::FontSlant::Normal,
        cairo::FontWeight::Normal,
    );

    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
    let box_width = measure_lines(ctx, &lines) + style.padding * 2.0;
    let box_height = lines.len() as f64 * style.line_height + style.padding * 2.0;

    let (box_x, box_y) = centered(box_width, box_height, screen_width, screen_height);
    draw_panel(ctx, box_x, box_y, box_width, box_height, style, style.border_color);

    set_rgba(ctx, style.text_color);
    draw_lines(ctx, &lines, box_x, box_y, style);
    let _ = ctx.restore();
}

/// Render a modal notice box (info or error).
pub fn render_notice(
    ctx: &cairo::Context,
    notice: &Notice,
    style: &HelpOverlayStyle,
    screen_width: u32,
    screen_height: u32,
) {
    let mut lines: Vec<&str> = vec![notice.title.as_str(), ""];
    lines.extend(notice.message.lines());
    lines.push("");
    lines.push("Press Enter or click to dismiss");

    let border = match notice.kind {
        NoticeKind::Info => style.border_color,
        NoticeKind::Error => ERROR_BORDER_COLOR,
    };
    render_dialog(ctx, &lines, border, style, screen_width, screen_height);
}

/// Render the save-path or color prompt with its editable text.
pub fn render_prompt(
    ctx: &cairo::Context,
    prompt: &TextPrompt,
    style: &HelpOverlayStyle,
    screen_width: u32,
    screen_height: u32,
) {
    let input_line = format!("{}_", prompt.buffer());
    let hint = match prompt.kind() {
        PromptKind::Save => "Enter to save, Escape to cancel",
        PromptKind::Color => "Enter to apply, Escape to cancel",
    };
    let lines = [
        prompt.kind().title(),
        "",
        input_line.as_str(),
        "",
        hint,
    ];
    render_dialog(
        ctx,
        &lines,
        style.border_color,
        style,
        screen_width,
        screen_height,
    );
}

fn render_dialog(
    ctx: &cairo::Context,
    lines: &[&str],
    border: [f64; 4],
    style: &HelpOverlayStyle,
    screen_width: u32,
    screen_height: u32,
) {
    let _ = ctx.save();
    ctx.set_font_size(style.font_size);
    ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);

    // Keep the box inside the window even for long paths
    let max_width = (screen_width as f64 - 2.0 * style.padding).max(DIALOG_MIN_WIDTH);
    let box_width = (measure_lines(ctx, lines) + style.padding * 2.0)
        .clamp(DIALOG_MIN_WIDTH, max_width);
    let box_height = lines.len() as f64 * style.line_height + style.padding * 2.0;
    let (box_x, box_y) = centered(box_width, box_height, screen_width, screen_height);

    // Dim everything behind the dialog
    ctx.set_source_rgba(0.0, 0.0, 0.0, 0.35);
    ctx.rectangle(0.0, 0.0, screen_width as f64, screen_height as f64);
    let _ = ctx.fill();

    draw_panel(ctx, box_x, box_y, box_width, box_height, style, border);

    ctx.rectangle(box_x, box_y, box_width, box_height);
    ctx.clip();
    set_rgba(ctx, style.text_color);
    draw_lines(ctx, lines, box_x, box_y, style);
    let _ = ctx.restore();
}

fn measure_lines(ctx: &cairo::Context, lines: &[&str]) -> f64 {
    lines
        .iter()
        .map(|line| match ctx.text_extents(line) {
            Ok(extents) => extents.x_advance(),
            Err(e) => {
                log::warn!("Failed to measure text '{}': {}, using estimate", line, e);
                line.chars().count() as f64 * HELP_CHAR_WIDTH_ESTIMATE
            }
        })
        .fold(0.0, f64::max)
}

fn centered(width: f64, height: f64, screen_width: u32, screen_height: u32) -> (f64, f64) {
    (
        ((screen_width as f64 - width) / 2.0).max(0.0),
        ((screen_height as f64 - height) / 2.0).max(0.0),
    )
}

fn draw_panel(
    ctx: &cairo::Context,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    style: &HelpOverlayStyle,
    border: [f64; 4],
) {
    set_rgba(ctx, style.bg_color);
    ctx.rectangle(x, y, width, height);
    let _ = ctx.fill();

    set_rgba(ctx, border);
    ctx.set_line_width(style.border_width);
    ctx.rectangle(x, y, width, height);
    let _ = ctx.stroke();
}

fn draw_lines(
    ctx: &cairo::Context,
    lines: &[&str],
    box_x: f64,
    box_y: f64,
    style: &HelpOverlayStyle,
) {
    for (i, line) in lines.iter().enumerate() {
        let text_x = box_x + style.padding;
        let text_y = box_y + style.padding + (i as f64 + 1.0) * style.line_height;
        ctx.move_to(text_x, text_y);
        let _ = ctx.show_text(line);
    }
}

fn set_rgba(ctx: &cairo::Context, [r, g, b, a]: [f64; 4]) {
    ctx.set_source_rgba(r, g, b, a);
}
