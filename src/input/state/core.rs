//! Input state: owns the canvas, engine, history and UI flags.

use super::dialog::{Notice, PromptKind, TextPrompt};
use crate::config::{Action, Config, ExportConfig, KeyBinding, UiConfig};
use crate::draw::RetainedCanvas;
use crate::draw::color::*;
use crate::engine::DrawingEngine;
use crate::history::HistoryManager;
use crate::input::modifiers::Modifiers;
use crate::input::settings::{InteractionState, MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH};
use crate::input::tool::{FillMode, Tool};
use crate::ui::{self, ToolbarLayout};
use crate::util::Rect;
use std::collections::{HashMap, VecDeque};

/// Main input state containing all drawing session state.
///
/// This struct holds the retained canvas, the drawing engine and its history,
/// the interaction parameters, modifier keys and UI flags. It processes all
/// keyboard and mouse events and reports when a redraw is needed.
///
/// Window coordinates have the origin at the top-left of the window. The canvas
/// starts below the toolbar, so canvas coordinates are window coordinates shifted
/// up by [`canvas_origin_y`](Self::canvas_origin_y).
pub struct InputState {
    /// Current tool, color, width and fill mode
    pub settings: InteractionState,
    /// Gesture handling (previews and commits)
    pub engine: DrawingEngine,
    /// Undo stack and redo notices
    pub history: HistoryManager,
    /// Retained primitives shown in the canvas region
    pub canvas: RetainedCanvas,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Whether user requested to exit
    pub should_exit: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Whether the help overlay is currently visible
    pub show_help: bool,
    /// Whether the status bar is currently visible
    pub show_status_bar: bool,
    /// Window width in pixels (set by backend after configuration)
    pub window_width: u32,
    /// Window height in pixels (set by backend after configuration)
    pub window_height: u32,
    /// UI styling and window preferences
    pub ui: UiConfig,
    /// Where the save prompt points by default
    pub export: ExportConfig,
    /// Keybinding action map for efficient lookup
    action_map: HashMap<KeyBinding, Action>,
    /// Binding text and description for the help overlay
    help_entries: Vec<(String, &'static str)>,
    toolbar: ToolbarLayout,
    /// Pointer position fragment of the status line
    position_status: String,
    notices: VecDeque<Notice>,
    /// Open save-path or color prompt
    prompt: Option<TextPrompt>,
    /// Save outcome waiting to be posted as a desktop notification
    pending_desktop_notice: Option<Notice>,
    /// Set when anything outside the canvas changed
    ui_dirty: bool,
}

impl InputState {
    /// Creates a new InputState from the loaded configuration.
    ///
    /// Window dimensions start at the configured size and should be updated by the
    /// backend once the compositor configures the window.
    pub fn with_config(config: &Config, action_map: HashMap<KeyBinding, Action>) -> Self {
        let help_entries = config
            .keybindings
            .entries()
            .into_iter()
            .filter(|(bindings, _)| !bindings.is_empty())
            .map(|(bindings, action)| (bindings.join(" / "), action.description()))
            .collect();

        Self {
            settings: config.initial_interaction_state(),
            engine: DrawingEngine::new(config.canvas_background(), config.contrast_outline()),
            history: HistoryManager::new(),
            canvas: RetainedCanvas::new(),
            modifiers: Modifiers::new(),
            should_exit: false,
            needs_redraw: true,
            show_help: false,
            show_status_bar: config.ui.show_status_bar,
            window_width: config.ui.window_width,
            window_height: config.ui.window_height,
            ui: config.ui.clone(),
            export: config.export.clone(),
            action_map,
            help_entries,
            toolbar: ui::layout_toolbar(&config.ui.toolbar_style, config.ui.window_width as f64),
            position_status: String::new(),
            notices: VecDeque::new(),
            prompt: None,
            pending_desktop_notice: None,
            ui_dirty: true,
        }
    }

    /// Updates window dimensions after backend configuration.
    ///
    /// The toolbar is laid out again for the new width; when it gains or loses
    /// a row the canvas region moves and is repainted in full.
    pub fn update_window_dimensions(&mut self, width: u32, height: u32) {
        if self.window_width != width || self.window_height != height {
            log::debug!("Window resized to {}x{}", width, height);
        }
        self.window_width = width;
        self.window_height = height;

        let toolbar = ui::layout_toolbar(&self.ui.toolbar_style, width as f64);
        if toolbar.height != self.toolbar.height {
            log::debug!("Toolbar now {} row(s), {}px tall", toolbar.rows, toolbar.height);
            self.canvas.mark_full_damage();
        }
        self.toolbar = toolbar;
        self.mark_ui_dirty();
    }

    // ------------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------------

    pub fn toolbar(&self) -> &ToolbarLayout {
        &self.toolbar
    }

    /// Top edge of the canvas region in window coordinates.
    pub fn canvas_origin_y(&self) -> i32 {
        self.toolbar.height.ceil() as i32
    }

    pub fn canvas_width(&self) -> i32 {
        self.window_width.min(i32::MAX as u32) as i32
    }

    /// Height left for the canvas between the toolbar and the status bar.
    pub fn canvas_height(&self) -> i32 {
        let status = if self.show_status_bar {
            ui::status_bar_height(&self.ui.status_bar_style) as i32
        } else {
            0
        };
        let window = self.window_height.min(i32::MAX as u32) as i32;
        (window - self.canvas_origin_y() - status).max(0)
    }

    /// Converts window coordinates to canvas coordinates.
    pub fn to_canvas(&self, x: i32, y: i32) -> (i32, i32) {
        (x, y - self.canvas_origin_y())
    }

    /// Returns true if the window point lies on the canvas region.
    pub fn in_canvas(&self, x: i32, y: i32) -> bool {
        let (cx, cy) = self.to_canvas(x, y);
        cx >= 0 && cy >= 0 && cx < self.canvas_width() && cy < self.canvas_height()
    }

    // ------------------------------------------------------------------------
    // Damage
    // ------------------------------------------------------------------------

    pub(crate) fn mark_ui_dirty(&mut self) {
        self.ui_dirty = true;
        self.needs_redraw = true;
    }

    /// Drains damaged regions in window coordinates.
    ///
    /// UI changes damage the whole window; pure canvas edits only damage the
    /// primitives that changed, clipped to the canvas region.
    pub fn take_damage(&mut self) -> Vec<Rect> {
        let (width, height) = (self.canvas_width(), self.canvas_height());
        let canvas_damage = self.canvas.take_damage(width, height);

        let window = Rect::new(
            0,
            0,
            self.window_width.min(i32::MAX as u32) as i32,
            self.window_height.min(i32::MAX as u32) as i32,
        );
        if self.ui_dirty {
            self.ui_dirty = false;
            return window.into_iter().collect();
        }

        let origin = self.canvas_origin_y();
        canvas_damage
            .into_iter()
            .filter_map(|rect| clip_rect(rect, width, height))
            .map(|rect| rect.translated(0, origin))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Toolbar state
    // ------------------------------------------------------------------------

    /// Whether a toolbar button is currently clickable.
    pub fn action_enabled(&self, action: Action) -> bool {
        match action {
            Action::Undo => self.history.can_undo(),
            Action::Redo => self.history.can_redo(),
            Action::DecreaseWidth => self.settings.brush_width() > MIN_BRUSH_WIDTH,
            Action::IncreaseWidth => self.settings.brush_width() < MAX_BRUSH_WIDTH,
            _ => true,
        }
    }

    /// Whether a toolbar button reflects the current selection.
    pub fn action_active(&self, action: Action) -> bool {
        if let Some(tool) = action_tool(action) {
            return self.settings.tool() == tool;
        }
        if let Some(mode) = action_fill_mode(action) {
            return self.settings.fill_mode() == mode;
        }
        if let Some(color) = action_color(action) {
            return self.settings.color() == color;
        }
        if action == Action::PickColor {
            return !PALETTE.contains(&self.settings.color());
        }
        false
    }

    // ------------------------------------------------------------------------
    // Status line, notices and prompt
    // ------------------------------------------------------------------------

    /// Text shown in the status bar.
    pub fn status_text(&self) -> String {
        format!(
            "Tool: {}  |  Color: {}  |  Brush: {}px  |  Fill: {}{}",
            self.settings.tool(),
            self.settings.color().to_hex(),
            self.settings.brush_width(),
            self.settings.fill_mode(),
            self.position_status
        )
    }

    pub(super) fn set_position_status(&mut self, x: i32, y: i32) {
        self.position_status = self.engine.on_move(x, y);
        if self.show_status_bar {
            self.mark_ui_dirty();
        }
    }

    pub fn help_entries(&self) -> &[(String, &'static str)] {
        &self.help_entries
    }

    /// Notice currently on screen, if any.
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    /// Number of notices waiting, including the visible one.
    pub fn notice_count(&self) -> usize {
        self.notices.len()
    }

    pub(super) fn push_notice(&mut self, notice: Notice) {
        match notice.kind {
            super::NoticeKind::Info => log::info!("{}: {}", notice.title, notice.message),
            super::NoticeKind::Error => log::error!("{}: {}", notice.title, notice.message),
        }
        self.notices.push_back(notice);
        self.mark_ui_dirty();
    }

    /// Closes the visible notice. Returns false if none was shown.
    pub fn dismiss_notice(&mut self) -> bool {
        let dismissed = self.notices.pop_front().is_some();
        if dismissed {
            self.mark_ui_dirty();
        }
        dismissed
    }

    /// The save-path or color prompt, if one is open.
    pub fn prompt(&self) -> Option<&TextPrompt> {
        self.prompt.as_ref()
    }

    pub(super) fn prompt_mut(&mut self) -> Option<&mut TextPrompt> {
        self.prompt.as_mut()
    }

    pub(super) fn open_save_prompt(&mut self) {
        let suggested = crate::export::suggested_path(&self.export);
        self.open_prompt(TextPrompt::new(PromptKind::Save, suggested.to_string_lossy()));
    }

    /// Opens the hex color entry, pre-filled with the current color.
    pub(super) fn open_color_prompt(&mut self) {
        let current = self.settings.color().to_hex();
        self.open_prompt(TextPrompt::new(PromptKind::Color, current));
    }

    fn open_prompt(&mut self, prompt: TextPrompt) {
        log::debug!("Opening {:?} prompt", prompt.kind());
        self.prompt = Some(prompt);
        self.mark_ui_dirty();
    }

    pub(super) fn close_prompt(&mut self) -> Option<TextPrompt> {
        let prompt = self.prompt.take();
        if prompt.is_some() {
            self.mark_ui_dirty();
        }
        prompt
    }

    /// True while a notice or a prompt blocks drawing input.
    pub fn is_modal(&self) -> bool {
        self.prompt.is_some() || !self.notices.is_empty()
    }

    /// Takes the save result waiting to be posted as a desktop notification.
    pub fn take_pending_desktop_notice(&mut self) -> Option<Notice> {
        self.pending_desktop_notice.take()
    }

    pub(super) fn set_pending_desktop_notice(&mut self, notice: Notice) {
        if self.ui.desktop_notifications {
            self.pending_desktop_notice = Some(notice);
        }
    }

    /// Look up an action for the given key and the current modifiers.
    pub(super) fn find_action(&self, key_str: &str) -> Option<Action> {
        self.action_map
            .iter()
            .find(|(binding, _)| {
                binding.matches(
                    key_str,
                    self.modifiers.ctrl,
                    self.modifiers.shift,
                    self.modifiers.alt,
                )
            })
            .map(|(_, action)| *action)
    }
}

fn clip_rect(rect: Rect, width: i32, height: i32) -> Option<Rect> {
    let min_x = rect.x.max(0);
    let min_y = rect.y.max(0);
    let max_x = (rect.x + rect.width).min(width);
    let max_y = (rect.y + rect.height).min(height);
    Rect::from_min_max(min_x, min_y, max_x, max_y)
}

pub(super) fn action_tool(action: Action) -> Option<Tool> {
    match action {
        Action::SelectFreehand => Some(Tool::Freehand),
        Action::SelectLine => Some(Tool::Line),
        Action::SelectRectangle => Some(Tool::Rectangle),
        Action::SelectOval => Some(Tool::Oval),
        Action::SelectEraser => Some(Tool::Eraser),
        _ => None,
    }
}

pub(super) fn action_fill_mode(action: Action) -> Option<FillMode> {
    match action {
        Action::FillOutline => Some(FillMode::Outline),
        Action::FillFilled => Some(FillMode::Filled),
        Action::FillBoth => Some(FillMode::Both),
        _ => None,
    }
}

pub(super) fn action_color(action: Action) -> Option<crate::draw::Color> {
    match action {
        Action::SetColorRed => Some(RED),
        Action::SetColorGreen => Some(GREEN),
        Action::SetColorBlue => Some(BLUE),
        Action::SetColorYellow => Some(YELLOW),
        Action::SetColorOrange => Some(ORANGE),
        Action::SetColorPink => Some(PINK),
        Action::SetColorPurple => Some(PURPLE),
        Action::SetColorBlack => Some(BLACK),
        _ => None,
    }
}

