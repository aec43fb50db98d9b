use crate::config::Action;
use crate::draw::Color;
use crate::export;
use crate::history::{REDO_UNSUPPORTED_MESSAGE, RedoOutcome};
use crate::input::events::Key;
use crate::util;

use super::core::{action_color, action_fill_mode, action_tool};
use super::{InputState, Notice, PromptKind};

impl InputState {
    /// Processes a key press event.
    ///
    /// Modifier keys only update the modifier state. While a prompt is
    /// open it receives all other keys; while a notice is shown only the
    /// dismiss keys do anything. Otherwise the key is looked up in the
    /// keybinding table.
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Shift => {
                self.modifiers.shift = true;
                return;
            }
            Key::Ctrl => {
                self.modifiers.ctrl = true;
                return;
            }
            Key::Alt => {
                self.modifiers.alt = true;
                return;
            }
            _ => {}
        }

        if self.prompt().is_some() {
            self.handle_prompt_key(key);
            return;
        }

        if self.current_notice().is_some() {
            if matches!(key, Key::Return | Key::Escape | Key::Space) {
                self.dismiss_notice();
            }
            return;
        }

        let Some(key_str) = key.binding_name() else {
            return;
        };
        if let Some(action) = self.find_action(&key_str) {
            self.handle_action(action);
        }
    }

    fn handle_prompt_key(&mut self, key: Key) {
        match key {
            Key::Return => match self.prompt().map(|prompt| prompt.kind()) {
                Some(PromptKind::Save) => self.confirm_save(),
                Some(PromptKind::Color) => self.confirm_color(),
                None => {}
            },
            Key::Escape => {
                if let Some(prompt) = self.close_prompt() {
                    log::debug!("{:?} prompt cancelled", prompt.kind());
                }
            }
            Key::Backspace => {
                if let Some(prompt) = self.prompt_mut()
                    && prompt.backspace()
                {
                    self.mark_ui_dirty();
                }
            }
            Key::Char(c) if !self.modifiers.ctrl && !self.modifiers.alt => {
                if let Some(prompt) = self.prompt_mut()
                    && prompt.push(c)
                {
                    self.mark_ui_dirty();
                }
            }
            Key::Space => {
                if let Some(prompt) = self.prompt_mut()
                    && prompt.push(' ')
                {
                    self.mark_ui_dirty();
                }
            }
            _ => {}
        }
    }

    /// Handle an action triggered by a keybinding or a toolbar button.
    pub fn handle_action(&mut self, action: Action) {
        log::debug!("Action: {:?}", action);
        match action {
            Action::Exit => {
                // Escape first cancels a drag, then closes help, then quits
                if self.engine.cancel(&mut self.canvas) {
                    self.needs_redraw = true;
                } else if self.show_help {
                    self.show_help = false;
                    self.mark_ui_dirty();
                } else {
                    self.should_exit = true;
                }
            }
            Action::Undo => {
                if self.history.undo(&mut self.canvas).is_some() {
                    // Toolbar enablement may have changed
                    self.mark_ui_dirty();
                }
            }
            Action::Redo => match self.history.redo() {
                RedoOutcome::Unsupported => {
                    self.push_notice(Notice::info("Redo", REDO_UNSUPPORTED_MESSAGE));
                }
                RedoOutcome::Nothing => log::debug!("Nothing to redo"),
            },
            Action::ClearCanvas => {
                self.history.clear(&mut self.canvas);
                self.engine.reset();
                self.mark_ui_dirty();
            }
            Action::Save => self.open_save_prompt(),
            Action::PickColor => self.open_color_prompt(),
            Action::IncreaseWidth => {
                if self.settings.adjust_brush_width(1) {
                    self.mark_ui_dirty();
                }
            }
            Action::DecreaseWidth => {
                if self.settings.adjust_brush_width(-1) {
                    self.mark_ui_dirty();
                }
            }
            Action::CycleFillMode => {
                let mode = self.settings.cycle_fill_mode();
                log::info!("Fill mode: {}", mode);
                self.mark_ui_dirty();
            }
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
                self.mark_ui_dirty();
            }
            Action::ToggleStatusBar => {
                self.show_status_bar = !self.show_status_bar;
                // The canvas region changes size
                self.canvas.mark_full_damage();
                self.mark_ui_dirty();
            }
            _ => {
                if let Some(tool) = action_tool(action) {
                    self.settings.select_tool(tool);
                } else if let Some(mode) = action_fill_mode(action) {
                    self.settings.set_fill_mode(mode);
                } else if let Some(color) = action_color(action) {
                    self.settings.set_color(color);
                }
                self.mark_ui_dirty();
            }
        }
    }

    /// Writes the canvas to the path in the save prompt and reports the result.
    pub(super) fn confirm_save(&mut self) {
        let Some(prompt) = self.close_prompt() else {
            return;
        };

        let result = export::render_canvas_png(
            &self.canvas,
            self.engine.background(),
            self.canvas_width(),
            self.canvas_height(),
            prompt.buffer(),
        );

        let notice = match result {
            Ok(path) => Notice::info("Saved", format!("Canvas saved to\n{}", path.display())),
            Err(e) => Notice::error("Save Error", format!("Could not save image: {}", e)),
        };
        self.set_pending_desktop_notice(notice.clone());
        self.push_notice(notice);
    }

    /// Applies the color typed into the color prompt.
    ///
    /// Accepts `#rrggbb`, `#rgb` (the `#` may be omitted) or a palette name.
    /// Anything else leaves the color unchanged and reports an error notice.
    pub(super) fn confirm_color(&mut self) {
        let Some(prompt) = self.close_prompt() else {
            return;
        };

        let text = prompt.buffer().trim();
        match Color::from_hex(text).or_else(|| util::name_to_color(text)) {
            Some(color) => {
                log::info!("Color set to {}", color.to_hex());
                self.settings.set_color(color);
            }
            None => self.push_notice(Notice::error(
                "Invalid Color",
                format!("'{}' is not a color (expected #rrggbb)", text),
            )),
        }
    }

    /// Processes a key release event.
    ///
    /// Only tracks modifier key releases to update the modifier state.
    pub fn on_key_release(&mut self, key: Key) {
        match key {
            Key::Shift => self.modifiers.shift = false,
            Key::Ctrl => self.modifiers.ctrl = false,
            Key::Alt => self.modifiers.alt = false,
            _ => {}
        }
    }
}
