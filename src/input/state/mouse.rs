use crate::input::events::MouseButton;
use log::debug;

use super::InputState;

impl InputState {
    /// Processes a mouse button press event in window coordinates.
    ///
    /// # Behavior
    /// - Any click while a notice is shown dismisses it
    /// - Clicks are ignored while a prompt is open
    /// - Any click while help is shown closes it
    /// - Left click on an enabled toolbar button dispatches its action
    /// - Left click on the canvas starts a gesture with the current tool
    pub fn on_mouse_press(&mut self, button: MouseButton, x: i32, y: i32) {
        if self.current_notice().is_some() {
            self.dismiss_notice();
            return;
        }
        if self.prompt().is_some() {
            return;
        }
        if self.show_help {
            self.show_help = false;
            self.mark_ui_dirty();
            return;
        }
        if button != MouseButton::Left {
            return;
        }

        if (y as f64) < self.toolbar().height {
            let action = self
                .toolbar()
                .hit_test(x as f64, y as f64)
                .and_then(|item| item.action);
            match action {
                Some(action) if self.action_enabled(action) => self.handle_action(action),
                Some(action) => debug!("Ignoring click on disabled {:?}", action),
                None => {}
            }
            return;
        }

        if !self.in_canvas(x, y) {
            return;
        }
        let buttons = self.history_buttons();
        let (cx, cy) = self.to_canvas(x, y);
        self.engine.on_press(
            cx,
            cy,
            &self.settings,
            &mut self.canvas,
            &mut self.history,
        );
        self.refresh_history_buttons(buttons);
        self.needs_redraw = true;
    }

    /// Processes pointer motion in window coordinates.
    ///
    /// While a gesture is active the preview follows the pointer, even outside
    /// the canvas. Otherwise only the status line position is updated.
    pub fn on_mouse_motion(&mut self, x: i32, y: i32) {
        let (cx, cy) = self.to_canvas(x, y);
        if self.engine.is_drawing() {
            if self.is_modal() {
                return;
            }
            if self
                .engine
                .on_drag(cx, cy, &self.settings, &mut self.canvas)
            {
                self.needs_redraw = true;
            }
        }
        if self.in_canvas(x, y) {
            self.set_position_status(cx, cy);
        }
    }

    /// Processes mouse button release events in window coordinates.
    ///
    /// Releasing the left button finishes the active gesture. This also runs
    /// while a dialog is open so a drag is never left hanging.
    pub fn on_mouse_release(&mut self, button: MouseButton, x: i32, y: i32) {
        if button != MouseButton::Left || !self.engine.is_drawing() {
            return;
        }

        let buttons = self.history_buttons();
        let (cx, cy) = self.to_canvas(x, y);
        self.engine.on_release(
            cx,
            cy,
            &self.settings,
            &mut self.canvas,
            &mut self.history,
        );
        self.refresh_history_buttons(buttons);
        self.needs_redraw = true;
    }

    fn history_buttons(&self) -> (bool, bool) {
        (self.history.can_undo(), self.history.can_redo())
    }

    /// Repaints the toolbar when Undo or Redo changed enablement.
    fn refresh_history_buttons(&mut self, before: (bool, bool)) {
        if self.history_buttons() != before {
            self.mark_ui_dirty();
        }
    }
}
