//! Undo stack of committed primitives.
//!
//! Undo deletes the primitive outright, so nothing is left to replay. The ids
//! popped by undo are still remembered so the Redo button can be enabled and
//! report that redo is unavailable.

use crate::draw::{CanvasSurface, PrimitiveId};
use log::{debug, info};

/// Message shown when redo is requested for something that was undone.
pub const REDO_UNSUPPORTED_MESSAGE: &str =
    "Redo is not supported after full delete (session-limited).";

/// Result of a redo request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedoOutcome {
    /// Nothing was undone since the last commit
    Nothing,
    /// An undone entry was consumed; its geometry is gone for good
    Unsupported,
}

/// Tracks committed primitive ids for undo and the ids undo removed.
#[derive(Debug, Default)]
pub struct HistoryManager {
    /// Committed ids, most recent last. Every id here is live on the surface.
    undo_stack: Vec<PrimitiveId>,
    /// Ids removed by undo, most recent last. Never restored.
    redo_list: Vec<PrimitiveId>,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished primitive and invalidates the redo list.
    pub fn commit(&mut self, id: PrimitiveId) {
        debug!("Committed {}", id);
        self.undo_stack.push(id);
        self.redo_list.clear();
    }

    /// Drops the redo list without touching the undo stack.
    pub fn clear_redo(&mut self) {
        self.redo_list.clear();
    }

    /// Removes the most recent committed primitive from the surface.
    ///
    /// Returns the removed id, or `None` when there was nothing to undo.
    pub fn undo<S: CanvasSurface + ?Sized>(&mut self, surface: &mut S) -> Option<PrimitiveId> {
        let id = self.undo_stack.pop()?;
        surface.delete_primitive(id);
        self.redo_list.push(id);
        debug!(
            "Undo {} ({} left, {} redo)",
            id,
            self.undo_stack.len(),
            self.redo_list.len()
        );
        Some(id)
    }

    /// Consumes one redo entry. Geometry is never restored.
    pub fn redo(&mut self) -> RedoOutcome {
        match self.redo_list.pop() {
            Some(id) => {
                debug!("Redo requested for deleted {}", id);
                RedoOutcome::Unsupported
            }
            None => RedoOutcome::Nothing,
        }
    }

    /// Deletes every primitive on the surface and empties both stacks.
    pub fn clear<S: CanvasSurface + ?Sized>(&mut self, surface: &mut S) {
        info!(
            "Clearing canvas ({} primitives, {} undo entries)",
            surface.len(),
            self.undo_stack.len()
        );
        surface.delete_all();
        self.undo_stack.clear();
        self.redo_list.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_list.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_list.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;
    use crate::draw::{PrimitiveKind, RetainedCanvas, Style};

    fn commit_line(history: &mut HistoryManager, canvas: &mut RetainedCanvas) -> PrimitiveId {
        let id = canvas.create_primitive(
            PrimitiveKind::Line,
            vec![(0, 0), (10, 10)],
            Style::stroke(BLACK, 1.0),
        );
        history.commit(id);
        id
    }

    #[test]
    fn n_commits_then_n_undos_empty_the_surface() {
        let mut canvas = RetainedCanvas::new();
        let mut history = HistoryManager::new();
        for _ in 0..5 {
            commit_line(&mut history, &mut canvas);
        }
        for _ in 0..5 {
            assert!(history.undo(&mut canvas).is_some());
        }
        assert!(canvas.is_empty());
        assert!(!history.can_undo());
        assert_eq!(history.redo_len(), 5);
    }

    #[test]
    fn undo_on_empty_stack_is_noop() {
        let mut canvas = RetainedCanvas::new();
        let mut history = HistoryManager::new();
        assert_eq!(history.undo(&mut canvas), None);
        assert!(!history.can_redo());
    }

    #[test]
    fn redo_never_restores_geometry() {
        let mut canvas = RetainedCanvas::new();
        let mut history = HistoryManager::new();
        commit_line(&mut history, &mut canvas);
        commit_line(&mut history, &mut canvas);

        history.undo(&mut canvas);
        let after_undo = canvas.len();
        assert!(history.can_redo());
        assert_eq!(history.redo(), RedoOutcome::Unsupported);
        assert_eq!(canvas.len(), after_undo);
        assert!(!history.can_redo());
        assert_eq!(history.redo(), RedoOutcome::Nothing);
    }

    #[test]
    fn commit_invalidates_redo() {
        let mut canvas = RetainedCanvas::new();
        let mut history = HistoryManager::new();
        commit_line(&mut history, &mut canvas);
        history.undo(&mut canvas);
        assert!(history.can_redo());

        commit_line(&mut history, &mut canvas);
        assert!(!history.can_redo());
        assert_eq!(history.undo_len(), 1);
    }

    #[test]
    fn undo_pops_most_recent_first() {
        let mut canvas = RetainedCanvas::new();
        let mut history = HistoryManager::new();
        let first = commit_line(&mut history, &mut canvas);
        let second = commit_line(&mut history, &mut canvas);

        assert_eq!(history.undo(&mut canvas), Some(second));
        assert!(canvas.contains(first));
        assert!(!canvas.contains(second));
    }

    #[test]
    fn clear_empties_everything() {
        let mut canvas = RetainedCanvas::new();
        let mut history = HistoryManager::new();
        commit_line(&mut history, &mut canvas);
        commit_line(&mut history, &mut canvas);
        history.undo(&mut canvas);
        // An uncommitted primitive (like a live preview) is removed too
        canvas.create_primitive(
            PrimitiveKind::Oval,
            vec![(0, 0), (4, 4)],
            Style::stroke(BLACK, 1.0),
        );

        history.clear(&mut canvas);
        assert!(canvas.is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
