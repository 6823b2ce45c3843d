//! Open/closed state of the per-card status menus.

use std::collections::HashMap;

use ratatui::layout::{Position, Rect};
use tracing::trace;

use crate::task::TaskId;

/// Tracks which status dropdowns are open, keyed by task id.
///
/// Entries are created lazily on first toggle and removed when their task is
/// deleted. A missing entry means closed.
#[derive(Debug, Default)]
pub struct DropdownTracker {
    open: HashMap<TaskId, bool>,
}

impl DropdownTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, id: TaskId) -> bool {
        self.open.get(&id).copied().unwrap_or(false)
    }

    /// Flip the state for `id`, returning whether it is now open.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        let state = self.open.entry(id).or_insert(false);
        *state = !*state;
        trace!(%id, open = *state, "dropdown toggled");
        *state
    }

    pub fn close(&mut self, id: TaskId) {
        if let Some(state) = self.open.get_mut(&id) {
            *state = false;
        }
    }

    pub fn close_all(&mut self) {
        self.open.values_mut().for_each(|s| *s = false);
    }

    /// Drop the entry for a deleted task.
    pub fn forget(&mut self, id: TaskId) {
        self.open.remove(&id);
    }

    /// Ids of the dropdowns currently open, in id order.
    pub fn open_ids(&self) -> Vec<TaskId> {
        let mut ids: Vec<TaskId> = self.open.iter().filter(|(_, open)| **open).map(|(id, _)| *id).collect();
        ids.sort();
        ids
    }

    /// Close every open dropdown whose anchor does not contain `point`.
    ///
    /// `anchors` are the on-screen rectangles from the latest render. A
    /// dropdown with no anchor is not visible and is closed too. Returns the
    /// ids that were closed.
    pub fn close_outside(&mut self, point: Position, anchors: &[(TaskId, Rect)]) -> Vec<TaskId> {
        let mut closed = Vec::new();
        for (id, state) in self.open.iter_mut().filter(|(_, s)| **s) {
            let inside = anchors.iter().any(|(anchor_id, rect)| anchor_id == id && rect.contains(point));
            if !inside {
                *state = false;
                closed.push(*id);
            }
        }
        closed.sort();
        if !closed.is_empty() {
            trace!(?closed, "closed dropdowns on outside press");
        }
        closed
    }

    /// Number of tracked entries, open or closed.
    pub fn tracked(&self) -> usize {
        self.open.len()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_toggle_is_lazy_and_flips() {
        let mut tracker = DropdownTracker::new();
        assert!(!tracker.is_open(TaskId(1)));
        assert_eq!(tracker.tracked(), 0);

        assert!(tracker.toggle(TaskId(1)));
        assert!(tracker.is_open(TaskId(1)));
        assert!(!tracker.is_open(TaskId(2)));
        assert!(!tracker.toggle(TaskId(1)));
        assert_eq!(tracker.tracked(), 1);
    }

    #[test]
    fn test_forget_removes_entry() {
        let mut tracker = DropdownTracker::new();
        tracker.toggle(TaskId(1));
        tracker.toggle(TaskId(2));
        tracker.forget(TaskId(1));
        assert_eq!(tracker.tracked(), 1);
        assert_eq!(tracker.open_ids(), vec![TaskId(2)]);
    }

    #[test]
    fn test_close_outside_keeps_dropdown_under_pointer() {
        let mut tracker = DropdownTracker::new();
        tracker.toggle(TaskId(1));
        tracker.toggle(TaskId(2));
        let anchors = vec![
            (TaskId(1), Rect::new(0, 0, 10, 3)),
            (TaskId(2), Rect::new(20, 0, 10, 3)),
        ];

        let closed = tracker.close_outside(Position::new(22, 1), &anchors);

        assert_eq!(closed, vec![TaskId(1)]);
        assert!(!tracker.is_open(TaskId(1)));
        assert!(tracker.is_open(TaskId(2)));
    }

    #[test]
    fn test_close_outside_closes_dropdowns_without_anchor() {
        let mut tracker = DropdownTracker::new();
        tracker.toggle(TaskId(3));
        let closed = tracker.close_outside(Position::new(0, 0), &[]);
        assert_eq!(closed, vec![TaskId(3)]);
    }

    #[test]
    fn test_close_outside_ignores_closed_entries() {
        let mut tracker = DropdownTracker::new();
        tracker.toggle(TaskId(1));
        tracker.toggle(TaskId(1));
        assert!(tracker.close_outside(Position::new(50, 50), &[]).is_empty());
    }

    #[test]
    fn test_close_and_close_all() {
        let mut tracker = DropdownTracker::new();
        tracker.toggle(TaskId(1));
        tracker.toggle(TaskId(2));
        tracker.close(TaskId(1));
        assert_eq!(tracker.open_ids(), vec![TaskId(2)]);
        tracker.close_all();
        assert!(tracker.open_ids().is_empty());
        assert_eq!(tracker.tracked(), 2);
    }
}
