//! Enumerations for TUI state management.

use crate::task::TaskId;
use crate::tui::task_form::FormField;

/// Which screen is showing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AppState {
    Board,
    /// Blocking modal; any key dismisses it.
    Alert,
    Help,
}

/// Which control receives keyboard input on the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Focus {
    TaskName,
    Description,
    Submit,
    Filter,
    Cards,
}

impl Focus {
    /// Next control in tab order, wrapping around.
    pub fn next(self) -> Focus {
        match self {
            Focus::TaskName => Focus::Description,
            Focus::Description => Focus::Submit,
            Focus::Submit => Focus::Filter,
            Focus::Filter => Focus::Cards,
            Focus::Cards => Focus::TaskName,
        }
    }

    /// Previous control in tab order, wrapping around.
    pub fn prev(self) -> Focus {
        match self {
            Focus::TaskName => Focus::Cards,
            Focus::Description => Focus::TaskName,
            Focus::Submit => Focus::Description,
            Focus::Filter => Focus::Submit,
            Focus::Cards => Focus::Filter,
        }
    }

    /// The text input this focus corresponds to, if any.
    pub fn form_field(self) -> Option<FormField> {
        match self {
            Focus::TaskName => Some(FormField::TaskName),
            Focus::Description => Some(FormField::Description),
            _ => None,
        }
    }
}

impl From<FormField> for Focus {
    fn from(field: FormField) -> Self {
        match field {
            FormField::TaskName => Focus::TaskName,
            FormField::Description => Focus::Description,
        }
    }
}

/// A clickable region recorded during render.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HitTarget {
    Input(FormField),
    Submit,
    FilterSelect,
    Card(TaskId),
    StatusToggle(TaskId),
    StatusMenuItem(TaskId),
    Edit(TaskId),
    Delete(TaskId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle_round_trips() {
        let mut focus = Focus::TaskName;
        for _ in 0..5 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::TaskName);
        assert_eq!(Focus::Cards.next().prev(), Focus::Cards);
        assert_eq!(Focus::from(FormField::Description).form_field(), Some(FormField::Description));
        assert_eq!(Focus::Filter.form_field(), None);
    }
}
