//! Enumerations and field types for to-do items.
//!
//! This module defines the completion status carried by every task and the
//! filter modes used to derive the visible subset of the task list.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;

/// Task completion status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    Completed,
    #[default]
    NotCompleted,
}

impl Status {
    /// Label shown on the card body ("Status: ...").
    pub fn label(self) -> &'static str {
        match self {
            Status::Completed => "Completed",
            Status::NotCompleted => "Not completed",
        }
    }

    /// Label shown on the status toggle button.
    pub fn button_label(self) -> &'static str {
        match self {
            Status::Completed => "Completed",
            Status::NotCompleted => "Not Completed",
        }
    }

    /// The other status.
    pub fn toggled(self) -> Status {
        match self {
            Status::Completed => Status::NotCompleted,
            Status::NotCompleted => Status::Completed,
        }
    }

    /// Text of the single dropdown menu item, which flips the status.
    pub fn menu_action_label(self) -> &'static str {
        match self {
            Status::Completed => "Mark Incomplete",
            Status::NotCompleted => "Mark Complete",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Visibility criterion for the task list.
#[derive(Debug, Clone, Copy, Deserialize, ValueEnum, PartialEq, Eq, Default)]
#[serde(try_from = "String")]
pub enum FilterMode {
    #[default]
    All,
    NotCompleted,
    Completed,
}

impl FilterMode {
    /// Options in the order the selector presents them.
    pub const OPTIONS: [FilterMode; 3] = [FilterMode::All, FilterMode::NotCompleted, FilterMode::Completed];

    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::NotCompleted => "Not Completed",
            FilterMode::Completed => "Completed",
        }
    }

    /// Whether a task with `status` is visible under this mode.
    pub fn matches(self, status: Status) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::NotCompleted => status == Status::NotCompleted,
            FilterMode::Completed => status == Status::Completed,
        }
    }

    /// Next option, wrapping around.
    pub fn next(self) -> FilterMode {
        match self {
            FilterMode::All => FilterMode::NotCompleted,
            FilterMode::NotCompleted => FilterMode::Completed,
            FilterMode::Completed => FilterMode::All,
        }
    }

    /// Previous option, wrapping around.
    pub fn prev(self) -> FilterMode {
        match self {
            FilterMode::All => FilterMode::Completed,
            FilterMode::NotCompleted => FilterMode::All,
            FilterMode::Completed => FilterMode::NotCompleted,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    /// Case-insensitive; spaces, dashes and underscores are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c })
            .collect();
        match normalised.split_whitespace().collect::<Vec<_>>().join(" ").as_str() {
            "all" => Ok(FilterMode::All),
            "completed" => Ok(FilterMode::Completed),
            "not completed" | "notcompleted" => Ok(FilterMode::NotCompleted),
            _ => Err(format!(
                "unknown filter '{s}' (expected one of: all, completed, not-completed)"
            )),
        }
    }
}

impl TryFrom<String> for FilterMode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_toggle_is_involution() {
        for status in [Status::Completed, Status::NotCompleted] {
            assert_eq!(status.toggled().toggled(), status);
            assert_ne!(status.toggled(), status);
        }
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(Status::default(), Status::NotCompleted);
        assert_eq!(Status::NotCompleted.label(), "Not completed");
        assert_eq!(Status::NotCompleted.button_label(), "Not Completed");
        assert_eq!(Status::NotCompleted.menu_action_label(), "Mark Complete");
        assert_eq!(Status::Completed.menu_action_label(), "Mark Incomplete");
    }

    #[test]
    fn test_filter_mode_parse_is_case_insensitive() {
        assert_eq!("ALL".parse::<FilterMode>(), Ok(FilterMode::All));
        assert_eq!("Completed".parse::<FilterMode>(), Ok(FilterMode::Completed));
        assert_eq!("Not completed".parse::<FilterMode>(), Ok(FilterMode::NotCompleted));
        assert_eq!("not-completed".parse::<FilterMode>(), Ok(FilterMode::NotCompleted));
        assert_eq!("  not_COMPLETED ".parse::<FilterMode>(), Ok(FilterMode::NotCompleted));
        assert!("done".parse::<FilterMode>().is_err());
    }

    #[test]
    fn test_filter_mode_cycles_in_selector_order() {
        let mut mode = FilterMode::All;
        for expected in [FilterMode::NotCompleted, FilterMode::Completed, FilterMode::All] {
            mode = mode.next();
            assert_eq!(mode, expected);
        }
        assert_eq!(FilterMode::All.prev().next(), FilterMode::All);
    }

    #[test]
    fn test_filter_mode_matches() {
        assert!(FilterMode::All.matches(Status::Completed));
        assert!(FilterMode::All.matches(Status::NotCompleted));
        assert!(FilterMode::Completed.matches(Status::Completed));
        assert!(!FilterMode::Completed.matches(Status::NotCompleted));
        assert!(FilterMode::NotCompleted.matches(Status::NotCompleted));
    }
}
