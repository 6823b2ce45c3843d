//! Task data structure and related functionality.
//!
//! This module defines the `Task` record held by the store, its stable
//! `TaskId`, and the `Draft` the input form commits into it.

use std::fmt;

use chrono::{DateTime, Local};

use crate::error::{Result, TodoError};
use crate::fields::Status;

/// Stable identifier assigned to a task when it is created.
///
/// Ids are monotonically increasing within a session and never reused, so
/// state keyed by id survives deletions and reordering of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub task_name: String,
    pub description: String,
    pub status: Status,
    pub created_at: DateTime<Local>,
}

/// The not-yet-committed task fields bound to the input form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub task_name: String,
    pub description: String,
    pub status: Status,
}

impl Draft {
    pub fn new(task_name: &str, description: &str) -> Self {
        Self {
            task_name: task_name.to_string(),
            description: description.to_string(),
            status: Status::NotCompleted,
        }
    }

    /// Copy of an existing task's editable fields.
    pub fn from_task(task: &Task) -> Self {
        Self {
            task_name: task.task_name.clone(),
            description: task.description.clone(),
            status: task.status,
        }
    }

    /// Check both required fields are non-empty after trimming.
    pub fn validate(&self) -> Result<()> {
        if self.task_name.trim().is_empty() {
            return Err(TodoError::EmptyRequiredField { field: "task name" });
        }
        if self.description.trim().is_empty() {
            return Err(TodoError::EmptyRequiredField { field: "description" });
        }
        Ok(())
    }

    /// True when nothing has been typed and the status is the default.
    pub fn is_blank(&self) -> bool {
        self.task_name.is_empty() && self.description.is_empty() && self.status == Status::default()
    }
}
