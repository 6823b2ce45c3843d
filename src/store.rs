//! In-memory task store and the status filter.
//!
//! This module provides the `TaskStore` struct holding the ordered task list
//! for the lifetime of the process, along with the pure `filter_tasks`
//! function used to derive the visible subset on every render.

use chrono::Local;
use tracing::{debug, info, warn};

use crate::error::{Result, TodoError};
use crate::fields::{FilterMode, Status};
use crate::task::{Draft, Task, TaskId};

/// Ordered, in-memory list of tasks.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    last_id: u64,
}

/// Totals per status, shown in the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub completed: usize,
    pub not_completed: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.completed + self.not_completed
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `draft` and append it as a new task at the end of the list.
    pub fn create(&mut self, draft: &Draft) -> Result<TaskId> {
        if let Err(e) = draft.validate() {
            warn!(error = %e, "rejected new task");
            return Err(e);
        }
        self.last_id += 1;
        let id = TaskId(self.last_id);
        self.tasks.push(Task {
            id,
            task_name: draft.task_name.clone(),
            description: draft.description.clone(),
            status: draft.status,
            created_at: Local::now(),
        });
        info!(%id, "task created");
        Ok(id)
    }

    /// Overwrite the editable fields of an existing task in place.
    ///
    /// The task keeps its id, position and creation time.
    pub fn update(&mut self, id: TaskId, draft: &Draft) -> Result<()> {
        if let Err(e) = draft.validate() {
            warn!(%id, error = %e, "rejected task update");
            return Err(e);
        }
        let task = self.get_mut(id).ok_or(TodoError::UnknownTask(id))?;
        task.task_name = draft.task_name.clone();
        task.description = draft.description.clone();
        task.status = draft.status;
        info!(%id, "task updated");
        Ok(())
    }

    /// Replace only the status of a task.
    pub fn set_status(&mut self, id: TaskId, status: Status) -> Result<()> {
        let task = self.get_mut(id).ok_or(TodoError::UnknownTask(id))?;
        task.status = status;
        debug!(%id, status = %status, "status changed");
        Ok(())
    }

    /// Flip the status of a task, returning the new status.
    pub fn toggle_status(&mut self, id: TaskId) -> Result<Status> {
        let next = self.get(id).ok_or(TodoError::UnknownTask(id))?.status.toggled();
        self.set_status(id, next)?;
        Ok(next)
    }

    /// Remove a task, preserving the relative order of the rest.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let idx = self.position(id)?;
        let removed = self.tasks.remove(idx);
        info!(%id, "task deleted");
        Some(removed)
    }

    /// Get a task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Current position of a task in the list.
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn counts(&self) -> StatusCounts {
        self.tasks.iter().fold(StatusCounts::default(), |mut acc, t| {
            match t.status {
                Status::Completed => acc.completed += 1,
                Status::NotCompleted => acc.not_completed += 1,
            }
            acc
        })
    }
}

/// Ordered subsequence of `tasks` visible under `mode`.
pub fn filter_tasks(mode: FilterMode, tasks: &[Task]) -> Vec<&Task> {
    tasks.iter().filter(|t| mode.matches(t.status)).collect()
}

/// Short creation time shown on a card: time of day for today, date otherwise.
pub fn format_created(task: &Task) -> String {
    let today = Local::now().date_naive();
    if task.created_at.date_naive() == today {
        task.created_at.format("%H:%M").to_string()
    } else {
        task.created_at.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn store_with(names: &[&str]) -> (TaskStore, Vec<TaskId>) {
        let mut store = TaskStore::new();
        let ids = names
            .iter()
            .map(|n| store.create(&Draft::new(n, &format!("{n} description"))).unwrap())
            .collect();
        (store, ids)
    }

    fn names(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.task_name.clone()).collect()
    }

    #[test]
    fn test_create_appends_one_task() {
        let (mut store, _) = store_with(&["A", "B"]);
        let id = store.create(&Draft::new("C", "third")).unwrap();

        assert_eq!(store.len(), 3);
        let last = store.tasks().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.task_name, "C");
        assert_eq!(last.status, Status::NotCompleted);
    }

    #[test]
    fn test_create_stores_fields_as_typed() {
        let mut store = TaskStore::new();
        let id = store.create(&Draft::new("  Buy milk ", " 2% ")).unwrap();
        let task = store.get(id).unwrap();
        assert_eq!(task.task_name, "  Buy milk ");
        assert_eq!(task.description, " 2% ");

        store.update(id, &Draft::new("Oat milk ", "1l")).unwrap();
        assert_eq!(store.get(id).unwrap().task_name, "Oat milk ");
    }

    #[test]
    fn test_create_rejects_empty_or_whitespace_fields() {
        let (mut store, _) = store_with(&["A"]);
        for draft in [Draft::new("", "desc"), Draft::new("name", "   "), Draft::new(" \n", "")] {
            let err = store.create(&draft).unwrap_err();
            assert!(err.is_validation());
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let (mut store, ids) = store_with(&["A", "B"]);
        store.delete(ids[1]);
        let id = store.create(&Draft::new("C", "c")).unwrap();
        assert!(!ids.contains(&id));
    }

    #[test]
    fn test_update_keeps_position_and_id() {
        let (mut store, ids) = store_with(&["A", "B", "C"]);
        let mut draft = Draft::new("B2", "edited");
        draft.status = Status::Completed;
        store.update(ids[1], &draft).unwrap();

        let task = &store.tasks()[1];
        assert_eq!(task.id, ids[1]);
        assert_eq!(task.task_name, "B2");
        assert_eq!(task.description, "edited");
        assert_eq!(task.status, Status::Completed);
    }

    #[test]
    fn test_update_unknown_task() {
        let (mut store, ids) = store_with(&["A"]);
        store.delete(ids[0]);
        let err = store.update(ids[0], &Draft::new("x", "y")).unwrap_err();
        assert!(matches!(err, TodoError::UnknownTask(id) if id == ids[0]));
    }

    #[test]
    fn test_update_rejects_blank_draft() {
        let (mut store, ids) = store_with(&["A"]);
        assert!(store.update(ids[0], &Draft::new("A", "")).unwrap_err().is_validation());
        assert_eq!(store.get(ids[0]).unwrap().description, "A description");
    }

    #[test]
    fn test_toggle_status_changes_only_target() {
        let (mut store, ids) = store_with(&["A", "B", "C"]);
        let before: Vec<Task> = store.tasks().to_vec();

        assert_eq!(store.toggle_status(ids[1]).unwrap(), Status::Completed);
        for (old, new) in before.iter().zip(store.tasks()) {
            if new.id == ids[1] {
                assert_eq!(new.status, Status::Completed);
                assert_eq!(new.task_name, old.task_name);
                assert_eq!(new.description, old.description);
            } else {
                assert_eq!(new, old);
            }
        }

        store.toggle_status(ids[1]).unwrap();
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_delete_preserves_order() {
        let (mut store, ids) = store_with(&["A", "B", "C", "D"]);
        let removed = store.delete(ids[1]).unwrap();

        assert_eq!(removed.task_name, "B");
        assert_eq!(store.len(), 3);
        let remaining: Vec<&Task> = store.iter().collect();
        assert_eq!(names(&remaining), vec!["A", "C", "D"]);
        assert!(store.delete(ids[1]).is_none());
    }

    #[test]
    fn test_filter_all_returns_everything_in_order() {
        let (mut store, ids) = store_with(&["A", "B", "C"]);
        store.set_status(ids[0], Status::Completed).unwrap();

        let all = filter_tasks(FilterMode::All, store.tasks());
        assert_eq!(names(&all), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_filter_by_status() {
        let (mut store, ids) = store_with(&["A", "B", "C", "D"]);
        store.set_status(ids[0], Status::Completed).unwrap();
        store.set_status(ids[2], Status::Completed).unwrap();

        let done = filter_tasks(FilterMode::Completed, store.tasks());
        assert_eq!(names(&done), vec!["A", "C"]);
        let open = filter_tasks(FilterMode::NotCompleted, store.tasks());
        assert_eq!(names(&open), vec!["B", "D"]);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_buy_milk_scenario() {
        let mut store = TaskStore::new();
        let id = store.create(&Draft::new("Buy milk", "2%")).unwrap();
        store.set_status(id, Status::Completed).unwrap();

        let task = store.get(id).unwrap();
        assert_eq!((task.task_name.as_str(), task.description.as_str()), ("Buy milk", "2%"));
        assert_eq!(task.status, Status::Completed);
        assert!(filter_tasks(FilterMode::NotCompleted, store.tasks()).is_empty());
        assert_eq!(filter_tasks(FilterMode::Completed, store.tasks()).len(), 1);
    }

    #[test]
    fn test_counts() {
        let (mut store, ids) = store_with(&["A", "B", "C"]);
        store.set_status(ids[2], Status::Completed).unwrap();
        assert_eq!(store.counts(), StatusCounts { completed: 1, not_completed: 2 });
        assert_eq!(store.counts().total(), 3);
    }
}
