//! Task form handling for the terminal user interface.
//!
//! `TaskForm` is the draft editor: two text inputs bound to the draft fields
//! plus the optional edit target. It moves between three states:
//!
//! - **Idle**: nothing typed, no edit target.
//! - **Creating**: no edit target, some text typed.
//! - **Editing**: edit target set, fields pre-populated from that task.
//!
//! A successful commit always returns the form to Idle. A failed commit leaves
//! everything as it was.

use tracing::debug;

use crate::{
    error::Result,
    fields::Status,
    store::TaskStore,
    task::{Draft, Task, TaskId},
    tui::input::InputField,
};

/// The two text inputs, in tab order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    TaskName,
    Description,
}

/// Observable state of the draft editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorState {
    Idle,
    Creating,
    Editing(TaskId),
}

/// What a successful commit did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    Created(TaskId),
    Updated(TaskId),
}

/// Draft editor backing the input form.
#[derive(Debug, Default)]
pub struct TaskForm {
    pub task_name: InputField,
    pub description: InputField,
    status: Status,
    edit_target: Option<TaskId>,
    /// Field values when editing began; used to tell whether the draft changed.
    baseline: Draft,
}

impl TaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field values as a draft.
    pub fn draft(&self) -> Draft {
        Draft {
            task_name: self.task_name.value.clone(),
            description: self.description.value.clone(),
            status: self.status,
        }
    }

    pub fn edit_target(&self) -> Option<TaskId> {
        self.edit_target
    }

    pub fn state(&self) -> EditorState {
        match self.edit_target {
            Some(id) => EditorState::Editing(id),
            None if self.draft().is_blank() => EditorState::Idle,
            None => EditorState::Creating,
        }
    }

    /// Label for the submit button.
    pub fn submit_label(&self) -> &'static str {
        if self.edit_target.is_some() {
            "Save"
        } else {
            "Add Todo"
        }
    }

    /// Whether the draft differs from what it was when the current state began.
    pub fn has_unsaved_changes(&self) -> bool {
        self.draft() != self.baseline
    }

    /// Load `task` into the form for editing.
    ///
    /// Any unsaved draft, including an edit of another task, is discarded.
    /// Re-editing the task already under edit keeps the draft as typed.
    /// Returns true if something was discarded.
    pub fn begin_edit(&mut self, task: &Task) -> bool {
        if self.edit_target == Some(task.id) {
            return false;
        }
        let discarded = self.has_unsaved_changes();
        if discarded {
            debug!(previous = ?self.edit_target, next = %task.id, "discarding unsaved draft");
        }
        let draft = Draft::from_task(task);
        self.load(&draft);
        self.baseline = draft;
        self.edit_target = Some(task.id);
        discarded
    }

    /// Commit the draft into `store`: create when Creating, overwrite when Editing.
    ///
    /// On error the form is untouched.
    pub fn commit(&mut self, store: &mut TaskStore) -> Result<CommitOutcome> {
        let draft = self.draft();
        let outcome = match self.edit_target {
            Some(id) => {
                store.update(id, &draft)?;
                CommitOutcome::Updated(id)
            }
            None => CommitOutcome::Created(store.create(&draft)?),
        };
        self.reset();
        Ok(outcome)
    }

    /// Drop the draft and the edit target.
    pub fn cancel(&mut self) {
        if self.state() != EditorState::Idle {
            debug!(target_task = ?self.edit_target, "draft cancelled");
        }
        self.reset();
    }

    /// Return to Idle if `id` is the task under edit. Called when that task is deleted.
    pub fn clear_target_if(&mut self, id: TaskId) -> bool {
        if self.edit_target == Some(id) {
            debug!(%id, "task under edit was deleted; draft dropped");
            self.reset();
            true
        } else {
            false
        }
    }

    /// Follow a status change made from the card of the task under edit, so
    /// saving the edit does not revert it.
    pub fn sync_status(&mut self, id: TaskId, status: Status) {
        if self.edit_target == Some(id) {
            self.status = status;
            self.baseline.status = status;
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut InputField {
        match field {
            FormField::TaskName => &mut self.task_name,
            FormField::Description => &mut self.description,
        }
    }

    /// Mark which input has the cursor; `None` deactivates both.
    pub fn set_active(&mut self, field: Option<FormField>) {
        self.task_name.active = field == Some(FormField::TaskName);
        self.description.active = field == Some(FormField::Description);
    }

    fn load(&mut self, draft: &Draft) {
        let task_active = self.task_name.active;
        let description_active = self.description.active;
        self.task_name = InputField::with_value(&draft.task_name);
        self.description = InputField::with_value(&draft.description);
        self.task_name.active = task_active;
        self.description.active = description_active;
        self.status = draft.status;
    }

    fn reset(&mut self) {
        self.load(&Draft::default());
        self.baseline = Draft::default();
        self.edit_target = None;
    }
}
