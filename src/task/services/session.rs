//! Edit sessions: a draft held apart from the store until it is saved.

use super::store::{TaskStore, TaskStoreError};
use crate::task::{
    domain::{Task, TaskDraft, TaskId},
    ports::TaskRepository,
};
use chrono::NaiveDate;
use mockable::Clock;
use thiserror::Error;

/// What a session commits to on save, decided when the session begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditMode {
    /// Saving adds a new task.
    Create,
    /// Saving updates the task with this id.
    EditExisting(TaskId),
}

/// Errors raised while beginning or saving an edit session.
#[derive(Debug, Error)]
pub enum EditSessionError {
    /// The task being edited does not exist (or no longer exists).
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// The store rejected the operation.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

impl EditSessionError {
    /// Returns the user-facing notice for validation failures.
    #[must_use]
    pub const fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Store(err) => err.notice(),
            Self::TaskNotFound(_) => None,
        }
    }
}

/// A save that did not go through.
///
/// Carries the session back unchanged so the form keeps its input.
#[derive(Debug, Error)]
#[error("save rejected: {reason}")]
pub struct SaveRejected {
    session: Box<EditSession>,
    reason: EditSessionError,
}

impl SaveRejected {
    /// Returns why the save failed.
    #[must_use]
    pub const fn reason(&self) -> &EditSessionError {
        &self.reason
    }

    /// Returns the notice to show, if the failure was a validation failure.
    #[must_use]
    pub const fn notice(&self) -> Option<&'static str> {
        self.reason.notice()
    }

    /// Returns the session so editing can continue.
    #[must_use]
    pub fn into_session(self) -> EditSession {
        *self.session
    }

    /// Splits into the session and the failure reason.
    #[must_use]
    pub fn into_parts(self) -> (EditSession, EditSessionError) {
        (*self.session, self.reason)
    }
}

/// An in-progress add or edit of a single task.
///
/// A live session is the editing state. It ends when consumed by
/// [`save`](Self::save) (saved) or by [`cancel`](Self::cancel) or
/// [`back`](Self::back) (discarded); only `save` writes to the store, and a
/// rejected save hands the session back through [`SaveRejected`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    mode: EditMode,
    draft: TaskDraft,
    max_description_chars: usize,
}

impl EditSession {
    /// Starts a session against `store`.
    ///
    /// An [`EditMode::Create`] draft starts dated today; for
    /// [`EditMode::EditExisting`] the draft is seeded from the stored task.
    ///
    /// # Errors
    ///
    /// Returns [`EditSessionError::TaskNotFound`] when editing an unknown
    /// task, or [`EditSessionError::Store`] when the lookup fails.
    pub fn begin<R, C>(store: &TaskStore<R, C>, mode: EditMode) -> Result<Self, EditSessionError>
    where
        R: TaskRepository,
        C: Clock + Send + Sync,
    {
        let draft = match mode {
            EditMode::Create => TaskDraft::new().with_date(store.today()),
            EditMode::EditExisting(id) => {
                let task = store.find(id)?.ok_or(EditSessionError::TaskNotFound(id))?;
                TaskDraft::from_task(&task)
            }
        };
        tracing::debug!(?mode, "edit session started");
        Ok(Self {
            mode,
            draft,
            max_description_chars: store.rules().max_description_chars,
        })
    }

    /// Returns the mode chosen at session start.
    #[must_use]
    pub const fn mode(&self) -> EditMode {
        self.mode
    }

    /// Returns the current draft.
    #[must_use]
    pub const fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// Replaces the title input.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.set_title(title);
    }

    /// Replaces the description input.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.set_description(description);
    }

    /// Replaces or clears the picked date.
    pub const fn set_date(&mut self, date: Option<NaiveDate>) {
        self.draft.set_date(date);
    }

    /// Returns how many more description characters the form accepts.
    #[must_use]
    pub fn description_chars_left(&self) -> usize {
        self.max_description_chars
            .saturating_sub(self.draft.description().chars().count())
    }

    /// Validates and commits the draft, returning the stored task.
    ///
    /// Adds a task in [`EditMode::Create`]; in [`EditMode::EditExisting`]
    /// only fields that differ from the stored task are written.
    ///
    /// # Errors
    ///
    /// Returns [`SaveRejected`] holding this session when validation fails,
    /// the edited task has disappeared, or the store fails. Nothing is
    /// written in that case.
    pub fn save<R, C>(self, store: &TaskStore<R, C>) -> Result<Task, SaveRejected>
    where
        R: TaskRepository,
        C: Clock + Send + Sync,
    {
        match self.commit(store) {
            Ok(task) => {
                tracing::debug!(mode = ?self.mode, task_id = %task.id(), "edit session saved");
                Ok(task)
            }
            Err(reason) => Err(SaveRejected {
                session: Box::new(self),
                reason,
            }),
        }
    }

    /// Drops the draft without touching the store.
    pub fn cancel(self) {
        tracing::debug!(mode = ?self.mode, "edit session discarded");
    }

    /// Leaves the form. Never saves, even when every field is filled in.
    pub fn back(self) {
        self.cancel();
    }

    fn commit<R, C>(&self, store: &TaskStore<R, C>) -> Result<Task, EditSessionError>
    where
        R: TaskRepository,
        C: Clock + Send + Sync,
    {
        match self.mode {
            EditMode::Create => Ok(store.add(&self.draft)?),
            EditMode::EditExisting(id) => {
                let current = store.find(id)?.ok_or(EditSessionError::TaskNotFound(id))?;
                let patch = self.draft.changes_from(&current);
                store
                    .update(id, patch)?
                    .ok_or(EditSessionError::TaskNotFound(id))
            }
        }
    }
}
