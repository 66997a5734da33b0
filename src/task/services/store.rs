//! The task store: the single entry point screens use to read and change
//! tasks.

use super::removal::{ConfirmedRemoval, PendingRemoval};
use crate::task::{
    domain::{Task, TaskDomainError, TaskDraft, TaskId, TaskPatch, TaskRules},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by task store operations.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// The task fields failed validation; nothing was written.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskStoreError {
    /// Returns the user-facing notice for validation failures.
    #[must_use]
    pub const fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Validation(err) => Some(err.notice()),
            Self::Repository(_) => None,
        }
    }
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Handle onto the shared task list.
///
/// Clones share the same repository, so every screen given a clone sees the
/// same tasks. Operations run one at a time in response to user actions.
pub struct TaskStore<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    rules: TaskRules,
}

impl<R, C> Clone for TaskStore<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            rules: self.rules.clone(),
        }
    }
}

impl<R, C> TaskStore<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a store validating with [`TaskRules::full_form`].
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            rules: TaskRules::full_form(),
        }
    }

    /// Replaces the validation rules.
    #[must_use]
    pub fn with_rules(mut self, rules: TaskRules) -> Self {
        self.rules = rules;
        self
    }

    /// Returns the active validation rules.
    #[must_use]
    pub const fn rules(&self) -> &TaskRules {
        &self.rules
    }

    /// Returns the current calendar day in the clock's local time zone.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }

    /// Returns all tasks in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the repository fails.
    pub fn list(&self) -> TaskStoreResult<Vec<Task>> {
        let tasks = self.repository.list_all()?;
        tracing::debug!(count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    /// Looks up a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the repository fails.
    pub fn find(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        Ok(self.repository.find_by_id(id)?)
    }

    /// Validates `draft` and appends it as a new task with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Validation`] when the draft violates the
    /// active rules, leaving the store unchanged, or
    /// [`TaskStoreError::Repository`] when the repository rejects the write.
    pub fn add(&self, draft: &TaskDraft) -> TaskStoreResult<Task> {
        let task = Task::create(draft, &self.rules, &*self.clock).inspect_err(|err| {
            tracing::debug!(%err, "rejected new task");
        })?;
        self.repository.store(&task)?;
        tracing::info!(task_id = %task.id(), "task added");
        Ok(task)
    }

    /// Merges `patch` into the task with the given id.
    ///
    /// Returns `Ok(None)` without changing anything when no task has that id.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Validation`] when the merged task violates
    /// the active rules, or [`TaskStoreError::Repository`] when the
    /// repository fails.
    pub fn update(&self, id: TaskId, patch: TaskPatch) -> TaskStoreResult<Option<Task>> {
        let Some(mut task) = self.repository.find_by_id(id)? else {
            tracing::warn!(task_id = %id, "update of unknown task ignored");
            return Ok(None);
        };
        task.apply(patch, &self.rules, &*self.clock)
            .inspect_err(|err| tracing::debug!(task_id = %id, %err, "rejected task update"))?;
        self.repository.update(&task)?;
        tracing::info!(task_id = %id, "task updated");
        Ok(Some(task))
    }

    /// Opens the confirmation prompt for removing a task.
    pub const fn request_removal(&self, id: TaskId) -> PendingRemoval {
        PendingRemoval::new(id)
    }

    /// Removes a task after the user confirmed it.
    ///
    /// Returns the removed task, or `Ok(None)` when it was already gone.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the repository fails.
    pub fn remove(&self, confirmed: ConfirmedRemoval) -> TaskStoreResult<Option<Task>> {
        let id = confirmed.task_id();
        let removed = self.repository.remove(id)?;
        if removed.is_some() {
            tracing::info!(task_id = %id, "task removed");
        } else {
            tracing::warn!(task_id = %id, "removal of unknown task ignored");
        }
        Ok(removed)
    }
}
