//! Modals of the single-screen variant: the "New Task" input and the
//! read-only "Task Details" popup, both layered over the task list.
//!
//! Pair them with a store configured with
//! [`TaskRules::quick_add`](crate::task::domain::TaskRules::quick_add) so a
//! bare name is enough to save.

use crate::task::{
    domain::{Task, TaskDraft, TaskId},
    ports::TaskRepository,
    services::{TaskStore, TaskStoreResult},
};
use mockable::Clock;

/// Modal heading.
pub const QUICK_ADD_HEADING: &str = "New Task";

/// Placeholder of the modal's text input.
pub const QUICK_ADD_PLACEHOLDER: &str = "Enter a task";

/// Details popup heading.
pub const QUICK_DETAILS_HEADING: &str = "Task Details";

/// Quick-add modal state.
pub struct QuickAddModal<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    store: TaskStore<R, C>,
    visible: bool,
    input: String,
}

impl<R, C> QuickAddModal<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a hidden modal with empty input.
    #[must_use]
    pub const fn new(store: TaskStore<R, C>) -> Self {
        Self {
            store,
            visible: false,
            input: String::new(),
        }
    }

    /// Returns whether the modal is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the current input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The floating add button shows the modal.
    pub const fn open(&mut self) {
        self.visible = true;
    }

    /// Text input changed. Input beyond the title limit is cut off.
    pub fn text_changed(&mut self, text: &str) {
        let limit = self.store.rules().max_title_chars;
        self.input = text.chars().take(limit).collect();
    }

    /// Cancel hides the modal without adding anything.
    pub const fn cancel_pressed(&mut self) {
        self.visible = false;
    }

    /// Add button: stores the input as a new task, then clears and hides
    /// the modal.
    ///
    /// # Errors
    ///
    /// Returns the store error, e.g. a validation failure for blank input,
    /// in which case the modal stays open with its input.
    pub fn add_pressed(&mut self) -> TaskStoreResult<Task> {
        let task = self
            .store
            .add(&TaskDraft::new().with_title(self.input.as_str()))?;
        self.input.clear();
        self.visible = false;
        Ok(task)
    }
}

/// Popup showing the name of a tapped task, dismissed with Close.
pub struct QuickDetailsModal<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    store: TaskStore<R, C>,
    showing: Option<TaskId>,
}

impl<R, C> QuickDetailsModal<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a hidden popup.
    #[must_use]
    pub const fn new(store: TaskStore<R, C>) -> Self {
        Self {
            store,
            showing: None,
        }
    }

    /// Returns whether the popup is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.showing.is_some()
    }

    /// Returns the popup heading.
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        QUICK_DETAILS_HEADING
    }

    /// Tapping a row shows that task.
    pub const fn open(&mut self, id: TaskId) {
        self.showing = Some(id);
    }

    /// Returns the name to show, or `None` while hidden or once the task is
    /// gone.
    ///
    /// # Errors
    ///
    /// Returns the store error when the lookup fails.
    pub fn name(&self) -> TaskStoreResult<Option<String>> {
        let Some(id) = self.showing else {
            return Ok(None);
        };
        Ok(self.store.find(id)?.map(|task| task.title().to_owned()))
    }

    /// Close hides the popup and forgets the task.
    pub const fn close_pressed(&mut self) {
        self.showing = None;
    }
}
