//! The read-only task details screen.

use super::{format::optional_date_label, route::Route};
use crate::task::{
    domain::TaskId,
    ports::TaskRepository,
    services::{EditMode, PendingRemoval, RemovalChoice, TaskStore, TaskStoreResult},
};
use mockable::Clock;

/// Placeholder shown in place of a missing description.
pub const MISSING_DESCRIPTION: &str = "-NA-";

/// What the details screen displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetailsView {
    /// Task title.
    pub title: String,
    /// Description, or [`MISSING_DESCRIPTION`].
    pub description: String,
    /// Formatted date, empty when the task has none.
    pub date_label: String,
}

/// Details of a single task with back, edit and delete actions.
pub struct TaskDetailsScreen<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    store: TaskStore<R, C>,
    id: TaskId,
}

impl<R, C> TaskDetailsScreen<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates the screen for task `id`.
    #[must_use]
    pub const fn new(store: TaskStore<R, C>, id: TaskId) -> Self {
        Self { store, id }
    }

    /// Builds the view, or `None` when the task no longer exists.
    ///
    /// # Errors
    ///
    /// Returns the store error when the lookup fails.
    pub fn render(&self) -> TaskStoreResult<Option<TaskDetailsView>> {
        let view = self.store.find(self.id)?.map(|task| TaskDetailsView {
            title: task.title().to_owned(),
            description: task.description().unwrap_or(MISSING_DESCRIPTION).to_owned(),
            date_label: optional_date_label(task.date()),
        });
        Ok(view)
    }

    /// Returns to the list.
    #[must_use]
    pub const fn back_pressed(&self) -> Route {
        Route::TaskList
    }

    /// Opens the form seeded with this task.
    #[must_use]
    pub const fn edit_pressed(&self) -> Route {
        Route::TaskSave(EditMode::EditExisting(self.id))
    }

    /// Asks for confirmation before deleting this task.
    pub const fn delete_pressed(&self) -> PendingRemoval {
        self.store.request_removal(self.id)
    }

    /// Applies the answer to the delete prompt and returns where to go next:
    /// the list after a confirmed removal, this screen otherwise.
    ///
    /// # Errors
    ///
    /// Returns the store error when the removal fails.
    pub fn resolve_removal(
        &self,
        pending: PendingRemoval,
        choice: RemovalChoice,
    ) -> TaskStoreResult<Route> {
        match pending.resolve(choice) {
            Some(confirmed) => {
                self.store.remove(confirmed)?;
                Ok(Route::TaskList)
            }
            None => Ok(Route::TaskDetails(self.id)),
        }
    }
}
