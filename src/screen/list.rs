//! The task list screen.

use super::{format::optional_date_label, route::Route};
use crate::task::{
    domain::{Task, TaskId},
    ports::TaskRepository,
    services::{EditMode, PendingRemoval, RemovalChoice, TaskStore, TaskStoreResult},
};
use mockable::Clock;

/// Headline shown when there are no tasks.
pub const EMPTY_HEADLINE: &str = "No Tasks Added.";

/// Hint shown below the empty-list headline.
pub const EMPTY_HINT: &str = "Please add new tasks by \nclicking the add button below.";

/// One line of the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    /// Task shown on this row.
    pub id: TaskId,
    /// Title, shown on a single line.
    pub title: String,
    /// Formatted date, empty when the task has none.
    pub date_label: String,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().to_owned(),
            date_label: optional_date_label(task.date()),
        }
    }
}

/// What the list screen displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskListView {
    /// No tasks yet.
    Empty {
        /// Bold headline.
        headline: &'static str,
        /// Explanatory hint.
        hint: &'static str,
    },
    /// Tasks in insertion order.
    Rows(Vec<TaskRow>),
}

/// The task list screen.
pub struct TaskListScreen<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    store: TaskStore<R, C>,
}

impl<R, C> TaskListScreen<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates the screen over the given store handle.
    #[must_use]
    pub const fn new(store: TaskStore<R, C>) -> Self {
        Self { store }
    }

    /// Builds the current list contents.
    ///
    /// # Errors
    ///
    /// Returns the store error when the tasks cannot be read.
    pub fn render(&self) -> TaskStoreResult<TaskListView> {
        let tasks = self.store.list()?;
        if tasks.is_empty() {
            return Ok(TaskListView::Empty {
                headline: EMPTY_HEADLINE,
                hint: EMPTY_HINT,
            });
        }
        Ok(TaskListView::Rows(tasks.iter().map(TaskRow::from).collect()))
    }

    /// The floating add button opens an empty form.
    #[must_use]
    pub const fn add_pressed(&self) -> Route {
        Route::TaskSave(EditMode::Create)
    }

    /// Tapping a row opens its details.
    #[must_use]
    pub const fn row_pressed(&self, id: TaskId) -> Route {
        Route::TaskDetails(id)
    }

    /// The row's edit button opens the form seeded with the task.
    #[must_use]
    pub const fn edit_pressed(&self, id: TaskId) -> Route {
        Route::TaskSave(EditMode::EditExisting(id))
    }

    /// The row's delete button asks for confirmation.
    pub const fn delete_pressed(&self, id: TaskId) -> PendingRemoval {
        self.store.request_removal(id)
    }

    /// Applies the answer to a delete prompt.
    ///
    /// Returns the removed task, if the removal was confirmed and the task
    /// still existed.
    ///
    /// # Errors
    ///
    /// Returns the store error when the removal fails.
    pub fn resolve_removal(
        &self,
        pending: PendingRemoval,
        choice: RemovalChoice,
    ) -> TaskStoreResult<Option<Task>> {
        match pending.resolve(choice) {
            Some(confirmed) => self.store.remove(confirmed),
            None => Ok(None),
        }
    }
}
