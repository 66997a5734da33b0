//! Shared world state for task store BDD scenarios.

use crate::test_helpers::{TestTaskStore, new_store};
use rstest::fixture;
use todolist::task::{
    domain::{Task, TaskId},
    services::TaskStoreResult,
};

/// Scenario world for task store behaviour tests.
pub struct TaskStoreWorld {
    pub store: TestTaskStore,
    pub last_add_result: Option<TaskStoreResult<Task>>,
    pub last_removed_id: Option<TaskId>,
}

impl TaskStoreWorld {
    /// Creates a world around an empty store on the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: new_store(),
            last_add_result: None,
            last_removed_id: None,
        }
    }

    /// Returns the first task in the store.
    ///
    /// # Errors
    ///
    /// Returns an error when the store is empty or cannot be read.
    pub fn first_task(&self) -> Result<Task, eyre::Report> {
        self.store
            .list()?
            .into_iter()
            .next()
            .ok_or_else(|| eyre::eyre!("store is empty"))
    }
}

impl Default for TaskStoreWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskStoreWorld {
    TaskStoreWorld::default()
}
