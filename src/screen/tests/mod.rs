//! Unit tests for the screens.


use std::sync::Arc;

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskDraft},
    services::TaskStore,
};
use mockable::DefaultClock;
pub(super) use crate::test_support::date;

pub(super) type TestStore = TaskStore<InMemoryTaskRepository, DefaultClock>;

/// Fresh store on the system clock.
pub(super) fn new_store() -> TestStore {
    TaskStore::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Adds a fully filled-in task.
pub(super) fn add_task(store: &TestStore, title: &str) -> Task {
    store
        .add(
            &TaskDraft::new()
                .with_title(title)
                .with_description("2%")
                .with_date(date(2024, 1, 10)),
        )
        .expect("valid task")
}
