//! Fixtures for in-memory integration tests.

use crate::test_helpers::{TestTaskStore, new_store};
use rstest::fixture;
use todolist::task::domain::TaskRules;

/// Provides an empty store validating with the full-form rules.
#[fixture]
pub fn store() -> TestTaskStore {
    new_store()
}

/// Provides an empty store validating with the quick-add rules.
#[fixture]
pub fn quick_store() -> TestTaskStore {
    new_store().with_rules(TaskRules::quick_add())
}
