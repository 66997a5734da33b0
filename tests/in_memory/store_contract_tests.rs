//! Task store contract tests against the in-memory repository.

use super::helpers::{quick_store, store};
use crate::test_helpers::{TestTaskStore, parse_date};
use chrono::Days;
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;
use todolist::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{
        MISSING_FIELDS_NOTICE, Task, TaskDomainError, TaskDraft, TaskId, TaskPatch, TaskRules,
    },
    services::{TaskStore, TaskStoreError},
};

fn full_draft(title: &str, description: &str, date: &str) -> Result<TaskDraft, eyre::Report> {
    Ok(TaskDraft::new()
        .with_title(title)
        .with_description(description)
        .with_date(parse_date(date)?))
}

#[rstest]
fn add_update_remove_round_trip(store: TestTaskStore) -> Result<(), eyre::Report> {
    let created = store.add(&full_draft("Buy milk", "2%", "2024-01-10")?)?;
    let listed = store.list()?;
    eyre::ensure!(listed == vec![created.clone()], "expected only the new task");

    store.update(created.id(), TaskPatch::new().with_title("Buy oat milk"))?;
    let listed = store.list()?;
    let first = listed
        .first()
        .ok_or_else(|| eyre::eyre!("expected one task"))?;
    eyre::ensure!(first.title() == "Buy oat milk", "title not updated");
    eyre::ensure!(first.description() == Some("2%"), "description changed");
    eyre::ensure!(
        first.date() == Some(parse_date("2024-01-10")?),
        "date changed"
    );
    eyre::ensure!(first.id() == created.id(), "id changed");

    store.remove(store.request_removal(created.id()).confirm())?;
    eyre::ensure!(store.list()?.is_empty(), "expected an empty store");
    Ok(())
}

#[rstest]
fn empty_title_only_produces_a_notice(store: TestTaskStore) -> Result<(), eyre::Report> {
    let result = store.add(&full_draft("", "2%", "2024-01-10")?);

    let Err(err) = result else {
        eyre::bail!("expected a validation failure");
    };
    eyre::ensure!(
        matches!(err, TaskStoreError::Validation(_)),
        "unexpected error {err}"
    );
    eyre::ensure!(err.notice() == Some(MISSING_FIELDS_NOTICE), "wrong notice");
    eyre::ensure!(store.list()?.is_empty(), "store must stay empty");
    Ok(())
}

#[rstest]
fn many_adds_keep_order_and_unique_ids(quick_store: TestTaskStore) -> Result<(), eyre::Report> {
    let titles: Vec<String> = (1..=25).map(|n| format!("Task {n}")).collect();
    for title in &titles {
        quick_store.add(&TaskDraft::new().with_title(title.as_str()))?;
    }

    let listed = quick_store.list()?;
    let listed_titles: Vec<&str> = listed.iter().map(Task::title).collect();
    eyre::ensure!(listed_titles == titles, "order not preserved");
    let mut ids: Vec<TaskId> = listed.iter().map(Task::id).collect();
    ids.sort_by_key(|id| id.into_inner());
    ids.dedup();
    eyre::ensure!(ids.len() == titles.len(), "duplicate ids");
    Ok(())
}

#[rstest]
fn update_touches_only_the_patched_task(store: TestTaskStore) -> Result<(), eyre::Report> {
    let first = store.add(&full_draft("One", "first", "2024-01-10")?)?;
    let second = store.add(&full_draft("Two", "second", "2024-01-11")?)?;

    store.update(
        second.id(),
        TaskPatch::new().with_date(parse_date("2024-02-01")?),
    )?;

    let listed = store.list()?;
    eyre::ensure!(listed.first() == Some(&first), "untouched task changed");
    let updated = listed
        .get(1)
        .ok_or_else(|| eyre::eyre!("expected two tasks"))?;
    eyre::ensure!(updated.title() == second.title(), "title changed");
    eyre::ensure!(
        updated.description() == second.description(),
        "description changed"
    );
    eyre::ensure!(
        updated.date() == Some(parse_date("2024-02-01")?),
        "date not updated"
    );
    Ok(())
}

#[rstest]
fn misses_leave_the_store_unchanged(store: TestTaskStore) -> Result<(), eyre::Report> {
    store.add(&full_draft("Stay", "put", "2024-01-10")?)?;
    let before = store.list()?;
    let ghost = TaskId::random();

    let updated = store.update(ghost, TaskPatch::new().with_title("Ghost"))?;
    let removed = store.remove(store.request_removal(ghost).confirm())?;

    eyre::ensure!(updated.is_none(), "update of unknown id returned a task");
    eyre::ensure!(removed.is_none(), "removal of unknown id returned a task");
    eyre::ensure!(store.list()? == before, "store changed");
    Ok(())
}

#[rstest]
fn dated_scenario_runs_on_the_system_clock() -> Result<(), eyre::Report> {
    let store = TaskStore::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    );

    let created = store.add(&full_draft("Buy milk", "2%", "2024-01-10")?)?;
    eyre::ensure!(store.list()?.len() == 1, "expected one task");

    store.update(created.id(), TaskPatch::new().with_title("Buy oat milk"))?;
    let renamed = store
        .find(created.id())?
        .ok_or_else(|| eyre::eyre!("task missing after rename"))?;
    eyre::ensure!(renamed.title() == "Buy oat milk", "title not updated");
    eyre::ensure!(
        renamed.date() == Some(parse_date("2024-01-10")?),
        "date changed"
    );

    store.remove(store.request_removal(created.id()).confirm())?;
    eyre::ensure!(store.list()?.is_empty(), "expected an empty store");
    Ok(())
}

#[rstest]
fn past_dates_are_refused_only_by_opted_in_rules(
    store: TestTaskStore,
) -> Result<(), eyre::Report> {
    let yesterday = store
        .today()
        .checked_sub_days(Days::new(1))
        .ok_or_else(|| eyre::eyre!("no day before today"))?;
    let draft = TaskDraft::new()
        .with_title("Yesterday's errand")
        .with_description("late")
        .with_date(yesterday);
    let strict = store
        .clone()
        .with_rules(TaskRules::full_form().rejecting_past_dates());

    let refused = strict.add(&draft);
    eyre::ensure!(
        matches!(
            refused,
            Err(TaskStoreError::Validation(TaskDomainError::DateInPast { .. }))
        ),
        "strict rules accepted a past date"
    );
    eyre::ensure!(store.list()?.is_empty(), "refused task was stored");

    store.add(&draft)?;
    eyre::ensure!(store.list()?.len() == 1, "default rules refused a past date");
    Ok(())
}
