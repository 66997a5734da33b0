//! Given steps for task store BDD scenarios.

use super::world::TaskStoreWorld;
use crate::test_helpers::parse_date;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use todolist::task::domain::TaskDraft;

#[given("an empty task store")]
fn empty_task_store(world: &mut TaskStoreWorld) -> Result<(), eyre::Report> {
    let tasks = world.store.list()?;
    eyre::ensure!(tasks.is_empty(), "expected an empty store");
    Ok(())
}

#[given(r#"a task titled "{title}" with description "{description}" due "{date}" has been added"#)]
fn task_has_been_added(
    world: &mut TaskStoreWorld,
    title: String,
    description: String,
    date: String,
) -> Result<(), eyre::Report> {
    let draft = TaskDraft::new()
        .with_title(title)
        .with_description(description)
        .with_date(parse_date(&date)?);
    world
        .store
        .add(&draft)
        .wrap_err("add task in scenario setup")?;
    Ok(())
}
