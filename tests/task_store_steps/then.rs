//! Then steps for task store BDD scenarios.

use super::world::TaskStoreWorld;
use crate::test_helpers::parse_date;
use rstest_bdd_macros::then;

#[then("the store holds {count:usize} tasks")]
fn store_holds(world: &TaskStoreWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.store.list()?.len();
    if actual != count {
        return Err(eyre::eyre!("expected {count} tasks, found {actual}"));
    }
    Ok(())
}

#[then(r#"the first task is titled "{title}" with description "{description}" due "{date}""#)]
fn first_task_matches(
    world: &TaskStoreWorld,
    title: String,
    description: String,
    date: String,
) -> Result<(), eyre::Report> {
    let task = world.first_task()?;
    eyre::ensure!(task.title() == title, "title was {}", task.title());
    eyre::ensure!(
        task.description() == Some(description.as_str()),
        "description was {:?}",
        task.description()
    );
    eyre::ensure!(
        task.date() == Some(parse_date(&date)?),
        "date was {:?}",
        task.date()
    );
    Ok(())
}

#[then(r#"the notice "{notice}" is shown"#)]
fn notice_is_shown(world: &TaskStoreWorld, notice: String) -> Result<(), eyre::Report> {
    let result = world
        .last_add_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing add result"))?;

    let Err(err) = result else {
        return Err(eyre::eyre!("expected the add to fail, got {result:?}"));
    };
    if err.notice() != Some(notice.as_str()) {
        return Err(eyre::eyre!("expected notice {notice:?}, got {:?}", err.notice()));
    }
    Ok(())
}
