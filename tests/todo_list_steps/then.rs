//! Then steps for to-do list BDD scenarios.

use super::world::{TodoWorld, quoted_names};
use rstest_bdd_macros::then;

fn ensure_task_count(world: &TodoWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.app.tasks().len();
    eyre::ensure!(actual == count, "expected {count} tasks, found {actual}");
    Ok(())
}

fn ensure_focus_count(world: &TodoWorld, times: usize) -> Result<(), eyre::Report> {
    let actual = world.heading.request_count();
    eyre::ensure!(
        actual == times,
        "expected {times} heading focus requests, found {actual}"
    );
    Ok(())
}

#[then("the list holds {count:usize} task")]
fn list_holds_one(world: &TodoWorld, count: usize) -> Result<(), eyre::Report> {
    ensure_task_count(world, count)
}

#[then("the list holds {count:usize} tasks")]
fn list_holds_many(world: &TodoWorld, count: usize) -> Result<(), eyre::Report> {
    ensure_task_count(world, count)
}

#[then(r#"the heading reads "{heading}""#)]
fn heading_reads(world: &TodoWorld, heading: String) -> Result<(), eyre::Report> {
    let view = world.app.view();
    eyre::ensure!(
        view.heading == heading,
        "expected heading '{heading}', found '{}'",
        view.heading
    );
    if let Some(last) = world.observer.last_view() {
        eyre::ensure!(last == view, "observer missed the latest commit");
    }
    Ok(())
}

#[then(r#"the task "{name}" is completed"#)]
fn task_is_completed(world: &TodoWorld, name: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&name)?;
    let completed = world
        .app
        .tasks()
        .get(id)
        .is_some_and(|task| task.is_completed());
    eyre::ensure!(completed, "expected task '{name}' to be completed");
    Ok(())
}

#[then("the visible tasks are {names}")]
fn visible_tasks_are(world: &TodoWorld, names: String) -> Result<(), eyre::Report> {
    let expected = quoted_names(&names);
    let visible: Vec<String> = world
        .app
        .view()
        .tasks
        .iter()
        .map(|task| task.name().as_str().to_owned())
        .collect();
    eyre::ensure!(
        visible == expected,
        "expected visible tasks {expected:?}, found {visible:?}"
    );
    Ok(())
}

#[then("no tasks are visible")]
fn no_tasks_visible(world: &TodoWorld) -> Result<(), eyre::Report> {
    let view = world.app.view();
    eyre::ensure!(
        view.tasks.is_empty(),
        "expected no visible tasks, found {}",
        view.count
    );
    Ok(())
}

#[then("the heading was focused {times:usize} time")]
fn heading_focused_once(world: &TodoWorld, times: usize) -> Result<(), eyre::Report> {
    ensure_focus_count(world, times)
}

#[then("the heading was focused {times:usize} times")]
fn heading_focused_many(world: &TodoWorld, times: usize) -> Result<(), eyre::Report> {
    ensure_focus_count(world, times)
}
