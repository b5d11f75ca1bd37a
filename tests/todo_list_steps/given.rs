//! Given steps for to-do list BDD scenarios.

use super::world::{TodoWorld, quoted_names};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty to-do list")]
fn empty_list(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.app.tasks().is_empty(), "expected a fresh world");
    Ok(())
}

#[given("a to-do list with tasks {names}")]
fn list_with_tasks(world: &mut TodoWorld, names: String) -> Result<(), eyre::Report> {
    for name in quoted_names(&names) {
        world
            .app
            .add_task(name.as_str())
            .wrap_err_with(|| format!("seed task '{name}'"))?;
    }
    Ok(())
}

#[given(r#"the task "{name}" is marked completed"#)]
fn task_marked_completed(world: &mut TodoWorld, name: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&name)?;
    world
        .app
        .toggle_task_completed(id)
        .wrap_err("mark seeded task completed")?;
    Ok(())
}
