//! When steps for to-do list BDD scenarios.

use super::world::TodoWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use todomatic::todo::services::TodoCommand;

#[when(r#"the task "{name}" is added"#)]
fn add_task(world: &mut TodoWorld, name: String) -> Result<(), eyre::Report> {
    world.app.add_task(name).wrap_err("add task")?;
    Ok(())
}

#[when(r#"the task "{name}" is toggled"#)]
fn toggle_task(world: &mut TodoWorld, name: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&name)?;
    world.app.toggle_task_completed(id).wrap_err("toggle task")?;
    Ok(())
}

#[when(r#"the task "{name}" is renamed to "{new_name}""#)]
fn rename_task(world: &mut TodoWorld, name: String, new_name: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&name)?;
    world.app.edit_task(id, new_name).wrap_err("rename task")?;
    Ok(())
}

#[when(r#"the task "{name}" is deleted"#)]
fn delete_task(world: &mut TodoWorld, name: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&name)?;
    world.app.delete_task(id).wrap_err("delete task")?;
    Ok(())
}

#[when(r#"the "{filter}" filter is selected"#)]
fn select_filter(world: &mut TodoWorld, filter: String) -> Result<(), eyre::Report> {
    world
        .app
        .set_filter_named(&filter)
        .wrap_err("select filter by name")?;
    Ok(())
}

#[when(r#""{first}" and "{second}" are deleted in one batch"#)]
fn batch_delete(world: &mut TodoWorld, first: String, second: String) -> Result<(), eyre::Report> {
    let commands = vec![
        TodoCommand::Delete(world.task_id(&first)?),
        TodoCommand::Delete(world.task_id(&second)?),
    ];
    world
        .app
        .dispatch_batch(commands)
        .wrap_err("apply batch")?;
    Ok(())
}
