//! When steps for board move BDD scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::project::services::MoveTaskRequest;

#[when(r#"the task is dragged from "{from}" to "{to}""#)]
fn drag_task(world: &mut BoardWorld, from: String, to: String) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let task_id = world.task()?.id();
    let result = run_async(
        world
            .boards
            .move_task(MoveTaskRequest::new(project_id, task_id, from, to)),
    );
    world.last_move = Some(result);
    Ok(())
}
