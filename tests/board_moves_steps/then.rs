//! Then steps for board move BDD scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::notification::NotificationKind;
use taskboard::project::domain::{Board, Column, MoveOutcome, ProjectDomainError};
use taskboard::project::services::{ProjectServiceError, ProjectServiceResult};

fn last_move(world: &BoardWorld) -> Result<&ProjectServiceResult<MoveOutcome>, eyre::Report> {
    world
        .last_move
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing move result"))
}

fn current_board(world: &BoardWorld) -> Result<Board, eyre::Report> {
    let project_id = world.project()?.id();
    Ok(run_async(world.boards.board(project_id))?)
}

fn parse_column(label: &str) -> Result<Column, eyre::Report> {
    Column::try_from(label).map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))
}

fn move_notices(world: &BoardWorld) -> usize {
    world
        .notifications
        .active()
        .iter()
        .filter(|notice| notice.kind() == NotificationKind::Info)
        .count()
}

#[then(r#"the task is the last one in "{column}""#)]
fn task_is_last_in(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let expected = parse_column(&column)?;
    let task_id = world.task()?.id();
    let board = current_board(world)?;
    let last = board.tasks(expected).last().map(|task| task.id());
    eyre::ensure!(
        last == Some(task_id),
        "expected task {task_id} last in {expected}, found {last:?}"
    );
    Ok(())
}

#[then(r#"the column "{column}" no longer holds the task"#)]
fn column_lacks_task(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let source = parse_column(&column)?;
    let task_id = world.task()?.id();
    let board = current_board(world)?;
    eyre::ensure!(
        board.tasks(source).iter().all(|task| task.id() != task_id),
        "task {task_id} is still in {source}"
    );
    Ok(())
}

#[then(r#"the task stays in "{column}""#)]
fn task_stays_in(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let expected = parse_column(&column)?;
    let task_id = world.task()?.id();
    let board = current_board(world)?;
    eyre::ensure!(
        board.locate(task_id) == Some(expected),
        "expected task {task_id} in {expected}, found {:?}",
        board.locate(task_id)
    );
    eyre::ensure!(board.len() == 1, "expected a single task, found {}", board.len());
    Ok(())
}

#[then("a move notice is shown")]
fn move_notice_shown(world: &BoardWorld) -> Result<(), eyre::Report> {
    let count = move_notices(world);
    eyre::ensure!(count == 1, "expected one move notice, found {count}");
    Ok(())
}

#[then("no move notice is shown")]
fn no_move_notice(world: &BoardWorld) -> Result<(), eyre::Report> {
    let count = move_notices(world);
    eyre::ensure!(count == 0, "expected no move notice, found {count}");
    Ok(())
}

#[then("the move changes nothing")]
fn move_changes_nothing(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = last_move(world)?;
    eyre::ensure!(
        matches!(result, Ok(MoveOutcome::Unchanged { .. })),
        "expected an unchanged outcome, got {result:?}"
    );
    Ok(())
}

#[then("the move is rejected as stale")]
fn move_rejected_as_stale(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = last_move(world)?;
    eyre::ensure!(
        matches!(
            result,
            Err(ProjectServiceError::Domain(
                ProjectDomainError::StaleMoveSource { .. }
            ))
        ),
        "expected StaleMoveSource error, got {result:?}"
    );
    Ok(())
}

#[then("the move is rejected for an unknown column")]
fn move_rejected_for_unknown_column(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = last_move(world)?;
    eyre::ensure!(
        matches!(result, Err(ProjectServiceError::InvalidColumn(_))),
        "expected InvalidColumn error, got {result:?}"
    );
    Ok(())
}
