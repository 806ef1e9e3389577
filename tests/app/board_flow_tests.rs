//! Task board flows driven through the application state.

use super::helpers::{MemoryApp, SEEDED_PROJECTS, app, initial_tasks, project_ids, team_project};
use rstest::rstest;
use taskboard::confirmation::FixedConfirmation;
use taskboard::notification::NotificationKind;
use taskboard::project::domain::{
    Column, MemberId, MoveOutcome, ProjectId, ProjectStatus, TaskId, TaskPriority,
};
use taskboard::project::services::{CreateTaskRequest, MoveTaskRequest, TaskRequest};

fn draft_spec() -> TaskRequest {
    TaskRequest::new("Draft spec", "Write the first draft", "Alta", 3)
        .with_assignees([MemberId::new(2)])
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_lands_in_to_do_with_a_fresh_id(app: MemoryApp) {
    let project = app
        .projects()
        .create(team_project("Planner"))
        .await
        .expect("project created");

    let task = app
        .boards()
        .create_task(CreateTaskRequest::new(project.id(), draft_spec()).in_column("To-Do"))
        .await
        .expect("task created");

    assert_eq!(task.title(), "Draft spec");
    assert_eq!(task.priority(), TaskPriority::High);
    assert_eq!(task.remaining_days(), 3);
    assert!(![1, 2, 3, 4].contains(&task.id().value()));

    let board = app.boards().board(project.id()).await.expect("board loads");
    assert_eq!(board.locate(task.id()), Some(Column::ToDo));

    let notices = app.notifications().active();
    assert!(notices.iter().any(|notice| {
        notice.kind() == NotificationKind::Success
            && notice.message() == "Task \"Draft spec\" created"
    }));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dragging_to_in_progress_appends_the_task(app: MemoryApp) {
    let rpa = ProjectId::new(1);
    let task = app
        .boards()
        .create_task(CreateTaskRequest::new(
            rpa,
            TaskRequest::new("Draft spec", "Write the first draft", "Alta", 3),
        ))
        .await
        .expect("task created");

    let outcome = app
        .boards()
        .move_task(MoveTaskRequest::new(rpa, task.id(), "To-Do", "En Progreso"))
        .await
        .expect("move applies");

    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            from: Column::ToDo,
            to: Column::InProgress
        }
    );
    let board = app.boards().board(rpa).await.expect("board loads");
    assert!(board.tasks(Column::ToDo).iter().all(|t| t.id() != task.id()));
    assert_eq!(
        board.tasks(Column::InProgress).last().map(|t| t.id()),
        Some(task.id())
    );
    assert_eq!(board.tasks(Column::InProgress).len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_project_leaves_the_others_untouched(app: MemoryApp) {
    let before = app.projects().list().await.expect("projects list");
    let doomed = app
        .projects()
        .create(team_project("Short-lived").with_tasks(initial_tasks(5)))
        .await
        .expect("project created");
    assert_eq!(doomed.board().len(), 5);
    assert_eq!(doomed.members().len(), 2);

    let deletion = app
        .projects()
        .delete(doomed.id(), &FixedConfirmation::accept())
        .await
        .expect("deletion runs");

    assert!(deletion.is_deleted());
    assert!(
        app.projects()
            .find_by_id(doomed.id())
            .await
            .expect("lookup runs")
            .is_none()
    );
    assert_eq!(app.projects().list().await.expect("projects list"), before);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn declined_deletion_keeps_the_project(app: MemoryApp) {
    let rpa = ProjectId::new(1);

    let deletion = app
        .projects()
        .delete(rpa, &FixedConfirmation::decline())
        .await
        .expect("deletion runs");

    assert!(!deletion.is_deleted());
    assert_eq!(
        project_ids(&app).await,
        SEEDED_PROJECTS.map(ProjectId::new)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn portfolio_counts_the_seeded_projects(app: MemoryApp) {
    let rpa = ProjectId::new(1);
    app.boards()
        .move_task_to(rpa, TaskId::new(1), "hecho")
        .await
        .expect("move applies");

    let summary = app.portfolio().await.expect("portfolio loads");

    assert_eq!(summary.projects(), 4);
    assert_eq!(summary.with_status(ProjectStatus::InProgress), 2);
    assert_eq!(summary.with_status(ProjectStatus::Planned), 1);
    assert_eq!(summary.with_status(ProjectStatus::Completed), 1);
    assert_eq!(summary.tasks(), 4);
    assert_eq!(summary.done_tasks(), 1);
}
