//! Given steps for board move BDD scenarios.

use super::world::{BoardWorld, run_async};
use chrono::NaiveDate;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::project::domain::MemberId;
use taskboard::project::services::{
    CreateProjectRequest, CreateTaskRequest, MemberRequest, ProjectDetailsRequest, TaskRequest,
};

#[given(r#"a project "{name}" with a two-person team"#)]
fn project_with_team(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let start = NaiveDate::from_ymd_opt(2024, 4, 1).ok_or_else(|| eyre::eyre!("bad date"))?;
    let end = NaiveDate::from_ymd_opt(2024, 9, 30).ok_or_else(|| eyre::eyre!("bad date"))?;
    let request = CreateProjectRequest::new(ProjectDetailsRequest::new(
        name,
        "Board move scenario",
        start,
        end,
        "Operations",
    ))
    .with_members([
        MemberRequest::new(
            MemberId::new(1),
            "Ana García",
            "https://i.pravatar.cc/150?img=1",
            "Lead",
        ),
        MemberRequest::new(
            MemberId::new(2),
            "Carlos Ruiz",
            "https://i.pravatar.cc/150?img=3",
            "Developer",
        ),
    ]);
    let project = run_async(world.projects.create(request)).wrap_err("create scenario project")?;
    world.project = Some(project);
    Ok(())
}

#[given(r#"a task "{title}" with priority "{priority}" in column "{column}""#)]
fn task_in_column(
    world: &mut BoardWorld,
    title: String,
    priority: String,
    column: String,
) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let request = CreateTaskRequest::new(
        project_id,
        TaskRequest::new(title, "Created by the scenario", priority, 2)
            .with_assignees([MemberId::new(1)]),
    )
    .in_column(column);
    let task = run_async(world.boards.create_task(request)).wrap_err("create scenario task")?;
    world.task = Some(task);
    Ok(())
}
