//! Shared fixtures for application-level tests.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::fixture;
use taskboard::app::AppState;
use taskboard::config::AppConfig;
use taskboard::project::domain::{MemberId, ProjectId};
use taskboard::project::services::{
    CreateProjectRequest, InitialTaskRequest, MemberRequest, ProjectDetailsRequest, TaskRequest,
};
use taskboard::storage::adapters::InMemoryKeyValueStore;

/// Application state over an in-memory store.
pub type MemoryApp = AppState<InMemoryKeyValueStore>;

/// Identifiers of the seeded projects.
pub const SEEDED_PROJECTS: [u64; 4] = [1, 2, 3, 4];

/// Provides an application seeded with the demonstration data.
#[fixture]
pub fn app() -> MemoryApp {
    AppState::in_memory(&AppConfig::default())
}

/// Builds a second application over the same store.
#[must_use]
pub fn reopen(app: &MemoryApp) -> MemoryApp {
    AppState::new(
        Arc::clone(app.store()),
        Arc::new(DefaultClock),
        &AppConfig::default(),
    )
}

/// Returns a calendar date for request fixtures.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Builds a project request for a two-person team.
#[must_use]
pub fn team_project(name: &str) -> CreateProjectRequest {
    CreateProjectRequest::new(
        ProjectDetailsRequest::new(
            name,
            "Quarterly release of the planning tool",
            date(2024, 4, 1),
            date(2024, 6, 30),
            "Software Development",
        )
        .with_status("En Progreso")
        .with_progress(10),
    )
    .with_members([
        MemberRequest::new(
            MemberId::new(1),
            "Ana García",
            "https://i.pravatar.cc/150?img=1",
            "Project Manager",
        ),
        MemberRequest::new(
            MemberId::new(2),
            "Carlos Ruiz",
            "https://i.pravatar.cc/150?img=3",
            "Developer",
        ),
    ])
}

/// Builds `count` initial tasks spread over the three columns.
#[must_use]
pub fn initial_tasks(count: usize) -> Vec<InitialTaskRequest> {
    ["porHacer", "enProgreso", "hecho"]
        .into_iter()
        .cycle()
        .take(count)
        .enumerate()
        .map(|(index, column)| {
            InitialTaskRequest::new(
                TaskRequest::new(
                    format!("Task {index}"),
                    "Seeded with the project",
                    "Media",
                    2,
                )
                .with_assignees([MemberId::new(1)]),
            )
            .with_column(column)
        })
        .collect()
}

/// Returns the identifiers of every stored project.
pub async fn project_ids(app: &MemoryApp) -> Vec<ProjectId> {
    app.projects()
        .list()
        .await
        .expect("projects list")
        .iter()
        .map(|project| project.id())
        .collect()
}
