//! Re-syncing from changes made through another handle on the same store.

use std::time::Duration;

use super::helpers::{MemoryApp, app, reopen};
use camino::Utf8PathBuf;
use rstest::rstest;
use taskboard::app::AppState;
use taskboard::config::AppConfig;
use taskboard::project::domain::{Column, ProjectId, TaskId};
use taskboard::project::services::MoveTaskRequest;
use taskboard::storage::KeyValueStore;

async fn column_of<S: KeyValueStore + 'static>(
    app: &AppState<S>,
    task_id: TaskId,
) -> Option<Column> {
    app.boards()
        .board(ProjectId::new(1))
        .await
        .expect("board loads")
        .locate(task_id)
}

async fn wait_for_column<S: KeyValueStore + 'static>(
    app: &AppState<S>,
    task_id: TaskId,
    expected: Column,
) -> bool {
    let polling = async {
        while column_of(app, task_id).await != Some(expected) {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    };
    tokio::time::timeout(Duration::from_secs(5), polling)
        .await
        .is_ok()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn watched_state_follows_writes_from_another_handle(app: MemoryApp) {
    let other = reopen(&app);
    let _watch = app.watch_storage();

    other
        .boards()
        .move_task(MoveTaskRequest::new(
            ProjectId::new(1),
            TaskId::new(2),
            "porHacer",
            "hecho",
        ))
        .await
        .expect("move applies");

    assert!(wait_for_column(&app, TaskId::new(2), Column::Done).await);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unwatched_state_keeps_its_copy_until_resynced(app: MemoryApp) {
    let other = reopen(&app);

    other
        .boards()
        .move_task_to(ProjectId::new(1), TaskId::new(3), "In Progress")
        .await
        .expect("move applies");

    assert_eq!(column_of(&app, TaskId::new(3)).await, Some(Column::ToDo));
    app.resync().expect("resync reads the store");
    assert_eq!(column_of(&app, TaskId::new(3)).await, Some(Column::InProgress));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn directory_states_on_one_folder_follow_each_other() {
    let storage_dir = tempfile::tempdir().expect("temporary directory");
    let path =
        Utf8PathBuf::from_path_buf(storage_dir.path().to_path_buf()).expect("utf-8 temp path");
    let config = AppConfig {
        storage_dir: Some(path),
        ..AppConfig::default()
    };
    let watched = AppState::open(&config)
        .expect("directory opens")
        .expect("directory configured");
    let other = AppState::open(&config)
        .expect("directory opens")
        .expect("directory configured");
    let _watch = watched.watch_storage();

    other
        .boards()
        .move_task_to(ProjectId::new(1), TaskId::new(2), "Done")
        .await
        .expect("move applies");

    assert!(wait_for_column(&watched, TaskId::new(2), Column::Done).await);
}
