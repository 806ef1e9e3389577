//! Application state persisted under a real directory.

use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use taskboard::app::AppState;
use taskboard::config::AppConfig;
use taskboard::project::domain::{Column, ProjectId};
use taskboard::project::services::{CreateTaskRequest, TaskRequest};
use taskboard::user::domain::UserId;
use tempfile::TempDir;

#[fixture]
fn storage_dir() -> TempDir {
    tempfile::tempdir().expect("temporary directory")
}

fn config_for(dir: &TempDir) -> AppConfig {
    let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp path");
    AppConfig {
        storage_dir: Some(path),
        ..AppConfig::default()
    }
}

#[rstest]
fn no_directory_means_no_persistent_state() {
    let opened = AppState::open(&AppConfig::default()).expect("nothing to open");

    assert!(opened.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_changes_survive_a_restart(storage_dir: TempDir) {
    let config = config_for(&storage_dir);
    let first = AppState::open(&config)
        .expect("directory opens")
        .expect("directory configured");
    let task = first
        .boards()
        .create_task(
            CreateTaskRequest::new(
                ProjectId::new(3),
                TaskRequest::new("Scan barcodes", "Camera-based stock intake", "Baja", 4),
            )
            .in_column("Done"),
        )
        .await
        .expect("task created");
    drop(first);

    assert!(storage_dir.path().join("projects.json").is_file());

    let second = AppState::open(&config)
        .expect("directory opens")
        .expect("directory configured");
    let board = second
        .boards()
        .board(ProjectId::new(3))
        .await
        .expect("board loads");
    assert_eq!(board.locate(task.id()), Some(Column::Done));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn restored_backup_is_written_to_disk(storage_dir: TempDir) {
    let config = config_for(&storage_dir);
    let app = AppState::open(&config)
        .expect("directory opens")
        .expect("directory configured");
    app.users()
        .toggle_status(UserId::new(1))
        .await
        .expect("status toggled");
    let backup = app.export_backup().expect("backup exported");

    app.clear_storage().expect("storage cleared");
    assert!(!storage_dir.path().join("users.json").exists());

    app.import_backup(&backup).expect("backup imports");
    let on_disk = std::fs::read_to_string(storage_dir.path().join("users.json"))
        .expect("users document written");
    assert_eq!(Some(on_disk.as_str()), backup.users());
}
