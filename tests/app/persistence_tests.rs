//! Reloading, corrupt data fallback and backups.

use std::sync::Arc;

use super::helpers::{
    MemoryApp, SEEDED_PROJECTS, app, initial_tasks, project_ids, reopen, team_project,
};
use mockable::DefaultClock;
use rstest::rstest;
use taskboard::app::AppState;
use taskboard::config::AppConfig;
use taskboard::project::domain::ProjectId;
use taskboard::storage::adapters::InMemoryKeyValueStore;
use taskboard::storage::backup::Backup;
use taskboard::storage::{KeyValueStore, StorageError, StorageKey};
use taskboard::user::domain::UserId;
use taskboard::user::services::UserQuery;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reloaded_state_matches_what_was_written(app: MemoryApp) {
    app.projects()
        .create(team_project("Persisted").with_tasks(initial_tasks(4)))
        .await
        .expect("project created");
    let written = app.projects().list().await.expect("projects list");

    let reloaded = reopen(&app);

    assert_eq!(reloaded.projects().list().await.expect("projects list"), written);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn first_start_mirrors_nothing_until_a_write(app: MemoryApp) {
    assert_eq!(project_ids(&app).await, SEEDED_PROJECTS.map(ProjectId::new));
    assert!(
        app.store()
            .get(&StorageKey::PROJECTS)
            .expect("store readable")
            .is_none()
    );
}

#[rstest]
#[case(StorageKey::PROJECTS, "{not json")]
#[case(StorageKey::USERS, "[{\"id\": \"one\"}]")]
#[tokio::test(flavor = "multi_thread")]
async fn corrupt_documents_fall_back_to_demonstration_data(
    #[case] key: StorageKey,
    #[case] raw: &str,
) {
    let store = Arc::new(InMemoryKeyValueStore::new());
    store.set(&key, raw).expect("store accepts raw value");

    let app = AppState::new(store, Arc::new(DefaultClock), &AppConfig::default());

    assert_eq!(project_ids(&app).await, SEEDED_PROJECTS.map(ProjectId::new));
    let stats = app.users().stats().await.expect("stats load");
    assert_eq!(stats.total, 8);
    assert_eq!(stats.active, 7);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn backup_survives_clear_and_import(app: MemoryApp) {
    app.projects()
        .create(team_project("Backed up"))
        .await
        .expect("project created");
    app.users()
        .toggle_status(UserId::new(8))
        .await
        .expect("status toggled");
    let exported = app.export_backup().expect("backup exported");
    let document = exported.to_json().expect("backup encodes");

    app.clear_storage().expect("storage cleared");
    assert!(
        app.store()
            .get(&StorageKey::PROJECTS)
            .expect("store readable")
            .is_none()
    );

    let restored = Backup::from_json(&document).expect("backup decodes");
    app.import_backup(&restored).expect("backup imports");

    let reexported = app.export_backup().expect("backup exported");
    assert_eq!(reexported.projects(), exported.projects());
    assert_eq!(reexported.users(), exported.users());
    assert_eq!(reexported.checksum(), exported.checksum());
    let page = app
        .users()
        .search(UserQuery::new("pedro"))
        .await
        .expect("search runs");
    assert_eq!(page.total_matches, 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tampered_backup_is_rejected_without_writing(app: MemoryApp) {
    app.projects()
        .create(team_project("Original"))
        .await
        .expect("project created");
    let stored_before = app
        .store()
        .get(&StorageKey::PROJECTS)
        .expect("store readable");
    let document = app
        .export_backup()
        .expect("backup exported")
        .to_json()
        .expect("backup encodes");

    let mut value: serde_json::Value = serde_json::from_str(&document).expect("valid json");
    let projects = value.get_mut("projects").expect("projects field");
    *projects = serde_json::Value::String("[]".to_owned());
    let tampered = Backup::from_json(&value.to_string()).expect("backup decodes");

    let err = app.import_backup(&tampered).expect_err("tampering detected");

    assert!(matches!(err, StorageError::ChecksumMismatch { .. }));
    assert_eq!(
        app.store()
            .get(&StorageKey::PROJECTS)
            .expect("store readable"),
        stored_before
    );
    assert_eq!(project_ids(&app).await.len(), SEEDED_PROJECTS.len() + 1);
}
