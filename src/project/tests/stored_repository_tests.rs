//! Tests for the project repository mirrored into a key-value store.

use std::sync::Arc;

use crate::project::{
    adapters::StoredProjectRepository,
    domain::{
        Board, Column, Member, MemberId, Project, ProjectDetails, ProjectId, Task, TaskDetails,
        TaskId, TaskPriority,
    },
    ports::{ProjectRepository, ProjectRepositoryError},
};
use crate::storage::{
    KeyValueStore, StorageChange, StorageError, StorageKey, StorageResult,
    adapters::InMemoryKeyValueStore,
};
use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use tokio::sync::broadcast;

fn project(id: u64, name: &str) -> Project {
    let details = ProjectDetails::new(
        name,
        "",
        NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
        NaiveDate::from_ymd_opt(2024, 2, 1).expect("valid date"),
        "",
    )
    .expect("valid details");
    Project::new(
        ProjectId::new(id),
        details,
        Vec::new(),
        Board::new(),
        &DefaultClock,
    )
    .expect("valid project")
}

#[fixture]
fn store() -> Arc<InMemoryKeyValueStore> {
    Arc::new(InMemoryKeyValueStore::new())
}

/// Store whose writes always fail.
#[derive(Debug, Default)]
struct ReadOnlyStore {
    inner: InMemoryKeyValueStore,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &StorageKey) -> StorageResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &StorageKey, _value: &str) -> StorageResult<()> {
        Err(StorageError::io(
            key.as_str(),
            std::io::Error::other("quota exceeded"),
        ))
    }

    fn remove(&self, key: &StorageKey) -> StorageResult<()> {
        self.inner.remove(key)
    }

    fn subscribe(&self) -> broadcast::Receiver<StorageChange> {
        self.inner.subscribe()
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn defaults_are_used_when_nothing_is_stored(store: Arc<InMemoryKeyValueStore>) {
    let repository = StoredProjectRepository::load(store.clone(), || vec![project(1, "Seed")]);

    let listed = repository.list().await.expect("list should succeed");

    assert_eq!(listed.len(), 1);
    assert_eq!(listed.first().map(Project::id), Some(ProjectId::new(1)));
    assert_eq!(
        store.get(&StorageKey::PROJECTS).expect("read should succeed"),
        None
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mutations_are_mirrored_and_reload_identically(store: Arc<InMemoryKeyValueStore>) {
    let repository = StoredProjectRepository::load(store.clone(), Vec::new);
    repository
        .store(&project(1, "Alpha"))
        .await
        .expect("store should succeed");
    repository
        .store(&project(2, "Beta"))
        .await
        .expect("store should succeed");
    repository
        .delete(ProjectId::new(1))
        .await
        .expect("delete should succeed");

    let reloaded = StoredProjectRepository::load(store, || vec![project(9, "Fallback")]);

    assert_eq!(
        reloaded.list().await.expect("list should succeed"),
        repository.list().await.expect("list should succeed")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn corrupt_stored_value_falls_back_to_defaults(store: Arc<InMemoryKeyValueStore>) {
    store
        .set(&StorageKey::PROJECTS, "{ definitely not projects")
        .expect("write should succeed");

    let repository = StoredProjectRepository::load(store, || vec![project(1, "Seed")]);

    let names: Vec<String> = repository
        .list()
        .await
        .expect("list should succeed")
        .iter()
        .map(|stored| stored.name().to_owned())
        .collect();
    assert_eq!(names, vec!["Seed".to_owned()]);
}

fn staffed_project() -> Project {
    let member = |id: u64, name: &str| {
        Member::new(MemberId::new(id), name, "https://i.pravatar.cc/150", "Developer")
            .expect("valid member")
    };
    let mut board = Board::new();
    board
        .push(
            Column::Done,
            Task::new(
                TaskId::new(10),
                TaskDetails::new("Audit", "Check the logs", TaskPriority::High, 3)
                    .expect("valid task")
                    .with_assignees([MemberId::new(1)]),
            ),
        )
        .expect("push should succeed");
    Project::new(
        ProjectId::new(5),
        project(5, "Staffed").details().clone(),
        vec![member(1, "Ana"), member(2, "Luis")],
        board,
        &DefaultClock,
    )
    .expect("valid project")
}

#[rstest]
#[case::progress_above_hundred("/0/details/progress", serde_json::json!(250))]
#[case::blank_name("/0/details/name", serde_json::json!("   "))]
#[case::end_before_start("/0/details/end_date", serde_json::json!("2023-12-01"))]
#[case::bad_document_link("/0/details/document_link", serde_json::json!("ftp://files"))]
#[case::repeated_member("/0/members/1/id", serde_json::json!(1))]
#[case::blank_member_name("/0/members/0/name", serde_json::json!(""))]
#[case::zero_remaining_days("/0/board/done/0/remaining_days", serde_json::json!(0))]
#[case::blank_task_title("/0/board/done/0/title", serde_json::json!(" "))]
#[case::assignee_outside_team("/0/board/done/0/assignees/0", serde_json::json!(7))]
#[tokio::test(flavor = "multi_thread")]
async fn stored_project_breaking_invariants_falls_back_to_defaults(
    store: Arc<InMemoryKeyValueStore>,
    #[case] pointer: &str,
    #[case] value: serde_json::Value,
) {
    let mut stored = serde_json::to_value(vec![staffed_project()]).expect("projects should encode");
    *stored.pointer_mut(pointer).expect("pointer should resolve") = value;
    store
        .set(&StorageKey::PROJECTS, &stored.to_string())
        .expect("write should succeed");

    let repository = StoredProjectRepository::load(store, || vec![project(1, "Seed")]);

    let names: Vec<String> = repository
        .list()
        .await
        .expect("list should succeed")
        .iter()
        .map(|kept| kept.name().to_owned())
        .collect();
    assert_eq!(names, vec!["Seed".to_owned()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn valid_stored_project_is_loaded(store: Arc<InMemoryKeyValueStore>) {
    let staffed = staffed_project();
    store
        .set(
            &StorageKey::PROJECTS,
            &serde_json::to_string(&vec![staffed.clone()]).expect("projects should encode"),
        )
        .expect("write should succeed");

    let repository = StoredProjectRepository::load(store, || vec![project(1, "Seed")]);

    assert_eq!(
        repository.list().await.expect("list should succeed"),
        vec![staffed]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_write_leaves_memory_unchanged() {
    let repository =
        StoredProjectRepository::load(Arc::new(ReadOnlyStore::default()), Vec::new);

    let result = repository.store(&project(1, "Lost")).await;

    assert!(matches!(result, Err(ProjectRepositoryError::Persistence(_))));
    assert!(repository.list().await.expect("list should succeed").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_store_is_rejected(store: Arc<InMemoryKeyValueStore>) {
    let repository = StoredProjectRepository::load(store, Vec::new);
    repository
        .store(&project(1, "Alpha"))
        .await
        .expect("store should succeed");

    let result = repository.store(&project(1, "Alpha again")).await;

    assert!(matches!(
        result,
        Err(ProjectRepositoryError::DuplicateProject(id)) if id == ProjectId::new(1)
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn resync_picks_up_writes_from_another_handle(store: Arc<InMemoryKeyValueStore>) {
    let first = StoredProjectRepository::load(store.clone(), Vec::new);
    let second = StoredProjectRepository::load(store, Vec::new);
    first
        .store(&project(1, "Shared"))
        .await
        .expect("store should succeed");

    assert!(second.list().await.expect("list should succeed").is_empty());
    assert!(second.collection().resync().expect("resync should succeed"));
    assert_eq!(
        second.list().await.expect("list should succeed"),
        first.list().await.expect("list should succeed")
    );
}
