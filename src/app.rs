//! Application state wiring stores, repositories and services together.

use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::analytics::PortfolioSummary;
use crate::config::AppConfig;
use crate::notification::NotificationCenter;
use crate::project::adapters::StoredProjectRepository;
use crate::project::domain::IdGenerator;
use crate::project::services::{BoardService, ProjectService, ProjectServiceResult};
use crate::seed::{self, SeedError};
use crate::storage::adapters::{DirectoryKeyValueStore, InMemoryKeyValueStore};
use crate::storage::backup::{self, Backup};
use crate::storage::{KeyValueStore, StorageResult};
use crate::user::adapters::StoredUserRepository;
use crate::user::services::UserDirectoryService;

/// Project service backed by the stored project collection.
pub type Projects<S, C> = ProjectService<StoredProjectRepository<S>, C>;
/// Board service backed by the stored project collection.
pub type Boards<S, C> = BoardService<StoredProjectRepository<S>, C, NotificationCenter<C>>;
/// User directory backed by the stored user collection.
pub type Users<S, C> = UserDirectoryService<StoredUserRepository<S>, C, NotificationCenter<C>>;

/// Every service of a running application sharing one store and clock.
pub struct AppState<S, C = DefaultClock>
where
    S: KeyValueStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    store: Arc<S>,
    clock: Arc<C>,
    notifications: Arc<NotificationCenter<C>>,
    project_repository: Arc<StoredProjectRepository<S>>,
    user_repository: Arc<StoredUserRepository<S>>,
    projects: Projects<S, C>,
    boards: Boards<S, C>,
    users: Users<S, C>,
}

impl AppState<InMemoryKeyValueStore> {
    /// Builds a state whose storage lives only as long as the process.
    #[must_use]
    pub fn in_memory(config: &AppConfig) -> Self {
        Self::new(
            Arc::new(InMemoryKeyValueStore::new()),
            Arc::new(DefaultClock),
            config,
        )
    }
}

impl AppState<DirectoryKeyValueStore> {
    /// Builds a state persisted under `config.storage_dir`.
    ///
    /// Returns `Ok(None)` when no storage directory is configured.
    ///
    /// # Errors
    ///
    /// Returns [`crate::storage::StorageError`] when the directory cannot be
    /// opened.
    pub fn open(config: &AppConfig) -> StorageResult<Option<Self>> {
        let Some(dir) = config.storage_dir.as_deref() else {
            return Ok(None);
        };
        let store = DirectoryKeyValueStore::open(dir)?;
        tracing::info!(storage_dir = %dir, "opened storage directory");
        Ok(Some(Self::new(Arc::new(store), Arc::new(DefaultClock), config)))
    }
}

impl<S, C> AppState<S, C>
where
    S: KeyValueStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Loads both collections from `store`, seeding the demonstration data
    /// when a key is missing or unreadable, and wires the services.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>, config: &AppConfig) -> Self {
        let project_repository = Arc::new(StoredProjectRepository::load(Arc::clone(&store), || {
            or_empty(seed::default_projects(clock.as_ref()))
        }));
        let user_repository = Arc::new(StoredUserRepository::load(Arc::clone(&store), || {
            or_empty(seed::default_users())
        }));
        let notifications = Arc::new(
            NotificationCenter::new(Arc::clone(&clock)).with_duration(config.notification_duration),
        );
        let ids = Arc::new(IdGenerator::new());

        let projects = ProjectService::new(Arc::clone(&project_repository), Arc::clone(&clock))
            .with_id_generator(Arc::clone(&ids));
        let boards = BoardService::new(
            Arc::clone(&project_repository),
            Arc::clone(&clock),
            Arc::clone(&notifications),
        )
        .with_id_generator(ids);
        let users = UserDirectoryService::new(
            Arc::clone(&user_repository),
            Arc::clone(&clock),
            Arc::clone(&notifications),
        )
        .with_page_size(config.users_per_page);

        Self {
            store,
            clock,
            notifications,
            project_repository,
            user_repository,
            projects,
            boards,
            users,
        }
    }

    /// Returns the backing store.
    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Returns the project service.
    #[must_use]
    pub const fn projects(&self) -> &Projects<S, C> {
        &self.projects
    }

    /// Returns the task board service.
    #[must_use]
    pub const fn boards(&self) -> &Boards<S, C> {
        &self.boards
    }

    /// Returns the user directory service.
    #[must_use]
    pub const fn users(&self) -> &Users<S, C> {
        &self.users
    }

    /// Returns the notification centre fed by the services.
    #[must_use]
    pub const fn notifications(&self) -> &Arc<NotificationCenter<C>> {
        &self.notifications
    }

    /// Starts re-syncing both collections whenever their keys change in the
    /// store. Watching stops when the returned guard is dropped.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn watch_storage(&self) -> StorageWatch {
        StorageWatch {
            handles: vec![
                self.project_repository.collection().watch(),
                self.user_repository.collection().watch(),
            ],
        }
    }

    /// Re-reads both collections from the store.
    ///
    /// # Errors
    ///
    /// Returns [`crate::storage::StorageError`] when the store cannot be
    /// read.
    pub fn resync(&self) -> StorageResult<()> {
        let projects = self.project_repository.collection().resync()?;
        let users = self.user_repository.collection().resync()?;
        tracing::debug!(projects, users, "resynced collections");
        Ok(())
    }

    /// Captures the stored state as a verifiable backup.
    ///
    /// # Errors
    ///
    /// Returns [`crate::storage::StorageError`] when the store cannot be
    /// read.
    pub fn export_backup(&self) -> StorageResult<Backup> {
        backup::export_backup(self.store.as_ref(), self.clock.as_ref())
    }

    /// Restores a backup into the store and reloads both collections.
    ///
    /// # Errors
    ///
    /// Returns [`crate::storage::StorageError::ChecksumMismatch`] for an
    /// altered backup, leaving store and memory untouched, or a store error.
    pub fn import_backup(&self, snapshot: &Backup) -> StorageResult<()> {
        backup::import_backup(self.store.as_ref(), snapshot)?;
        self.resync()
    }

    /// Removes all stored state. The loaded collections stay in memory until
    /// the next write mirrors them back or the application restarts with the
    /// demonstration data.
    ///
    /// # Errors
    ///
    /// Returns [`crate::storage::StorageError`] when a key cannot be removed.
    pub fn clear_storage(&self) -> StorageResult<()> {
        backup::clear_all(self.store.as_ref())
    }

    /// Summarises every project.
    ///
    /// # Errors
    ///
    /// Returns the project service error when the collection cannot be read.
    pub async fn portfolio(&self) -> ProjectServiceResult<PortfolioSummary> {
        let projects = self.projects.list().await?;
        Ok(PortfolioSummary::of(&projects))
    }
}

/// Guard over the tasks started by [`AppState::watch_storage`].
#[derive(Debug)]
pub struct StorageWatch {
    handles: Vec<JoinHandle<()>>,
}

impl Drop for StorageWatch {
    fn drop(&mut self) {
        for handle in &self.handles {
            handle.abort();
        }
    }
}

fn or_empty<T>(seeded: Result<Vec<T>, SeedError>) -> Vec<T> {
    seeded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "demonstration data failed validation; starting empty");
        Vec::new()
    })
}
