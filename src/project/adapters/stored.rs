//! Project repository mirrored into a key-value store.

use async_trait::async_trait;
use std::sync::Arc;

use crate::project::{
    domain::{Project, ProjectId},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};
use crate::storage::{KeyValueStore, StorageError, StorageKey, StoredCollection};

impl From<StorageError> for ProjectRepositoryError {
    fn from(err: StorageError) -> Self {
        Self::persistence(err)
    }
}

/// Project repository whose whole collection is written to the
/// [`StorageKey::PROJECTS`] key after every mutation.
#[derive(Debug)]
pub struct StoredProjectRepository<S> {
    collection: Arc<StoredCollection<Vec<Project>, S>>,
}

impl<S: KeyValueStore> StoredProjectRepository<S> {
    /// Loads the project collection from `store`.
    ///
    /// A missing or undecodable stored value is replaced by `defaults`.
    pub fn load(store: Arc<S>, defaults: impl FnOnce() -> Vec<Project>) -> Self {
        Self {
            collection: Arc::new(StoredCollection::load(
                store,
                StorageKey::PROJECTS,
                defaults,
            )),
        }
    }

    /// Returns the underlying stored collection.
    #[must_use]
    pub const fn collection(&self) -> &Arc<StoredCollection<Vec<Project>, S>> {
        &self.collection
    }
}

#[async_trait]
impl<S: KeyValueStore> ProjectRepository for StoredProjectRepository<S> {
    async fn store(&self, project: &Project) -> ProjectRepositoryResult<()> {
        self.collection
            .update(|projects| super::insert(projects, project))
    }

    async fn update(&self, project: &Project) -> ProjectRepositoryResult<()> {
        self.collection
            .update(|projects| super::replace(projects, project))
    }

    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<Project> {
        self.collection.update(|projects| super::take(projects, id))
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        Ok(self.collection.read(|projects| super::find(projects, id))?)
    }

    async fn list(&self) -> ProjectRepositoryResult<Vec<Project>> {
        Ok(self.collection.snapshot()?)
    }
}
