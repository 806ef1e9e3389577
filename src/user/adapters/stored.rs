//! User repository mirrored into a key-value store.

use async_trait::async_trait;
use std::sync::Arc;

use crate::storage::{KeyValueStore, StorageError, StorageKey, StoredCollection};
use crate::user::{
    domain::{User, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

impl From<StorageError> for UserRepositoryError {
    fn from(err: StorageError) -> Self {
        Self::persistence(err)
    }
}

/// User repository written to the [`StorageKey::USERS`] key after every
/// mutation.
#[derive(Debug)]
pub struct StoredUserRepository<S> {
    collection: Arc<StoredCollection<Vec<User>, S>>,
}

impl<S: KeyValueStore> StoredUserRepository<S> {
    /// Loads the user directory from `store`, falling back to `defaults`.
    pub fn load(store: Arc<S>, defaults: impl FnOnce() -> Vec<User>) -> Self {
        Self {
            collection: Arc::new(StoredCollection::load(store, StorageKey::USERS, defaults)),
        }
    }

    /// Returns the underlying stored collection.
    #[must_use]
    pub const fn collection(&self) -> &Arc<StoredCollection<Vec<User>, S>> {
        &self.collection
    }
}

#[async_trait]
impl<S: KeyValueStore> UserRepository for StoredUserRepository<S> {
    async fn store(&self, user: &User) -> UserRepositoryResult<()> {
        self.collection.update(|users| super::insert(users, user))
    }

    async fn update(&self, user: &User) -> UserRepositoryResult<()> {
        self.collection.update(|users| super::replace(users, user))
    }

    async fn delete(&self, id: UserId) -> UserRepositoryResult<User> {
        self.collection.update(|users| super::take(users, id))
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        Ok(self
            .collection
            .read(|users| users.iter().find(|user| user.id() == id).cloned())?)
    }

    async fn list(&self) -> UserRepositoryResult<Vec<User>> {
        Ok(self.collection.snapshot()?)
    }
}
