//! Store port and change notifications.

use crate::storage::{StorageKey, StorageResult};
use tokio::sync::broadcast;

/// Kind of change applied to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// The key was written.
    Set,
    /// The key was removed.
    Removed,
}

/// Notification published after a key changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageChange {
    key: StorageKey,
    kind: ChangeKind,
}

impl StorageChange {
    /// Creates a change notification.
    #[must_use]
    pub const fn new(key: StorageKey, kind: ChangeKind) -> Self {
        Self { key, kind }
    }

    /// Returns the changed key.
    #[must_use]
    pub const fn key(&self) -> &StorageKey {
        &self.key
    }

    /// Returns the kind of change.
    #[must_use]
    pub const fn kind(&self) -> ChangeKind {
        self.kind
    }
}

/// String-per-key store.
///
/// Writes are last-write-wins; there is no locking or conflict detection
/// between handles sharing the same backing medium. Every successful write
/// or removal is published to subscribers.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::storage::StorageError`] when the backing medium
    /// cannot be read.
    fn get(&self, key: &StorageKey) -> StorageResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::storage::StorageError`] when the backing medium
    /// cannot be written.
    fn set(&self, key: &StorageKey, value: &str) -> StorageResult<()>;

    /// Removes `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::storage::StorageError`] when the backing medium
    /// cannot be modified.
    fn remove(&self, key: &StorageKey) -> StorageResult<()>;

    /// Subscribes to change notifications.
    fn subscribe(&self) -> broadcast::Receiver<StorageChange>;
}
