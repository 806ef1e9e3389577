//! In-memory store for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::RwLock;
use tokio::sync::broadcast;

use super::{change_channel, publish};
use crate::storage::{
    ChangeKind, KeyValueStore, StorageChange, StorageError, StorageKey, StorageResult,
};

/// Thread-safe in-memory key-value store.
#[derive(Debug)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<StorageKey, String>>,
    changes: broadcast::Sender<StorageChange>,
}

impl InMemoryKeyValueStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            changes: change_channel(),
        }
    }
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &StorageKey) -> StorageResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|err| StorageError::poisoned(&err))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &StorageKey, value: &str) -> StorageResult<()> {
        self.entries
            .write()
            .map_err(|err| StorageError::poisoned(&err))?
            .insert(key.clone(), value.to_owned());
        publish(&self.changes, key, ChangeKind::Set);
        Ok(())
    }

    fn remove(&self, key: &StorageKey) -> StorageResult<()> {
        self.entries
            .write()
            .map_err(|err| StorageError::poisoned(&err))?
            .remove(key);
        publish(&self.changes, key, ChangeKind::Removed);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StorageChange> {
        self.changes.subscribe()
    }
}
