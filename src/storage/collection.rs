//! In-memory values mirrored into a single store key.

use serde::{Serialize, de::DeserializeOwned};
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use super::{KeyValueStore, StorageError, StorageKey, StorageResult};

/// Reads and decodes `key`, falling back to `defaults` when the key is
/// missing, unreadable or holds a value that does not decode.
///
/// Failures are logged and never propagated: a corrupt stored value is
/// replaced by the built-in dataset rather than blocking start-up.
pub fn load_or_default<T, S>(store: &S, key: &StorageKey, defaults: impl FnOnce() -> T) -> T
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "stored value does not decode, using defaults");
                defaults()
            }
        },
        Ok(None) => defaults(),
        Err(err) => {
            tracing::warn!(key = %key, error = %err, "stored value is unreadable, using defaults");
            defaults()
        }
    }
}

/// A value held in memory and written through to one store key on every
/// mutation.
#[derive(Debug)]
pub struct StoredCollection<T, S> {
    key: StorageKey,
    store: Arc<S>,
    value: RwLock<T>,
}

impl<T, S> StoredCollection<T, S>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync,
    S: KeyValueStore,
{
    /// Loads the collection from `store`, using `defaults` when nothing
    /// usable is stored. Defaults are not written back until the first
    /// mutation.
    pub fn load(store: Arc<S>, key: StorageKey, defaults: impl FnOnce() -> T) -> Self {
        let value = load_or_default(&*store, &key, defaults);
        Self {
            key,
            store,
            value: RwLock::new(value),
        }
    }

    /// Returns the key this collection mirrors into.
    #[must_use]
    pub const fn key(&self) -> &StorageKey {
        &self.key
    }

    /// Runs `inspect` against the current value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::LockPoisoned`] when a writer panicked.
    pub fn read<R>(&self, inspect: impl FnOnce(&T) -> R) -> StorageResult<R> {
        let value = self.value.read().map_err(|err| StorageError::poisoned(&err))?;
        Ok(inspect(&value))
    }

    /// Returns a copy of the current value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::LockPoisoned`] when a writer panicked.
    pub fn snapshot(&self) -> StorageResult<T> {
        self.read(T::clone)
    }

    /// Applies `mutate` to a copy of the value, writes the result to the
    /// store, then publishes it in memory.
    ///
    /// When `mutate` fails or the store rejects the write, neither the store
    /// nor the in-memory value changes.
    ///
    /// # Errors
    ///
    /// Returns the error from `mutate`, or the storage error converted into
    /// `E`.
    pub fn update<R, E>(&self, mutate: impl FnOnce(&mut T) -> Result<R, E>) -> Result<R, E>
    where
        E: From<StorageError>,
    {
        let mut current = self
            .value
            .write()
            .map_err(|err| StorageError::poisoned(&err))?;
        let mut next = current.clone();
        let output = mutate(&mut next)?;
        let encoded = serde_json::to_string(&next).map_err(|source| StorageError::Encode {
            key: self.key.to_string(),
            source,
        })?;
        self.store.set(&self.key, &encoded)?;
        *current = next;
        Ok(output)
    }

    /// Reloads the value from the store.
    ///
    /// Returns `true` when a stored value replaced the in-memory one. A
    /// missing or undecodable stored value leaves memory untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the store cannot be read or the lock
    /// is poisoned.
    pub fn resync(&self) -> StorageResult<bool> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(false);
        };
        match serde_json::from_str::<T>(&raw) {
            Ok(decoded) => {
                *self
                    .value
                    .write()
                    .map_err(|err| StorageError::poisoned(&err))? = decoded;
                Ok(true)
            }
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "ignoring undecodable value during resync");
                Ok(false)
            }
        }
    }
}

impl<T, S> StoredCollection<T, S>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
    S: KeyValueStore + 'static,
{
    /// Spawns a task that resyncs the collection whenever its key changes
    /// in the store, including changes made through other handles sharing
    /// the store.
    ///
    /// The task runs until aborted through the returned handle. Must be
    /// called from within a Tokio runtime.
    pub fn watch(self: &Arc<Self>) -> JoinHandle<()> {
        let collection = Arc::clone(self);
        let mut changes = collection.store.subscribe();
        tokio::spawn(async move {
            loop {
                let should_resync = match changes.recv().await {
                    Ok(change) => change.key() == collection.key(),
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::debug!(key = %collection.key, skipped, "storage change feed lagged");
                        true
                    }
                    Err(RecvError::Closed) => break,
                };
                if should_resync && let Err(err) = collection.resync() {
                    tracing::warn!(key = %collection.key, error = %err, "resync failed");
                }
            }
        })
    }
}
