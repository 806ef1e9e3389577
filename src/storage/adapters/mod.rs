//! Store implementations.

pub mod directory;
pub mod memory;

pub use directory::DirectoryKeyValueStore;
pub use memory::InMemoryKeyValueStore;

use crate::storage::{ChangeKind, StorageChange, StorageKey};
use tokio::sync::broadcast;

/// Buffered change notifications per store before slow subscribers lag.
const CHANGE_CHANNEL_CAPACITY: usize = 64;

fn change_channel() -> broadcast::Sender<StorageChange> {
    broadcast::channel(CHANGE_CHANNEL_CAPACITY).0
}

fn publish(changes: &broadcast::Sender<StorageChange>, key: &StorageKey, kind: ChangeKind) {
    if changes
        .send(StorageChange::new(key.clone(), kind))
        .is_err()
    {
        tracing::trace!(key = %key, "no storage subscribers");
    }
}
