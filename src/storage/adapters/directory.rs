//! Directory-backed store keeping one JSON file per key.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::sync::{LazyLock, Mutex};
use tokio::sync::broadcast;

use super::{change_channel, publish};
use crate::storage::{
    ChangeKind, KeyValueStore, StorageChange, StorageError, StorageKey, StorageResult,
};

type ChannelRegistry = Mutex<HashMap<Utf8PathBuf, broadcast::Sender<StorageChange>>>;

/// Change channels keyed by canonical store directory.
static DIRECTORY_CHANNELS: LazyLock<ChannelRegistry> = LazyLock::new(ChannelRegistry::default);

/// Key-value store rooted in a capability-scoped directory.
///
/// Each key is stored as `<key>.json`. Writes go to a temporary sibling file
/// that is then renamed over the target, so readers never observe a
/// half-written value.
///
/// Stores opened on the same directory within one process share a change
/// channel, so a write through one handle reaches subscribers of every
/// other handle. Writes from other processes are not observed.
#[derive(Debug)]
pub struct DirectoryKeyValueStore {
    dir: Dir,
    changes: broadcast::Sender<StorageChange>,
}

impl DirectoryKeyValueStore {
    /// Opens the store at `path`, creating the directory when missing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the directory cannot be created,
    /// resolved or opened.
    pub fn open(path: &Utf8Path) -> StorageResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())
            .map_err(|err| StorageError::io(path.as_str(), err))?;
        let root = path
            .canonicalize_utf8()
            .map_err(|err| StorageError::io(path.as_str(), err))?;
        let dir = Dir::open_ambient_dir(&root, ambient_authority())
            .map_err(|err| StorageError::io(root.as_str(), err))?;
        tracing::debug!(path = %root, "opened directory store");
        let changes = shared_channel(root)?;
        Ok(Self { dir, changes })
    }
}

fn shared_channel(root: Utf8PathBuf) -> StorageResult<broadcast::Sender<StorageChange>> {
    let mut channels = DIRECTORY_CHANNELS
        .lock()
        .map_err(|err| StorageError::poisoned(&err))?;
    Ok(channels.entry(root).or_insert_with(change_channel).clone())
}

fn file_name(key: &StorageKey) -> String {
    format!("{key}.json")
}

impl KeyValueStore for DirectoryKeyValueStore {
    fn get(&self, key: &StorageKey) -> StorageResult<Option<String>> {
        match self.dir.read_to_string(file_name(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::io(key.as_str(), err)),
        }
    }

    fn set(&self, key: &StorageKey, value: &str) -> StorageResult<()> {
        let target = file_name(key);
        let staging = format!("{target}.tmp");
        self.dir
            .write(&staging, value)
            .map_err(|err| StorageError::io(key.as_str(), err))?;
        self.dir
            .rename(&staging, &self.dir, &target)
            .map_err(|err| StorageError::io(key.as_str(), err))?;
        publish(&self.changes, key, ChangeKind::Set);
        Ok(())
    }

    fn remove(&self, key: &StorageKey) -> StorageResult<()> {
        match self.dir.remove_file(file_name(key)) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => return Err(StorageError::io(key.as_str(), err)),
        }
        publish(&self.changes, key, ChangeKind::Removed);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StorageChange> {
        self.changes.subscribe()
    }
}
