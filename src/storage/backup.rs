//! Export, import and reset of the stored application state.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::{KeyValueStore, StorageError, StorageKey, StorageResult};

/// Keys captured by a backup, in checksum order.
pub const BACKED_UP_KEYS: [StorageKey; 3] =
    [StorageKey::PROJECTS, StorageKey::USERS, StorageKey::SETTINGS];

/// Snapshot of the raw stored documents.
///
/// Each value is the string held by the store at export time, or `None`
/// when the key was absent. The checksum covers all three values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backup {
    projects: Option<String>,
    users: Option<String>,
    settings: Option<String>,
    exported_at: DateTime<Utc>,
    checksum: String,
}

impl Backup {
    /// Returns the raw project collection.
    #[must_use]
    pub fn projects(&self) -> Option<&str> {
        self.projects.as_deref()
    }

    /// Returns the raw user directory.
    #[must_use]
    pub fn users(&self) -> Option<&str> {
        self.users.as_deref()
    }

    /// Returns the raw settings document.
    #[must_use]
    pub fn settings(&self) -> Option<&str> {
        self.settings.as_deref()
    }

    /// Returns when the backup was taken.
    #[must_use]
    pub const fn exported_at(&self) -> DateTime<Utc> {
        self.exported_at
    }

    /// Returns the recorded checksum.
    #[must_use]
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Checks the recorded checksum against the contents.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ChecksumMismatch`] when the contents were
    /// altered after export.
    pub fn verify(&self) -> StorageResult<()> {
        let actual = checksum(self.values());
        if actual != self.checksum {
            return Err(StorageError::ChecksumMismatch {
                expected: self.checksum.clone(),
                actual,
            });
        }
        Ok(())
    }

    /// Encodes the backup as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Encode`] when serialisation fails.
    pub fn to_json(&self) -> StorageResult<String> {
        serde_json::to_string_pretty(self).map_err(|source| StorageError::Encode {
            key: "backup".to_owned(),
            source,
        })
    }

    /// Decodes a backup document. The checksum is not verified here.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidBackup`] when the document does not
    /// decode.
    pub fn from_json(raw: &str) -> StorageResult<Self> {
        serde_json::from_str(raw).map_err(StorageError::InvalidBackup)
    }

    fn values(&self) -> [Option<&str>; 3] {
        [self.projects(), self.users(), self.settings()]
    }
}

/// Captures the current raw values of every backed-up key.
///
/// # Errors
///
/// Returns [`StorageError`] when the store cannot be read.
pub fn export_backup<S>(store: &S, clock: &impl Clock) -> StorageResult<Backup>
where
    S: KeyValueStore + ?Sized,
{
    let [projects, users, settings] = BACKED_UP_KEYS;
    let raw_projects = store.get(&projects)?;
    let raw_users = store.get(&users)?;
    let raw_settings = store.get(&settings)?;
    let digest = checksum([
        raw_projects.as_deref(),
        raw_users.as_deref(),
        raw_settings.as_deref(),
    ]);
    tracing::info!(checksum = %digest, "exported storage backup");
    Ok(Backup {
        projects: raw_projects,
        users: raw_users,
        settings: raw_settings,
        exported_at: clock.utc(),
        checksum: digest,
    })
}

/// Verifies `backup` and writes every value it holds back into the store.
///
/// Keys the backup recorded as absent are left as they are.
///
/// # Errors
///
/// Returns [`StorageError::ChecksumMismatch`] before touching the store when
/// the backup was altered, or a store error when a write fails.
pub fn import_backup<S>(store: &S, backup: &Backup) -> StorageResult<()>
where
    S: KeyValueStore + ?Sized,
{
    backup.verify()?;
    for (key, value) in BACKED_UP_KEYS.iter().zip(backup.values()) {
        if let Some(raw) = value {
            store.set(key, raw)?;
        }
    }
    tracing::info!(exported_at = %backup.exported_at, "imported storage backup");
    Ok(())
}

/// Removes every backed-up key from the store.
///
/// # Errors
///
/// Returns [`StorageError`] when a key cannot be removed.
pub fn clear_all<S>(store: &S) -> StorageResult<()>
where
    S: KeyValueStore + ?Sized,
{
    for key in &BACKED_UP_KEYS {
        store.remove(key)?;
    }
    tracing::info!("cleared stored application state");
    Ok(())
}

/// SHA-256 over the length-prefixed values, so that moving bytes between
/// adjacent values changes the digest.
fn checksum(values: [Option<&str>; 3]) -> String {
    let mut hasher = Sha256::new();
    for value in values {
        match value {
            Some(raw) => {
                hasher.update(format!("{}:", raw.len()));
                hasher.update(raw);
            }
            None => hasher.update("-;"),
        }
    }
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::adapters::InMemoryKeyValueStore;
    use mockable::DefaultClock;
    use rstest::rstest;

    fn seeded_store() -> InMemoryKeyValueStore {
        let store = InMemoryKeyValueStore::new();
        store
            .set(&StorageKey::PROJECTS, r#"[{"id":1}]"#)
            .expect("projects should be stored");
        store
            .set(&StorageKey::USERS, "[]")
            .expect("users should be stored");
        store
    }

    #[rstest]
    fn checksum_distinguishes_shifted_content() {
        let joined = checksum([Some("ab"), Some("c"), None]);
        let shifted = checksum([Some("a"), Some("bc"), None]);
        assert_ne!(joined, shifted);
    }

    #[rstest]
    fn checksum_distinguishes_missing_from_empty() {
        assert_ne!(checksum([None, None, None]), checksum([Some(""), None, None]));
    }

    #[rstest]
    fn export_records_absent_keys_as_none() {
        let store = seeded_store();
        let backup = export_backup(&store, &DefaultClock).expect("export should succeed");

        assert_eq!(backup.projects(), Some(r#"[{"id":1}]"#));
        assert_eq!(backup.users(), Some("[]"));
        assert_eq!(backup.settings(), None);
        assert!(backup.verify().is_ok());
    }

    #[rstest]
    fn tampered_backup_fails_verification() {
        let store = seeded_store();
        let backup = export_backup(&store, &DefaultClock).expect("export should succeed");
        let tampered = backup
            .to_json()
            .expect("backup should encode")
            .replace(r#"[{\"id\":1}]"#, r#"[{\"id\":2}]"#);
        let decoded = Backup::from_json(&tampered).expect("backup should decode");

        assert!(matches!(
            decoded.verify(),
            Err(StorageError::ChecksumMismatch { .. })
        ));
    }

    #[rstest]
    fn tampered_backup_is_not_imported() {
        let store = seeded_store();
        let mut backup = export_backup(&store, &DefaultClock).expect("export should succeed");
        backup.users = Some(r#"[{"id":9}]"#.to_owned());
        clear_all(&store).expect("clear should succeed");

        let result = import_backup(&store, &backup);

        assert!(matches!(result, Err(StorageError::ChecksumMismatch { .. })));
        assert_eq!(
            store.get(&StorageKey::USERS).expect("read should succeed"),
            None
        );
    }

    #[rstest]
    fn malformed_document_is_invalid_backup() {
        assert!(matches!(
            Backup::from_json("{not json"),
            Err(StorageError::InvalidBackup(_))
        ));
    }
}
