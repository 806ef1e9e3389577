//! Error types for key-value storage.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors returned by stores, stored collections and backups.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key name is not acceptable.
    #[error("invalid storage key '{0}', expected [a-z0-9_-] with at most 64 characters")]
    InvalidKey(String),

    /// Reading or writing the backing medium failed.
    #[error("storage I/O error for key '{key}': {source}")]
    Io {
        /// Key being accessed.
        key: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// A value could not be encoded as JSON.
    #[error("failed to encode value for key '{key}': {source}")]
    Encode {
        /// Key being written.
        key: String,
        /// Underlying serialisation failure.
        source: serde_json::Error,
    },

    /// A backup document could not be decoded.
    #[error("failed to decode backup: {0}")]
    InvalidBackup(serde_json::Error),

    /// A backup's checksum does not match its contents.
    #[error("backup checksum mismatch: expected {expected}, computed {actual}")]
    ChecksumMismatch {
        /// Checksum recorded in the backup.
        expected: String,
        /// Checksum computed from the backup contents.
        actual: String,
    },

    /// An in-memory lock was poisoned by a panicking writer.
    #[error("storage lock poisoned: {0}")]
    LockPoisoned(String),
}

impl StorageError {
    /// Wraps an I/O failure for `key`.
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            key: key.into(),
            source,
        }
    }

    /// Wraps a poisoned-lock error.
    pub fn poisoned(err: &impl std::fmt::Display) -> Self {
        Self::LockPoisoned(err.to_string())
    }
}
