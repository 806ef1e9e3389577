//! Validated storage key names.

use super::StorageError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Longest accepted key name.
const MAX_KEY_LENGTH: usize = 64;

/// Name of one stored document.
///
/// Keys are lowercase ASCII letters, digits, `_` and `-`, so they can double
/// as file names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageKey(Cow<'static, str>);

impl StorageKey {
    /// Key holding the project collection.
    pub const PROJECTS: Self = Self(Cow::Borrowed("projects"));
    /// Key holding the user directory.
    pub const USERS: Self = Self(Cow::Borrowed("users"));
    /// Key holding application settings.
    pub const SETTINGS: Self = Self(Cow::Borrowed("settings"));

    /// Creates a validated key.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidKey`] when the value is empty, longer
    /// than 64 characters, or contains characters outside `[a-z0-9_-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, StorageError> {
        let raw = value.into();
        let is_valid = !raw.is_empty()
            && raw.len() <= MAX_KEY_LENGTH
            && raw
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
        if !is_valid {
            return Err(StorageError::InvalidKey(raw));
        }
        Ok(Self(Cow::Owned(raw)))
    }

    /// Returns the key name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
