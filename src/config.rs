//! Runtime configuration read from environment variables.

use camino::Utf8PathBuf;
use chrono::TimeDelta;
use std::num::ParseIntError;
use thiserror::Error;

use crate::notification::DEFAULT_DURATION;
use crate::user::services::DEFAULT_PAGE_SIZE;

/// Variable naming the directory backing persistent storage.
pub const STORAGE_DIR_VAR: &str = "TASKBOARD_STORAGE_DIR";
/// Variable holding the notification lifetime in milliseconds.
pub const NOTIFICATION_MS_VAR: &str = "TASKBOARD_NOTIFICATION_MS";
/// Variable holding the user directory page size.
pub const USERS_PER_PAGE_VAR: &str = "TASKBOARD_USERS_PER_PAGE";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A numeric variable did not parse.
    #[error("{variable} must be a whole number, got {value:?}: {source}")]
    InvalidNumber {
        /// Variable name.
        variable: &'static str,
        /// Raw value.
        value: String,
        /// Parse failure.
        source: ParseIntError,
    },
    /// A numeric variable parsed but was zero.
    #[error("{variable} must be greater than zero")]
    Zero {
        /// Variable name.
        variable: &'static str,
    },
}

/// Application configuration.
///
/// Every field has a default suitable for local use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory for persistent storage. `None` keeps state in memory.
    pub storage_dir: Option<Utf8PathBuf>,
    /// How long a notification stays visible.
    pub notification_duration: TimeDelta,
    /// Users listed per directory page.
    pub users_per_page: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_dir: None,
            notification_duration: DEFAULT_DURATION,
            users_per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// Loads a `.env` file when one exists, then reads the process
    /// environment.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_lookup`].
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            tracing::warn!(error = %err, "ignoring unreadable .env file");
        }
        Self::from_env()
    }

    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// unset or blank variables.
    ///
    /// | Env Var                     | Default          |
    /// |-----------------------------|------------------|
    /// | `TASKBOARD_STORAGE_DIR`     | unset, in memory |
    /// | `TASKBOARD_NOTIFICATION_MS` | `4000`           |
    /// | `TASKBOARD_USERS_PER_PAGE`  | `8`              |
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidNumber`] when a numeric variable does
    /// not parse and [`ConfigError::Zero`] when it is zero.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let read = |variable: &str| lookup(variable).filter(|value| !value.trim().is_empty());

        let storage_dir = read(STORAGE_DIR_VAR).map(|dir| Utf8PathBuf::from(dir.trim()));
        let notification_duration = match read(NOTIFICATION_MS_VAR) {
            Some(raw) => {
                let millis = positive::<u32>(NOTIFICATION_MS_VAR, &raw)?;
                TimeDelta::milliseconds(i64::from(millis))
            }
            None => defaults.notification_duration,
        };
        let users_per_page = match read(USERS_PER_PAGE_VAR) {
            Some(raw) => positive::<usize>(USERS_PER_PAGE_VAR, &raw)?,
            None => defaults.users_per_page,
        };

        Ok(Self {
            storage_dir,
            notification_duration,
            users_per_page,
        })
    }
}

fn positive<T>(variable: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = ParseIntError> + PartialEq + Default,
{
    let value = raw
        .trim()
        .parse::<T>()
        .map_err(|source| ConfigError::InvalidNumber {
            variable,
            value: raw.to_owned(),
            source,
        })?;
    if value == T::default() {
        return Err(ConfigError::Zero { variable });
    }
    Ok(value)
}
