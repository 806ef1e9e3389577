//! Key-value storage for mirrored application state.
//!
//! The store is an opaque string-per-key boundary: each named key holds one
//! JSON document with no schema versioning. The module follows the same
//! hexagonal split as the rest of the crate:
//!
//! - Key and error types in [`key`] and [`error`]
//! - The store contract in [`ports`]
//! - In-memory and directory-backed stores in [`adapters`]
//! - [`StoredCollection`], an in-memory value mirrored into one key
//! - Backup export, import and reset in [`backup`]

pub mod adapters;
pub mod backup;
mod collection;
pub mod error;
pub mod key;
pub mod ports;

pub use collection::{StoredCollection, load_or_default};
pub use error::{StorageError, StorageResult};
pub use key::StorageKey;
pub use ports::{ChangeKind, KeyValueStore, StorageChange};
