//! Port contracts for key-value storage.

pub mod store;

pub use store::{ChangeKind, KeyValueStore, StorageChange};
