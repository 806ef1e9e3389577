//! End-to-end tests driving the wired application state.
//!
//! Tests are organized into modules by functionality:
//! - `board_flow_tests`: Task creation, drags and project deletion
//! - `persistence_tests`: Reloading, corrupt data fallback and backups
//! - `directory_store_tests`: State persisted under a real directory
//! - `watch_tests`: Re-syncing from changes made by another handle

mod app {
    pub mod helpers;

    mod board_flow_tests;
    mod directory_store_tests;
    mod persistence_tests;
    mod watch_tests;
}
