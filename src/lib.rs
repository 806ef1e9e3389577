//! Taskboard: project portfolios with three-column task boards.
//!
//! The crate models a small project-management workspace: projects with a
//! team and a To-Do / In-Progress / Done board, a user directory, transient
//! notifications and a key-value store that mirrors the whole state as JSON.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: In-memory and store-backed implementations of ports
//! - **Services**: Async orchestration over ports
//!
//! # Modules
//!
//! - [`project`]: Projects, members and the task board
//! - [`user`]: User directory with search and paging
//! - [`storage`]: Key-value store, mirrored collections and backups
//! - [`notification`]: Transient success and error notices
//! - [`analytics`]: Board and portfolio summaries
//! - [`app`]: Wiring of stores and services into [`app::AppState`]

pub mod analytics;
pub mod app;
pub mod config;
pub mod confirmation;
pub mod notification;
pub mod project;
pub mod seed;
pub mod storage;
pub mod telemetry;
pub mod user;

#[cfg(test)]
mod test_support;
