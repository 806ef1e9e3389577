//! Projects, their teams and their three-column task boards.
//!
//! This module owns the board state model: projects with validated
//! metadata, embedded team members, and tasks that live in exactly one of
//! the To-Do, In-Progress and Done columns. Moving a task between columns is
//! a single find-and-move by identifier, checked against the board as it is
//! at drop time. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
