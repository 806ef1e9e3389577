//! User administration directory.
//!
//! Users are the people that can be picked as project members. The
//! directory supports adding, editing, activating or deactivating and
//! removing users, plus a paginated search over name and email. The module
//! follows hexagonal architecture:
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
