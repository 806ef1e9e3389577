//! Read-only summaries derived from board and project state.
//!
//! Nothing here mutates state. A project's stated progress and its
//! task-derived completion are reported side by side; neither overrides the
//! other.

mod board;
mod portfolio;

pub use board::{BoardSummary, MemberLoad, ProgressReport, Workload, completion_percent};
pub use portfolio::PortfolioSummary;
