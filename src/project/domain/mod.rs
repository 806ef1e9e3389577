//! Domain model for projects and their task boards.
//!
//! The project domain models team membership, task fields and the
//! three-column board, including the validated move-task transition. All
//! infrastructure concerns stay outside the domain boundary.

mod board;
mod column;
mod details;
mod error;
mod ids;
mod member;
mod project;
mod task;

pub use board::{Board, MoveOutcome};
pub use column::{Column, TaskPriority};
pub use details::{DocumentLink, Progress, ProjectDetails, ProjectStatus};
pub use error::{
    ParseColumnError, ParseProjectStatusError, ParseTaskPriorityError, ProjectDomainError,
};
pub use ids::{IdGenerator, MemberId, ProjectId, TaskId};
pub use member::Member;
pub use project::Project;
pub use task::{Task, TaskDetails};
