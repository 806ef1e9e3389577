//! Error types for project and board validation and parsing.

use super::{Column, MemberId, TaskId};
use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing or mutating project domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The project end date precedes its start date.
    #[error("project end date {end} precedes start date {start}")]
    InvalidDateRange {
        /// Requested start date.
        start: NaiveDate,
        /// Requested end date.
        end: NaiveDate,
    },

    /// The progress percentage lies outside `0..=100`.
    #[error("progress {0} is outside 0..=100")]
    ProgressOutOfRange(u8),

    /// The document link is not an absolute HTTP(S) URL.
    #[error("invalid document link '{0}', expected an http or https URL")]
    InvalidDocumentLink(String),

    /// A member name is empty after trimming.
    #[error("member name must not be empty")]
    EmptyMemberName,

    /// A member avatar URI is empty after trimming.
    #[error("member avatar must not be empty")]
    EmptyMemberAvatar,

    /// Two members of the same project share an identifier.
    #[error("member {0} appears more than once in the project team")]
    DuplicateMember(MemberId),

    /// A task assignee is not a member of the project.
    #[error("assignee {0} is not a member of the project")]
    UnknownAssignee(MemberId),

    /// A member cannot be removed while a task is still assigned to them.
    #[error("member {member_id} is still assigned to task {task_id}")]
    MemberStillAssigned {
        /// Member that was about to be removed.
        member_id: MemberId,
        /// First task found assigned to that member.
        task_id: TaskId,
    },

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyTaskDescription,

    /// The remaining-days estimate is zero.
    #[error("remaining days must be at least 1, got {0}")]
    InvalidRemainingDays(u32),

    /// A task with the same identifier already sits on the board.
    #[error("task {0} already exists on the board")]
    DuplicateTask(TaskId),

    /// No column on the board holds the task.
    #[error("task {0} is not on the board")]
    TaskNotFound(TaskId),

    /// The task left the column it was dragged from before it was dropped.
    #[error("task {task_id} was expected in {expected} but is in {actual}")]
    StaleMoveSource {
        /// Task being moved.
        task_id: TaskId,
        /// Column captured when the drag started.
        expected: Column,
        /// Column currently holding the task.
        actual: Column,
    },
}

/// Error returned while parsing a board column.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown board column: {0}")]
pub struct ParseColumnError(pub String);

/// Error returned while parsing a task priority.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

/// Error returned while parsing a project status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project status: {0}")]
pub struct ParseProjectStatusError(pub String);
