//! Board tasks and their validated field set.

use super::{MemberId, ProjectDomainError, TaskId, TaskPriority};
use serde::{Deserialize, Serialize};

/// Validated task fields shared by the create and edit forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskDetailsRecord")]
pub struct TaskDetails {
    title: String,
    description: String,
    priority: TaskPriority,
    assignees: Vec<MemberId>,
    remaining_days: u32,
}

#[derive(Deserialize)]
struct TaskDetailsRecord {
    title: String,
    description: String,
    priority: TaskPriority,
    #[serde(default)]
    assignees: Vec<MemberId>,
    remaining_days: u32,
}

impl TryFrom<TaskDetailsRecord> for TaskDetails {
    type Error = ProjectDomainError;

    fn try_from(record: TaskDetailsRecord) -> Result<Self, Self::Error> {
        Ok(Self::new(
            record.title,
            record.description,
            record.priority,
            record.remaining_days,
        )?
        .with_assignees(record.assignees))
    }
}

impl TaskDetails {
    /// Creates validated task details with no assignees.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyTaskTitle`] or
    /// [`ProjectDomainError::EmptyTaskDescription`] for blank text and
    /// [`ProjectDomainError::InvalidRemainingDays`] when `remaining_days` is
    /// zero.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: TaskPriority,
        remaining_days: u32,
    ) -> Result<Self, ProjectDomainError> {
        let raw_title = title.into();
        let raw_description = description.into();
        if raw_title.trim().is_empty() {
            return Err(ProjectDomainError::EmptyTaskTitle);
        }
        if raw_description.trim().is_empty() {
            return Err(ProjectDomainError::EmptyTaskDescription);
        }
        if remaining_days == 0 {
            return Err(ProjectDomainError::InvalidRemainingDays(remaining_days));
        }
        Ok(Self {
            title: raw_title.trim().to_owned(),
            description: raw_description.trim().to_owned(),
            priority,
            assignees: Vec::new(),
            remaining_days,
        })
    }

    /// Sets the assigned members. Repeated identifiers are kept once.
    #[must_use]
    pub fn with_assignees(mut self, assignees: impl IntoIterator<Item = MemberId>) -> Self {
        self.assignees.clear();
        for member_id in assignees {
            if !self.assignees.contains(&member_id) {
                self.assignees.push(member_id);
            }
        }
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the assigned member identifiers.
    #[must_use]
    pub fn assignees(&self) -> &[MemberId] {
        &self.assignees
    }
}

/// Unit of work living in exactly one board column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    #[serde(flatten)]
    details: TaskDetails,
}

impl Task {
    /// Creates a task from an identifier and validated details.
    #[must_use]
    pub const fn new(id: TaskId, details: TaskDetails) -> Self {
        Self { id, details }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the validated field set.
    #[must_use]
    pub const fn details(&self) -> &TaskDetails {
        &self.details
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.details.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.details.description
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.details.priority
    }

    /// Returns the assigned member identifiers.
    #[must_use]
    pub fn assignees(&self) -> &[MemberId] {
        &self.details.assignees
    }

    /// Returns whether `member_id` is assigned to the task.
    #[must_use]
    pub fn is_assigned_to(&self, member_id: MemberId) -> bool {
        self.details.assignees.contains(&member_id)
    }

    /// Returns the estimated number of days left.
    #[must_use]
    pub const fn remaining_days(&self) -> u32 {
        self.details.remaining_days
    }
}
