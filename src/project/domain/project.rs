//! Project aggregate root.

use super::{
    Board, Column, Member, MemberId, MoveOutcome, ProjectDetails, ProjectDomainError, ProjectId,
    Task, TaskDetails, TaskId,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Project aggregate root owning its team and task board.
///
/// Decoding re-checks the team and assignee invariants, so a stored record
/// that breaks them is rejected as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProjectRecord")]
pub struct Project {
    id: ProjectId,
    details: ProjectDetails,
    members: Vec<Member>,
    board: Board,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct ProjectRecord {
    id: ProjectId,
    details: ProjectDetails,
    #[serde(default)]
    members: Vec<Member>,
    #[serde(default)]
    board: Board,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProjectRecord> for Project {
    type Error = ProjectDomainError;

    fn try_from(record: ProjectRecord) -> Result<Self, Self::Error> {
        ensure_team_invariants(&record.members, &record.board)?;
        Ok(Self {
            id: record.id,
            details: record.details,
            members: record.members,
            board: record.board,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

impl Project {
    /// Creates a project from validated parts.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::DuplicateMember`] when two members share
    /// an identifier or [`ProjectDomainError::UnknownAssignee`] when a board
    /// task is assigned to someone outside `members`.
    pub fn new(
        id: ProjectId,
        details: ProjectDetails,
        members: Vec<Member>,
        board: Board,
        clock: &impl Clock,
    ) -> Result<Self, ProjectDomainError> {
        ensure_team_invariants(&members, &board)?;

        let timestamp = clock.utc();
        Ok(Self {
            id,
            details,
            members,
            board,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the editable project metadata.
    #[must_use]
    pub const fn details(&self) -> &ProjectDetails {
        &self.details
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.details.name()
    }

    /// Returns the team list.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Returns the member with the given identifier.
    #[must_use]
    pub fn member(&self, member_id: MemberId) -> Option<&Member> {
        self.members.iter().find(|member| member.id() == member_id)
    }

    /// Resolves a task's assignees to team members, in assignment order.
    ///
    /// Every assignee of a task on this board is a member, so the result has
    /// one entry per assignee. A task from elsewhere resolves only the
    /// identifiers this team knows.
    #[must_use]
    pub fn assignees_of(&self, task: &Task) -> Vec<&Member> {
        task.assignees()
            .iter()
            .filter_map(|member_id| self.member(*member_id))
            .collect()
    }

    /// Returns the task board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the project metadata and team, leaving the board untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::DuplicateMember`] for repeated member
    /// identifiers or [`ProjectDomainError::MemberStillAssigned`] when a
    /// dropped member is still assigned to a task. The project is unchanged
    /// on error.
    pub fn update(
        &mut self,
        details: ProjectDetails,
        members: Vec<Member>,
        clock: &impl Clock,
    ) -> Result<(), ProjectDomainError> {
        ensure_unique_members(&members)?;
        for removed in self
            .members
            .iter()
            .filter(|current| !members.iter().any(|kept| kept.id() == current.id()))
        {
            if let Some(task) = self.board.first_assigned_to(removed.id()) {
                return Err(ProjectDomainError::MemberStillAssigned {
                    member_id: removed.id(),
                    task_id: task.id(),
                });
            }
        }

        self.details = details;
        self.members = members;
        self.touch(clock);
        Ok(())
    }

    /// Appends a new task to `column`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::UnknownAssignee`] when an assignee is not
    /// a member, or [`ProjectDomainError::DuplicateTask`] when the identifier
    /// is already on the board.
    pub fn add_task(
        &mut self,
        column: Column,
        task: Task,
        clock: &impl Clock,
    ) -> Result<(), ProjectDomainError> {
        ensure_assignees_are_members(&self.members, task.details())?;
        self.board.push(column, task)?;
        self.touch(clock);
        Ok(())
    }

    /// Replaces a task's fields in place and returns the edited task with
    /// the column holding it.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::UnknownAssignee`] when an assignee is not
    /// a member or [`ProjectDomainError::TaskNotFound`] when the task is not
    /// on the board.
    pub fn edit_task(
        &mut self,
        task_id: TaskId,
        details: TaskDetails,
        clock: &impl Clock,
    ) -> Result<(Column, Task), ProjectDomainError> {
        ensure_assignees_are_members(&self.members, &details)?;
        let edited = Task::new(task_id, details);
        let column = self.board.replace(edited.clone())?;
        self.touch(clock);
        Ok((column, edited))
    }

    /// Removes a task from whichever column holds it.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::TaskNotFound`] when the task is not on
    /// the board.
    pub fn remove_task(
        &mut self,
        task_id: TaskId,
        clock: &impl Clock,
    ) -> Result<(Column, Task), ProjectDomainError> {
        let removed = self.board.remove(task_id)?;
        self.touch(clock);
        Ok(removed)
    }

    /// Moves a dragged task between columns. See [`Board::move_task`].
    ///
    /// # Errors
    ///
    /// Propagates the board's validation errors.
    pub fn move_task(
        &mut self,
        task_id: TaskId,
        from: Column,
        to: Column,
        clock: &impl Clock,
    ) -> Result<MoveOutcome, ProjectDomainError> {
        let outcome = self.board.move_task(task_id, from, to)?;
        if matches!(outcome, MoveOutcome::Moved { .. }) {
            self.touch(clock);
        }
        Ok(outcome)
    }

    /// Moves a task to `to` from wherever it currently is.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::TaskNotFound`] when the task is not on
    /// the board.
    pub fn move_task_to(
        &mut self,
        task_id: TaskId,
        to: Column,
        clock: &impl Clock,
    ) -> Result<MoveOutcome, ProjectDomainError> {
        let outcome = self.board.move_task_to(task_id, to)?;
        if matches!(outcome, MoveOutcome::Moved { .. }) {
            self.touch(clock);
        }
        Ok(outcome)
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

fn ensure_team_invariants(members: &[Member], board: &Board) -> Result<(), ProjectDomainError> {
    ensure_unique_members(members)?;
    for (_, task) in board.iter() {
        ensure_assignees_are_members(members, task.details())?;
    }
    Ok(())
}

fn ensure_unique_members(members: &[Member]) -> Result<(), ProjectDomainError> {
    let mut seen = HashSet::new();
    for member in members {
        if !seen.insert(member.id()) {
            return Err(ProjectDomainError::DuplicateMember(member.id()));
        }
    }
    Ok(())
}

fn ensure_assignees_are_members(
    members: &[Member],
    details: &TaskDetails,
) -> Result<(), ProjectDomainError> {
    details
        .assignees()
        .iter()
        .find(|assignee| !members.iter().any(|member| member.id() == **assignee))
        .map_or(Ok(()), |unknown| {
            Err(ProjectDomainError::UnknownAssignee(*unknown))
        })
}
