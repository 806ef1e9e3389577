//! Per-project board figures.

use crate::project::domain::{
    Board, Column, MemberId, Progress, Project, ProjectId, TaskPriority,
};

/// Returns `part` as a percentage of `whole`, rounded down. An empty whole
/// yields zero.
#[must_use]
pub fn completion_percent(part: usize, whole: usize) -> u8 {
    part.saturating_mul(100)
        .checked_div(whole)
        .and_then(|percent| u8::try_from(percent).ok())
        .map_or(0, |percent| percent.min(Progress::MAX))
}

/// Task counts for one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardSummary {
    to_do: usize,
    in_progress: usize,
    done: usize,
    high: usize,
    medium: usize,
    low: usize,
}

impl BoardSummary {
    /// Counts the tasks on `board`.
    #[must_use]
    pub fn of(board: &Board) -> Self {
        let mut summary = Self::default();
        for (column, task) in board.iter() {
            *summary.column_slot(column) += 1;
            *summary.priority_slot(task.priority()) += 1;
        }
        summary
    }

    const fn column_slot(&mut self, column: Column) -> &mut usize {
        match column {
            Column::ToDo => &mut self.to_do,
            Column::InProgress => &mut self.in_progress,
            Column::Done => &mut self.done,
        }
    }

    const fn priority_slot(&mut self, priority: TaskPriority) -> &mut usize {
        match priority {
            TaskPriority::High => &mut self.high,
            TaskPriority::Medium => &mut self.medium,
            TaskPriority::Low => &mut self.low,
        }
    }

    /// Returns the number of tasks in `column`.
    #[must_use]
    pub const fn in_column(&self, column: Column) -> usize {
        match column {
            Column::ToDo => self.to_do,
            Column::InProgress => self.in_progress,
            Column::Done => self.done,
        }
    }

    /// Returns the number of tasks with `priority`.
    #[must_use]
    pub const fn with_priority(&self, priority: TaskPriority) -> usize {
        match priority {
            TaskPriority::High => self.high,
            TaskPriority::Medium => self.medium,
            TaskPriority::Low => self.low,
        }
    }

    /// Returns the number of tasks on the board.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.to_do + self.in_progress + self.done
    }

    /// Returns the share of tasks in the Done column, rounded down.
    #[must_use]
    pub fn completion_percent(&self) -> u8 {
        completion_percent(self.done, self.total())
    }
}

/// Stated progress next to the completion derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressReport {
    /// Project the figures belong to.
    pub project_id: ProjectId,
    /// Progress entered on the project form.
    pub stated: Progress,
    /// Share of tasks in the Done column.
    pub derived: u8,
}

impl ProgressReport {
    /// Builds the report for `project`.
    #[must_use]
    pub fn of(project: &Project) -> Self {
        Self {
            project_id: project.id(),
            stated: project.details().progress(),
            derived: BoardSummary::of(project.board()).completion_percent(),
        }
    }

    /// Returns whether both figures agree.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.stated.value() == self.derived
    }
}

/// Open work carried by one member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberLoad {
    /// Member identifier.
    pub member_id: MemberId,
    /// Member display name.
    pub name: String,
    /// Tasks assigned to the member outside the Done column.
    pub open_tasks: usize,
}

/// Open task counts per member, in team order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    members: Vec<MemberLoad>,
}

impl Workload {
    /// Builds the workload for `project`.
    #[must_use]
    pub fn of(project: &Project) -> Self {
        let members = project
            .members()
            .iter()
            .map(|member| MemberLoad {
                member_id: member.id(),
                name: member.name().to_owned(),
                open_tasks: project
                    .board()
                    .iter()
                    .filter(|(column, task)| {
                        *column != Column::Done && task.is_assigned_to(member.id())
                    })
                    .count(),
            })
            .collect();
        Self { members }
    }

    /// Returns every member's load.
    #[must_use]
    pub fn members(&self) -> &[MemberLoad] {
        &self.members
    }

    /// Returns the load of one member.
    #[must_use]
    pub fn for_member(&self, member_id: MemberId) -> Option<&MemberLoad> {
        self.members.iter().find(|load| load.member_id == member_id)
    }
}
