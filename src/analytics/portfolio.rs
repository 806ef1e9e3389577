//! Figures across every project.

use super::BoardSummary;
use crate::project::domain::{Column, Project, ProjectStatus};

/// Project and task counts across a project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PortfolioSummary {
    planned: usize,
    in_progress: usize,
    paused: usize,
    completed: usize,
    tasks: usize,
    done_tasks: usize,
}

impl PortfolioSummary {
    /// Summarises `projects`.
    #[must_use]
    pub fn of(projects: &[Project]) -> Self {
        projects.iter().fold(Self::default(), |mut summary, project| {
            *summary.status_slot(project.details().status()) += 1;
            let board = BoardSummary::of(project.board());
            summary.tasks += board.total();
            summary.done_tasks += board.in_column(Column::Done);
            summary
        })
    }

    const fn status_slot(&mut self, status: ProjectStatus) -> &mut usize {
        match status {
            ProjectStatus::Planned => &mut self.planned,
            ProjectStatus::InProgress => &mut self.in_progress,
            ProjectStatus::Paused => &mut self.paused,
            ProjectStatus::Completed => &mut self.completed,
        }
    }

    /// Returns the number of projects with `status`.
    #[must_use]
    pub const fn with_status(&self, status: ProjectStatus) -> usize {
        match status {
            ProjectStatus::Planned => self.planned,
            ProjectStatus::InProgress => self.in_progress,
            ProjectStatus::Paused => self.paused,
            ProjectStatus::Completed => self.completed,
        }
    }

    /// Returns the number of projects.
    #[must_use]
    pub const fn projects(&self) -> usize {
        self.planned + self.in_progress + self.paused + self.completed
    }

    /// Returns the number of tasks on every board.
    #[must_use]
    pub const fn tasks(&self) -> usize {
        self.tasks
    }

    /// Returns the number of tasks in Done columns.
    #[must_use]
    pub const fn done_tasks(&self) -> usize {
        self.done_tasks
    }
}
