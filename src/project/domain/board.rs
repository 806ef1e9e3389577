//! Three-column task board and the move-task transition.

use super::{Column, MemberId, ProjectDomainError, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Result of a move request that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Source and destination were the same column; nothing changed.
    Unchanged {
        /// Column that still holds the task.
        column: Column,
    },
    /// The task was appended to the end of the destination column.
    Moved {
        /// Column the task left.
        from: Column,
        /// Column the task joined.
        to: Column,
    },
}

/// A project's tasks split across the To-Do, In-Progress and Done columns.
///
/// Every mutation goes through methods that look tasks up by identifier, so
/// a task identifier appears in at most one column at any time. Decoding a
/// board that violates this fails.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "BoardColumns")]
pub struct Board {
    to_do: Vec<Task>,
    in_progress: Vec<Task>,
    done: Vec<Task>,
}

/// Unchecked wire shape of a board.
#[derive(Deserialize)]
struct BoardColumns {
    #[serde(default)]
    to_do: Vec<Task>,
    #[serde(default)]
    in_progress: Vec<Task>,
    #[serde(default)]
    done: Vec<Task>,
}

impl TryFrom<BoardColumns> for Board {
    type Error = ProjectDomainError;

    fn try_from(columns: BoardColumns) -> Result<Self, Self::Error> {
        let mut seen = HashSet::new();
        let all = columns
            .to_do
            .iter()
            .chain(&columns.in_progress)
            .chain(&columns.done);
        for task in all {
            if !seen.insert(task.id()) {
                return Err(ProjectDomainError::DuplicateTask(task.id()));
            }
        }
        Ok(Self {
            to_do: columns.to_do,
            in_progress: columns.in_progress,
            done: columns.done,
        })
    }
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            to_do: Vec::new(),
            in_progress: Vec::new(),
            done: Vec::new(),
        }
    }

    /// Returns the tasks of `column` in arrival order.
    #[must_use]
    pub fn tasks(&self, column: Column) -> &[Task] {
        match column {
            Column::ToDo => &self.to_do,
            Column::InProgress => &self.in_progress,
            Column::Done => &self.done,
        }
    }

    const fn tasks_mut(&mut self, column: Column) -> &mut Vec<Task> {
        match column {
            Column::ToDo => &mut self.to_do,
            Column::InProgress => &mut self.in_progress,
            Column::Done => &mut self.done,
        }
    }

    /// Returns every task with its column, column by column.
    pub fn iter(&self) -> impl Iterator<Item = (Column, &Task)> {
        Column::ALL
            .into_iter()
            .flat_map(move |column| self.tasks(column).iter().map(move |task| (column, task)))
    }

    /// Returns the number of tasks across all columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.to_do.len() + self.in_progress.len() + self.done.len()
    }

    /// Returns whether the board holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finds a task and the column currently holding it.
    #[must_use]
    pub fn find(&self, task_id: TaskId) -> Option<(Column, &Task)> {
        self.iter().find(|(_, task)| task.id() == task_id)
    }

    /// Returns the column currently holding the task.
    #[must_use]
    pub fn locate(&self, task_id: TaskId) -> Option<Column> {
        self.find(task_id).map(|(column, _)| column)
    }

    /// Returns the first task assigned to `member_id`, if any.
    #[must_use]
    pub fn first_assigned_to(&self, member_id: MemberId) -> Option<&Task> {
        self.iter()
            .map(|(_, task)| task)
            .find(|task| task.is_assigned_to(member_id))
    }

    /// Appends a task to the end of `column`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::DuplicateTask`] when a task with the
    /// same identifier is already on the board.
    pub fn push(&mut self, column: Column, task: Task) -> Result<(), ProjectDomainError> {
        if self.locate(task.id()).is_some() {
            return Err(ProjectDomainError::DuplicateTask(task.id()));
        }
        self.tasks_mut(column).push(task);
        Ok(())
    }

    /// Overwrites the stored task that shares `task`'s identifier, keeping
    /// its column and position. Returns the column holding the task.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::TaskNotFound`] when no column holds the
    /// task.
    pub fn replace(&mut self, task: Task) -> Result<Column, ProjectDomainError> {
        let task_id = task.id();
        let column = self
            .locate(task_id)
            .ok_or(ProjectDomainError::TaskNotFound(task_id))?;
        let slot = self
            .tasks_mut(column)
            .iter_mut()
            .find(|stored| stored.id() == task_id)
            .ok_or(ProjectDomainError::TaskNotFound(task_id))?;
        *slot = task;
        Ok(column)
    }

    /// Removes a task from whichever column holds it.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::TaskNotFound`] when no column holds the
    /// task.
    pub fn remove(&mut self, task_id: TaskId) -> Result<(Column, Task), ProjectDomainError> {
        let column = self
            .locate(task_id)
            .ok_or(ProjectDomainError::TaskNotFound(task_id))?;
        let task = self.take(column, task_id)?;
        Ok((column, task))
    }

    fn take(&mut self, column: Column, task_id: TaskId) -> Result<Task, ProjectDomainError> {
        let tasks = self.tasks_mut(column);
        let index = tasks
            .iter()
            .position(|task| task.id() == task_id)
            .ok_or(ProjectDomainError::TaskNotFound(task_id))?;
        Ok(tasks.remove(index))
    }

    /// Moves a dragged task from `from` to the end of `to`.
    ///
    /// The task is located by identifier against the current board, so a
    /// drop carrying stale drag state can neither duplicate nor lose a task.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::TaskNotFound`] when the task is no
    /// longer on the board, or [`ProjectDomainError::StaleMoveSource`] when
    /// it now sits in a column other than `from`. The board is unchanged in
    /// both cases.
    pub fn move_task(
        &mut self,
        task_id: TaskId,
        from: Column,
        to: Column,
    ) -> Result<MoveOutcome, ProjectDomainError> {
        let actual = self
            .locate(task_id)
            .ok_or(ProjectDomainError::TaskNotFound(task_id))?;
        if actual != from {
            return Err(ProjectDomainError::StaleMoveSource {
                task_id,
                expected: from,
                actual,
            });
        }
        if from == to {
            return Ok(MoveOutcome::Unchanged { column: from });
        }
        let task = self.take(from, task_id)?;
        self.tasks_mut(to).push(task);
        Ok(MoveOutcome::Moved { from, to })
    }

    /// Moves a task to the end of `to` from wherever it currently is.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::TaskNotFound`] when the task is not on
    /// the board.
    pub fn move_task_to(
        &mut self,
        task_id: TaskId,
        to: Column,
    ) -> Result<MoveOutcome, ProjectDomainError> {
        let from = self
            .locate(task_id)
            .ok_or(ProjectDomainError::TaskNotFound(task_id))?;
        self.move_task(task_id, from, to)
    }
}
