//! Service layer for the task board: create, view, edit, move and delete.

use mockable::Clock;
use std::sync::Arc;

use super::requests::{TaskRequest, parse_column_or_default};
use super::{ProjectServiceError, ProjectServiceResult};
use crate::confirmation::{Confirmation, ConfirmationPrompt, Deletion};
use crate::notification::{NotificationKind, Notifier};
use crate::project::{
    domain::{
        Board, Column, IdGenerator, Member, MoveOutcome, Project, ProjectDomainError, ProjectId,
        Task, TaskId,
    },
    ports::{ProjectRepository, ProjectRepositoryError},
};

/// Request payload for adding a task to a project board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    project_id: ProjectId,
    column: Option<String>,
    task: TaskRequest,
}

impl CreateTaskRequest {
    /// Creates a request for a task in the To-Do column.
    #[must_use]
    pub const fn new(project_id: ProjectId, task: TaskRequest) -> Self {
        Self {
            project_id,
            column: None,
            task,
        }
    }

    /// Places the task in the column with the given label instead.
    #[must_use]
    pub fn in_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }
}

/// Drop of a dragged task.
///
/// `from` is the column captured when the drag started and `to` the column
/// under the pointer at drop time. Both accept any column label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTaskRequest {
    project_id: ProjectId,
    task_id: TaskId,
    from: String,
    to: String,
}

impl MoveTaskRequest {
    /// Creates a move request.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        task_id: TaskId,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            project_id,
            task_id,
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Read-only projection of a task for the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    /// The task as stored.
    pub task: Task,
    /// Column currently holding the task.
    pub column: Column,
    /// Assigned members resolved against the project team.
    pub assignees: Vec<Member>,
}

/// Task board orchestration service.
///
/// Every operation loads the project, applies one domain mutation and
/// writes the project back.
#[derive(Clone)]
pub struct BoardService<R, C, N>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
    N: Notifier,
{
    repository: Arc<R>,
    clock: Arc<C>,
    notifier: Arc<N>,
    ids: Arc<IdGenerator>,
}

impl<R, C, N> BoardService<R, C, N>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
    N: Notifier,
{
    /// Creates a board service with its own identifier generator.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>, notifier: Arc<N>) -> Self {
        Self {
            repository,
            clock,
            notifier,
            ids: Arc::new(IdGenerator::new()),
        }
    }

    /// Shares an identifier generator with other services.
    #[must_use]
    pub fn with_id_generator(mut self, ids: Arc<IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Returns a project's board.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Repository`] when the project does not
    /// exist.
    pub async fn board(&self, project_id: ProjectId) -> ProjectServiceResult<Board> {
        let project = self.require(project_id).await?;
        Ok(project.board().clone())
    }

    /// Adds a task with a fresh identifier to the end of the requested
    /// column.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError`] when a field fails validation, an
    /// assignee is not a project member, or the project does not exist.
    pub async fn create_task(&self, request: CreateTaskRequest) -> ProjectServiceResult<Task> {
        let result = self.try_create_task(request).await;
        self.report_failure(result)
    }

    async fn try_create_task(&self, request: CreateTaskRequest) -> ProjectServiceResult<Task> {
        let column = parse_column_or_default(request.column.as_deref())?;
        let details = request.task.into_details()?;
        let mut project = self.require(request.project_id).await?;
        let task = Task::new(self.ids.next_task_id(&*self.clock), details);
        project.add_task(column, task.clone(), &*self.clock)?;
        self.repository.update(&project).await?;

        tracing::info!(
            project_id = %project.id(),
            task_id = %task.id(),
            column = %column,
            "task created"
        );
        self.notifier.notify(
            NotificationKind::Success,
            format!("Task \"{}\" created", task.title()),
        );
        Ok(task)
    }

    /// Returns a task with its column and resolved assignees.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Domain`] when the task is not on the
    /// board or [`ProjectServiceError::Repository`] when the project does
    /// not exist.
    pub async fn view_task(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> ProjectServiceResult<TaskView> {
        let project = self.require(project_id).await?;
        let (column, task) = project
            .board()
            .find(task_id)
            .ok_or(ProjectDomainError::TaskNotFound(task_id))?;
        Ok(TaskView {
            task: task.clone(),
            column,
            assignees: project.assignees_of(task).into_iter().cloned().collect(),
        })
    }

    /// Replaces a task's fields, keeping its column and position.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError`] when a field fails validation, the
    /// task is not on the board, or the project does not exist.
    pub async fn edit_task(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
        request: TaskRequest,
    ) -> ProjectServiceResult<Task> {
        let result = self.try_edit_task(project_id, task_id, request).await;
        self.report_failure(result)
    }

    async fn try_edit_task(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
        request: TaskRequest,
    ) -> ProjectServiceResult<Task> {
        let details = request.into_details()?;
        let mut project = self.require(project_id).await?;
        let (column, task) = project.edit_task(task_id, details, &*self.clock)?;
        self.repository.update(&project).await?;

        tracing::info!(
            project_id = %project_id,
            task_id = %task_id,
            column = %column,
            "task updated"
        );
        self.notifier.notify(
            NotificationKind::Success,
            format!("Task \"{}\" updated", task.title()),
        );
        Ok(task)
    }

    /// Removes a task after `confirmation` approves it.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Domain`] when the task is not on the
    /// board or [`ProjectServiceError::Repository`] when the project does
    /// not exist.
    pub async fn delete_task(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
        confirmation: &dyn Confirmation,
    ) -> ProjectServiceResult<Deletion<Task>> {
        let mut project = self.require(project_id).await?;
        let title = project
            .board()
            .find(task_id)
            .map(|(_, task)| task.title().to_owned())
            .ok_or(ProjectDomainError::TaskNotFound(task_id))?;
        let prompt = ConfirmationPrompt::new(
            "Delete task",
            format!("Delete task \"{title}\"? This cannot be undone."),
        );
        if !confirmation.confirm(&prompt) {
            tracing::debug!(project_id = %project_id, task_id = %task_id, "task deletion cancelled");
            return Ok(Deletion::Cancelled);
        }

        let (column, task) = project.remove_task(task_id, &*self.clock)?;
        self.repository.update(&project).await?;
        tracing::info!(
            project_id = %project_id,
            task_id = %task_id,
            column = %column,
            "task deleted"
        );
        self.notifier
            .notify(NotificationKind::Success, format!("Task \"{title}\" deleted"));
        Ok(Deletion::Deleted(task))
    }

    /// Applies a drag-and-drop move.
    ///
    /// The task is looked up by identifier at drop time. Dropping onto the
    /// source column changes nothing and raises no notice.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::InvalidColumn`] for unknown labels,
    /// [`ProjectServiceError::Domain`] when the task is gone or no longer in
    /// `from`, or [`ProjectServiceError::Repository`] when the project does
    /// not exist. Nothing is written on error.
    pub async fn move_task(&self, request: MoveTaskRequest) -> ProjectServiceResult<MoveOutcome> {
        let from = Column::try_from(request.from.as_str())?;
        let to = Column::try_from(request.to.as_str())?;
        let mut project = self.require(request.project_id).await?;
        let outcome = project.move_task(request.task_id, from, to, &*self.clock)?;
        self.finish_move(&project, request.task_id, outcome).await?;
        Ok(outcome)
    }

    /// Moves a task to the column labelled `to` from wherever it is.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::InvalidColumn`] for an unknown label,
    /// [`ProjectServiceError::Domain`] when the task is not on the board, or
    /// [`ProjectServiceError::Repository`] when the project does not exist.
    pub async fn move_task_to(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
        to: &str,
    ) -> ProjectServiceResult<MoveOutcome> {
        let destination = Column::try_from(to)?;
        let mut project = self.require(project_id).await?;
        let outcome = project.move_task_to(task_id, destination, &*self.clock)?;
        self.finish_move(&project, task_id, outcome).await?;
        Ok(outcome)
    }

    async fn finish_move(
        &self,
        project: &Project,
        task_id: TaskId,
        outcome: MoveOutcome,
    ) -> ProjectServiceResult<()> {
        let MoveOutcome::Moved { from, to } = outcome else {
            return Ok(());
        };
        self.repository.update(project).await?;
        tracing::info!(
            project_id = %project.id(),
            task_id = %task_id,
            from = %from,
            to = %to,
            "task moved"
        );
        if let Some((_, task)) = project.board().find(task_id) {
            self.notifier.notify(
                NotificationKind::Info,
                format!("Task \"{}\" moved to {}", task.title(), to.label()),
            );
        }
        Ok(())
    }

    async fn require(&self, id: ProjectId) -> ProjectServiceResult<Project> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProjectServiceError::Repository(
                ProjectRepositoryError::NotFound(id),
            ))
    }

    fn report_failure<T>(&self, result: ProjectServiceResult<T>) -> ProjectServiceResult<T> {
        if let Err(err) = &result {
            tracing::warn!(error = %err, "board operation rejected");
            self.notifier
                .notify(NotificationKind::Error, err.to_string());
        }
        result
    }
}
