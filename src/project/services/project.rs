//! Service layer for project creation, editing and removal.

use mockable::Clock;
use std::sync::Arc;

use super::requests::{InitialTaskRequest, MemberRequest, ProjectDetailsRequest, build_members};
use super::{ProjectServiceError, ProjectServiceResult};
use crate::confirmation::{Confirmation, ConfirmationPrompt, Deletion};
use crate::project::{
    domain::{Board, IdGenerator, Project, ProjectId, ProjectStatus, Task},
    ports::{ProjectRepository, ProjectRepositoryError},
};

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    details: ProjectDetailsRequest,
    members: Vec<MemberRequest>,
    tasks: Vec<InitialTaskRequest>,
}

impl CreateProjectRequest {
    /// Creates a request with no members and no initial tasks.
    #[must_use]
    pub const fn new(details: ProjectDetailsRequest) -> Self {
        Self {
            details,
            members: Vec::new(),
            tasks: Vec::new(),
        }
    }

    /// Sets the team.
    #[must_use]
    pub fn with_members(mut self, members: impl IntoIterator<Item = MemberRequest>) -> Self {
        self.members = members.into_iter().collect();
        self
    }

    /// Sets the initial tasks. Each lands in the column its tag names, in
    /// input order.
    #[must_use]
    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = InitialTaskRequest>) -> Self {
        self.tasks = tasks.into_iter().collect();
        self
    }
}

/// Request payload for replacing a project's details and team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProjectRequest {
    project_id: ProjectId,
    details: ProjectDetailsRequest,
    members: Vec<MemberRequest>,
}

impl UpdateProjectRequest {
    /// Creates an update that leaves the project with no members.
    #[must_use]
    pub const fn new(project_id: ProjectId, details: ProjectDetailsRequest) -> Self {
        Self {
            project_id,
            details,
            members: Vec::new(),
        }
    }

    /// Sets the replacement team.
    #[must_use]
    pub fn with_members(mut self, members: impl IntoIterator<Item = MemberRequest>) -> Self {
        self.members = members.into_iter().collect();
        self
    }
}

/// Project orchestration service.
#[derive(Clone)]
pub struct ProjectService<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    ids: Arc<IdGenerator>,
}

impl<R, C> ProjectService<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    /// Creates a project service with its own identifier generator.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            ids: Arc::new(IdGenerator::new()),
        }
    }

    /// Shares an identifier generator with other services.
    #[must_use]
    pub fn with_id_generator(mut self, ids: Arc<IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Creates and stores a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError`] when a field fails validation, an
    /// initial task names an unknown column or assignee, or the repository
    /// rejects the project.
    pub async fn create(&self, request: CreateProjectRequest) -> ProjectServiceResult<Project> {
        let details = request.details.into_details()?;
        let members = build_members(request.members)?;

        let mut board = Board::new();
        for initial in request.tasks {
            let (id, column, task_details) = initial.into_parts()?;
            let task_id = id.unwrap_or_else(|| self.ids.next_task_id(&*self.clock));
            board.push(column, Task::new(task_id, task_details))?;
        }

        let project_id = self.ids.next_project_id(&*self.clock);
        let project = Project::new(project_id, details, members, board, &*self.clock)?;
        self.repository.store(&project).await?;
        tracing::info!(
            project_id = %project.id(),
            tasks = project.board().len(),
            "project created"
        );
        Ok(project)
    }

    /// Replaces a project's details and team. The board is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError`] when a field fails validation, a
    /// removed member is still assigned to a task, or the project does not
    /// exist.
    pub async fn update(&self, request: UpdateProjectRequest) -> ProjectServiceResult<Project> {
        let details = request.details.into_details()?;
        let members = build_members(request.members)?;
        let mut project = self.require(request.project_id).await?;
        project.update(details, members, &*self.clock)?;
        self.repository.update(&project).await?;
        tracing::info!(project_id = %project.id(), "project updated");
        Ok(project)
    }

    /// Removes a project after `confirmation` approves it.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Repository`] when the project does not
    /// exist or cannot be removed.
    pub async fn delete(
        &self,
        id: ProjectId,
        confirmation: &dyn Confirmation,
    ) -> ProjectServiceResult<Deletion<Project>> {
        let project = self.require(id).await?;
        let prompt = ConfirmationPrompt::new(
            "Delete project",
            format!(
                "Delete project \"{}\" with {} tasks? This cannot be undone.",
                project.name(),
                project.board().len()
            ),
        );
        if !confirmation.confirm(&prompt) {
            tracing::debug!(project_id = %id, "project deletion cancelled");
            return Ok(Deletion::Cancelled);
        }
        let removed = self.repository.delete(id).await?;
        tracing::info!(project_id = %id, "project deleted");
        Ok(Deletion::Deleted(removed))
    }

    /// Finds a project by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Repository`] when lookup fails.
    pub async fn find_by_id(&self, id: ProjectId) -> ProjectServiceResult<Option<Project>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Lists every project in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Repository`] when lookup fails.
    pub async fn list(&self) -> ProjectServiceResult<Vec<Project>> {
        Ok(self.repository.list().await?)
    }

    /// Lists projects with the given status in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Repository`] when lookup fails.
    pub async fn list_by_status(&self, status: ProjectStatus) -> ProjectServiceResult<Vec<Project>> {
        let mut projects = self.repository.list().await?;
        projects.retain(|project| project.details().status() == status);
        Ok(projects)
    }

    async fn require(&self, id: ProjectId) -> ProjectServiceResult<Project> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProjectServiceError::Repository(
                ProjectRepositoryError::NotFound(id),
            ))
    }
}
