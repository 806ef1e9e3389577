//! In-memory project repository for tests and ephemeral sessions.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::project::{
    domain::{Project, ProjectId},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};

/// Thread-safe in-memory project repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<Vec<Project>>>,
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `projects` in the given order.
    #[must_use]
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects: Arc::new(RwLock::new(projects)),
        }
    }
}

fn lock_error(err: &impl std::fmt::Display) -> ProjectRepositoryError {
    ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn store(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut projects = self.projects.write().map_err(|err| lock_error(&err))?;
        super::insert(&mut projects, project)
    }

    async fn update(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut projects = self.projects.write().map_err(|err| lock_error(&err))?;
        super::replace(&mut projects, project)
    }

    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<Project> {
        let mut projects = self.projects.write().map_err(|err| lock_error(&err))?;
        super::take(&mut projects, id)
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let projects = self.projects.read().map_err(|err| lock_error(&err))?;
        Ok(super::find(&projects, id))
    }

    async fn list(&self) -> ProjectRepositoryResult<Vec<Project>> {
        let projects = self.projects.read().map_err(|err| lock_error(&err))?;
        Ok(projects.clone())
    }
}
