//! Project repository adapters.
//!
//! Both adapters keep projects in a `Vec` so that listing preserves
//! insertion order; the helpers below implement the shared mutations.

pub mod memory;
pub mod stored;

pub use memory::InMemoryProjectRepository;
pub use stored::StoredProjectRepository;

use crate::project::{
    domain::{Project, ProjectId},
    ports::{ProjectRepositoryError, ProjectRepositoryResult},
};

fn insert(projects: &mut Vec<Project>, project: &Project) -> ProjectRepositoryResult<()> {
    if projects.iter().any(|stored| stored.id() == project.id()) {
        return Err(ProjectRepositoryError::DuplicateProject(project.id()));
    }
    projects.push(project.clone());
    Ok(())
}

fn replace(projects: &mut [Project], project: &Project) -> ProjectRepositoryResult<()> {
    let slot = projects
        .iter_mut()
        .find(|stored| stored.id() == project.id())
        .ok_or(ProjectRepositoryError::NotFound(project.id()))?;
    *slot = project.clone();
    Ok(())
}

fn take(projects: &mut Vec<Project>, id: ProjectId) -> ProjectRepositoryResult<Project> {
    let index = projects
        .iter()
        .position(|stored| stored.id() == id)
        .ok_or(ProjectRepositoryError::NotFound(id))?;
    Ok(projects.remove(index))
}

fn find(projects: &[Project], id: ProjectId) -> Option<Project> {
    projects.iter().find(|stored| stored.id() == id).cloned()
}
