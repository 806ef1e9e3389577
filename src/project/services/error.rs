//! Service-level errors shared by the project and board services.

use crate::project::{
    domain::{
        ParseColumnError, ParseProjectStatusError, ParseTaskPriorityError, ProjectDomainError,
    },
    ports::ProjectRepositoryError,
};
use thiserror::Error;

/// Service-level errors for project and board operations.
#[derive(Debug, Error)]
pub enum ProjectServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
    /// A status label could not be parsed.
    #[error(transparent)]
    InvalidStatus(#[from] ParseProjectStatusError),
    /// A priority label could not be parsed.
    #[error(transparent)]
    InvalidPriority(#[from] ParseTaskPriorityError),
    /// A column label could not be parsed.
    #[error(transparent)]
    InvalidColumn(#[from] ParseColumnError),
}

/// Result type for project and board service operations.
pub type ProjectServiceResult<T> = Result<T, ProjectServiceError>;
