//! Application services for project and board orchestration.

mod board;
mod error;
mod project;
mod requests;

pub use board::{BoardService, CreateTaskRequest, MoveTaskRequest, TaskView};
pub use error::{ProjectServiceError, ProjectServiceResult};
pub use project::{CreateProjectRequest, ProjectService, UpdateProjectRequest};
pub use requests::{InitialTaskRequest, MemberRequest, ProjectDetailsRequest, TaskRequest};
