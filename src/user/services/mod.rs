//! Application services for the user directory.

mod directory;

pub use directory::{
    DEFAULT_PAGE_SIZE, EditUserRequest, NewUserRequest, UserDirectoryService, UserPage, UserQuery, UserServiceError,
    UserServiceResult, UserStats,
};
