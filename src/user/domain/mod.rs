//! Domain model for directory users.

mod error;
mod profile;
mod status;
mod user;

pub use error::{ParseUserStatusError, UserDomainError};
pub use profile::{EmailAddress, MIN_NAME_LENGTH, MIN_PASSWORD_LENGTH, UserProfile, validate_password};
pub use status::UserStatus;
pub use user::{User, UserId};
