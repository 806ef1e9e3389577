//! Error types for user validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or mutating users.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The name is shorter than the minimum after trimming.
    #[error("user name '{0}' must be at least 3 characters long")]
    NameTooShort(String),

    /// The email address is not of the form `local@domain.tld`.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The password is shorter than the minimum.
    #[error("password must be at least 6 characters long")]
    PasswordTooShort,

    /// The role is empty after trimming.
    #[error("user role must not be empty")]
    EmptyRole,
}

/// Error returned while parsing a user status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown user status: {0}")]
pub struct ParseUserStatusError(pub String);
