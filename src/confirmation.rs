//! Explicit confirmation for destructive operations.
//!
//! Deleting a project, task or user asks a [`Confirmation`] port first. A
//! declined prompt leaves all state untouched and yields
//! [`Deletion::Cancelled`].

/// Question put to the user before a destructive operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationPrompt {
    title: String,
    message: String,
}

impl ConfirmationPrompt {
    /// Creates a prompt.
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Returns the short prompt title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the prompt body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Port answering confirmation prompts.
#[cfg_attr(test, mockall::automock)]
pub trait Confirmation: Send + Sync {
    /// Returns `true` when the operation may proceed.
    fn confirm(&self, prompt: &ConfirmationPrompt) -> bool;
}

/// Confirmation adapter that always gives the same answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedConfirmation(bool);

impl FixedConfirmation {
    /// Approves every prompt.
    #[must_use]
    pub const fn accept() -> Self {
        Self(true)
    }

    /// Declines every prompt.
    #[must_use]
    pub const fn decline() -> Self {
        Self(false)
    }
}

impl Confirmation for FixedConfirmation {
    fn confirm(&self, prompt: &ConfirmationPrompt) -> bool {
        tracing::debug!(title = prompt.title(), answer = self.0, "confirmation answered");
        self.0
    }
}

/// Outcome of a confirmation-gated deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deletion<T> {
    /// The prompt was approved and the value removed.
    Deleted(T),
    /// The prompt was declined; nothing changed.
    Cancelled,
}

impl<T> Deletion<T> {
    /// Returns whether the value was removed.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted(_))
    }

    /// Returns the removed value, if any.
    #[must_use]
    pub fn deleted(self) -> Option<T> {
        match self {
            Self::Deleted(value) => Some(value),
            Self::Cancelled => None,
        }
    }
}
