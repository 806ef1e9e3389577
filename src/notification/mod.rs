//! Ephemeral, auto-expiring notices raised by board and directory
//! operations.
//!
//! - Notice types in [`domain`]
//! - The [`Notifier`] port
//! - [`NotificationCenter`], an in-memory adapter holding active notices

mod center;
pub mod domain;

pub use center::{DEFAULT_DURATION, NotificationCenter};
pub use domain::{Notification, NotificationId, NotificationKind};

/// Port through which services raise notices.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Raises a notice of `kind` with `message`.
    fn notify(&self, kind: NotificationKind, message: String);
}
