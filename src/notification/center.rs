//! In-memory notice list.

use chrono::TimeDelta;
use mockable::Clock;
use std::sync::{Arc, PoisonError, RwLock};

use super::{Notification, NotificationId, NotificationKind, Notifier};

/// Visibility of a notice unless configured otherwise.
pub const DEFAULT_DURATION: TimeDelta = TimeDelta::milliseconds(4000);

/// Keeps raised notices until they expire or are dismissed.
#[derive(Debug)]
pub struct NotificationCenter<C> {
    clock: Arc<C>,
    duration: TimeDelta,
    notices: RwLock<Vec<Notification>>,
}

impl<C: Clock + Send + Sync> NotificationCenter<C> {
    /// Creates an empty centre using [`DEFAULT_DURATION`].
    #[must_use]
    pub const fn new(clock: Arc<C>) -> Self {
        Self {
            clock,
            duration: DEFAULT_DURATION,
            notices: RwLock::new(Vec::new()),
        }
    }

    /// Sets how long new notices stay visible.
    #[must_use]
    pub const fn with_duration(mut self, duration: TimeDelta) -> Self {
        self.duration = duration;
        self
    }

    /// Returns notices that have not expired, oldest first.
    #[must_use]
    pub fn active(&self) -> Vec<Notification> {
        let now = self.clock.utc();
        self.notices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|notice| !notice.is_expired_at(now))
            .cloned()
            .collect()
    }

    /// Removes a notice before it expires. Returns `false` when the notice
    /// is unknown.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        let mut notices = self.notices.write().unwrap_or_else(PoisonError::into_inner);
        let before = notices.len();
        notices.retain(|notice| notice.id() != id);
        notices.len() != before
    }

    /// Drops expired notices and returns how many were removed.
    pub fn prune_expired(&self) -> usize {
        let now = self.clock.utc();
        let mut notices = self.notices.write().unwrap_or_else(PoisonError::into_inner);
        let before = notices.len();
        notices.retain(|notice| !notice.is_expired_at(now));
        before.saturating_sub(notices.len())
    }
}

impl<C: Clock + Send + Sync> Notifier for NotificationCenter<C> {
    fn notify(&self, kind: NotificationKind, message: String) {
        let notice = Notification::new(kind, message, self.duration, self.clock.utc());
        tracing::info!(kind = %kind, message = notice.message(), "notification raised");
        self.notices
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }
}
