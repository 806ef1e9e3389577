//! Directory user entity.

use super::{EmailAddress, UserProfile, UserStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a directory user.
///
/// New users receive one more than the largest identifier in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wraps an existing numeric identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the identifier following the largest of `ids`, or 1.
    #[must_use]
    pub fn next_after(ids: impl IntoIterator<Item = Self>) -> Self {
        let largest = ids.into_iter().map(Self::value).max().unwrap_or(0);
        Self(largest.saturating_add(1))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Directory entry for one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    #[serde(flatten)]
    profile: UserProfile,
    created_on: NaiveDate,
    status: UserStatus,
}

impl User {
    /// Creates an active user.
    #[must_use]
    pub const fn new(id: UserId, profile: UserProfile, created_on: NaiveDate) -> Self {
        Self {
            id,
            profile,
            created_on,
            status: UserStatus::Active,
        }
    }

    /// Sets the account status.
    #[must_use]
    pub const fn with_status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the editable fields.
    #[must_use]
    pub const fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.profile.name()
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        self.profile.email()
    }

    /// Returns the creation date.
    #[must_use]
    pub const fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    /// Returns the account status.
    #[must_use]
    pub const fn status(&self) -> UserStatus {
        self.status
    }

    /// Replaces the editable fields.
    pub fn set_profile(&mut self, profile: UserProfile) {
        self.profile = profile;
    }

    /// Flips between active and inactive and returns the new status.
    pub const fn toggle_status(&mut self) -> UserStatus {
        self.status = self.status.toggled();
        self.status
    }

    /// Returns whether the name or email contains `needle`, ignoring case.
    #[must_use]
    pub fn matches_text(&self, needle: &str) -> bool {
        let lowered = needle.to_lowercase();
        self.profile.name().to_lowercase().contains(&lowered)
            || self.profile.email().as_str().to_lowercase().contains(&lowered)
    }
}
