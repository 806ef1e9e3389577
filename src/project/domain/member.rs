//! Project team members.

use super::{MemberId, ProjectDomainError};
use serde::{Deserialize, Serialize};

/// Person embedded in a project's team list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MemberRecord")]
pub struct Member {
    id: MemberId,
    name: String,
    avatar: String,
    role: String,
}

#[derive(Deserialize)]
struct MemberRecord {
    id: MemberId,
    name: String,
    avatar: String,
    #[serde(default)]
    role: String,
}

impl TryFrom<MemberRecord> for Member {
    type Error = ProjectDomainError;

    fn try_from(record: MemberRecord) -> Result<Self, Self::Error> {
        Self::new(record.id, record.name, record.avatar, record.role)
    }
}

impl Member {
    /// Creates a validated member.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyMemberName`] or
    /// [`ProjectDomainError::EmptyMemberAvatar`] when the respective value is
    /// blank.
    pub fn new(
        id: MemberId,
        name: impl Into<String>,
        avatar: impl Into<String>,
        role: impl Into<String>,
    ) -> Result<Self, ProjectDomainError> {
        let raw_name = name.into();
        let raw_avatar = avatar.into();
        if raw_name.trim().is_empty() {
            return Err(ProjectDomainError::EmptyMemberName);
        }
        if raw_avatar.trim().is_empty() {
            return Err(ProjectDomainError::EmptyMemberAvatar);
        }
        Ok(Self {
            id,
            name: raw_name.trim().to_owned(),
            avatar: raw_avatar.trim().to_owned(),
            role: role.into().trim().to_owned(),
        })
    }

    /// Returns the member identifier.
    #[must_use]
    pub const fn id(&self) -> MemberId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the avatar URI.
    #[must_use]
    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    /// Returns the free-text role.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }
}
