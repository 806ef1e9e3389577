//! Editable user fields and their validation rules.

use super::UserDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shortest accepted user name, in characters after trimming.
pub const MIN_NAME_LENGTH: usize = 3;

/// Shortest accepted password, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Email address of the shape `local@domain.tld`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated address.
    ///
    /// The address must contain no whitespace and exactly one `@`, and the
    /// domain must contain a dot with text on both sides.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::InvalidEmail`] for any other shape.
    pub fn new(value: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if !is_valid_email(trimmed) {
            return Err(UserDomainError::InvalidEmail(raw));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the address as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compares two addresses ignoring case.
    #[must_use]
    pub fn same_address(&self, other: &Self) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .rsplit_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Checks a password against the minimum length. Passwords are never
/// stored.
///
/// # Errors
///
/// Returns [`UserDomainError::PasswordTooShort`] when the password has fewer
/// than [`MIN_PASSWORD_LENGTH`] characters.
pub fn validate_password(password: &str) -> Result<(), UserDomainError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(UserDomainError::PasswordTooShort);
    }
    Ok(())
}

/// Validated fields entered through the user forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserProfileRecord")]
pub struct UserProfile {
    name: String,
    email: EmailAddress,
    role: String,
    avatar: String,
}

#[derive(Deserialize)]
struct UserProfileRecord {
    name: String,
    email: String,
    role: String,
    #[serde(default)]
    avatar: Option<String>,
}

impl TryFrom<UserProfileRecord> for UserProfile {
    type Error = UserDomainError;

    fn try_from(record: UserProfileRecord) -> Result<Self, Self::Error> {
        Self::new(record.name, record.email, record.role, record.avatar)
    }
}

impl UserProfile {
    /// Creates a validated profile.
    ///
    /// When `avatar` is `None` or blank, a generated avatar seeded with the
    /// name is used.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::NameTooShort`],
    /// [`UserDomainError::InvalidEmail`] or [`UserDomainError::EmptyRole`].
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        avatar: Option<String>,
    ) -> Result<Self, UserDomainError> {
        let raw_name = name.into();
        let trimmed_name = raw_name.trim();
        if trimmed_name.chars().count() < MIN_NAME_LENGTH {
            return Err(UserDomainError::NameTooShort(raw_name));
        }
        let email_address = EmailAddress::new(email)?;
        let raw_role = role.into();
        if raw_role.trim().is_empty() {
            return Err(UserDomainError::EmptyRole);
        }
        let avatar_uri = avatar
            .map(|uri| uri.trim().to_owned())
            .filter(|uri| !uri.is_empty())
            .unwrap_or_else(|| generated_avatar(trimmed_name));

        Ok(Self {
            name: trimmed_name.to_owned(),
            email: email_address,
            role: raw_role.trim().to_owned(),
            avatar: avatar_uri,
        })
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the role.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the avatar URI.
    #[must_use]
    pub fn avatar(&self) -> &str {
        &self.avatar
    }
}

fn generated_avatar(name: &str) -> String {
    let seed: String = name
        .chars()
        .map(|c| if c.is_whitespace() { '+' } else { c })
        .collect();
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={seed}")
}
