//! Service layer for user administration and search.

use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

use crate::confirmation::{Confirmation, ConfirmationPrompt, Deletion};
use crate::notification::{NotificationKind, Notifier};
use crate::user::{
    domain::{EmailAddress, User, UserDomainError, UserId, UserProfile, UserStatus, validate_password},
    ports::{UserRepository, UserRepositoryError},
};

/// Request payload for adding a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserRequest {
    name: String,
    email: String,
    password: String,
    role: String,
    avatar: Option<String>,
}

impl NewUserRequest {
    /// Creates a request. The password is validated and then discarded.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role: role.into(),
            avatar: None,
        }
    }

    /// Sets an explicit avatar URI instead of the generated one.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

/// Request payload for editing a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditUserRequest {
    id: UserId,
    name: String,
    email: String,
    role: String,
    avatar: Option<String>,
    password: Option<String>,
}

impl EditUserRequest {
    /// Creates a request replacing the user's name, email and role.
    #[must_use]
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role: role.into(),
            avatar: None,
            password: None,
        }
    }

    /// Sets a new avatar URI. Without one the current avatar is kept.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Supplies a new password to validate. Blank values are ignored.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

/// Search over the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQuery {
    text: String,
    status: Option<UserStatus>,
    page: usize,
}

impl UserQuery {
    /// Creates a query for the first page of users whose name or email
    /// contains `text`. Empty text matches everyone.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: None,
            page: 1,
        }
    }

    /// Restricts results to one status.
    #[must_use]
    pub const fn with_status(mut self, status: UserStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Selects a 1-based page. Page 0 is treated as page 1.
    #[must_use]
    pub const fn on_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPage {
    /// Users on this page, in directory order.
    pub users: Vec<User>,
    /// The 1-based page number served.
    pub page: usize,
    /// Number of pages across all matches.
    pub total_pages: usize,
    /// Number of users matching the query.
    pub total_matches: usize,
}

/// Headline directory figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserStats {
    /// Number of users.
    pub total: usize,
    /// Number of active users.
    pub active: usize,
}

/// Service-level errors for user directory operations.
#[derive(Debug, Error)]
pub enum UserServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
    /// Another user already has the email address.
    #[error("email address '{0}' is already in use")]
    DuplicateEmail(EmailAddress),
}

/// Result type for user directory operations.
pub type UserServiceResult<T> = Result<T, UserServiceError>;

/// Users listed per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// User directory orchestration service.
#[derive(Clone)]
pub struct UserDirectoryService<R, C, N>
where
    R: UserRepository,
    C: Clock + Send + Sync,
    N: Notifier,
{
    repository: Arc<R>,
    clock: Arc<C>,
    notifier: Arc<N>,
    page_size: usize,
}

impl<R, C, N> UserDirectoryService<R, C, N>
where
    R: UserRepository,
    C: Clock + Send + Sync,
    N: Notifier,
{
    /// Creates a user directory service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>, notifier: Arc<N>) -> Self {
        Self {
            repository,
            clock,
            notifier,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets the number of users per search page. Zero is treated as one.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = if page_size == 0 { 1 } else { page_size };
        self
    }

    /// Adds an active user created today.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Domain`] when a field fails validation or
    /// [`UserServiceError::DuplicateEmail`] when the address is taken.
    pub async fn add(&self, request: NewUserRequest) -> UserServiceResult<User> {
        validate_password(&request.password)?;
        let profile = UserProfile::new(request.name, request.email, request.role, request.avatar)?;
        let existing = self.repository.list().await?;
        ensure_unique_email(&existing, profile.email(), None)?;

        let id = UserId::next_after(existing.iter().map(User::id));
        let user = User::new(id, profile, self.clock.utc().date_naive());
        self.repository.store(&user).await?;
        tracing::info!(user_id = %user.id(), "user added");
        self.notifier.notify(
            NotificationKind::Success,
            format!("User \"{}\" added", user.name()),
        );
        Ok(user)
    }

    /// Replaces a user's name, email, role and optionally avatar.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Domain`] when a field fails validation,
    /// [`UserServiceError::DuplicateEmail`] when another user has the
    /// address, or [`UserServiceError::Repository`] when the user does not
    /// exist.
    pub async fn edit(&self, request: EditUserRequest) -> UserServiceResult<User> {
        if let Some(password) = request.password.as_deref().filter(|raw| !raw.is_empty()) {
            validate_password(password)?;
        }
        let mut user = self.require(request.id).await?;
        let avatar = request
            .avatar
            .or_else(|| Some(user.profile().avatar().to_owned()));
        let profile = UserProfile::new(request.name, request.email, request.role, avatar)?;
        let existing = self.repository.list().await?;
        ensure_unique_email(&existing, profile.email(), Some(user.id()))?;

        user.set_profile(profile);
        self.repository.update(&user).await?;
        tracing::info!(user_id = %user.id(), "user updated");
        self.notifier.notify(
            NotificationKind::Success,
            format!("User \"{}\" updated", user.name()),
        );
        Ok(user)
    }

    /// Flips a user between active and inactive.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] when the user does not
    /// exist.
    pub async fn toggle_status(&self, id: UserId) -> UserServiceResult<User> {
        let mut user = self.require(id).await?;
        let status = user.toggle_status();
        self.repository.update(&user).await?;
        tracing::info!(user_id = %id, status = %status, "user status changed");
        Ok(user)
    }

    /// Removes a user after `confirmation` approves it.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] when the user does not
    /// exist.
    pub async fn delete(
        &self,
        id: UserId,
        confirmation: &dyn Confirmation,
    ) -> UserServiceResult<Deletion<User>> {
        let user = self.require(id).await?;
        let prompt = ConfirmationPrompt::new(
            "Delete user",
            format!("Delete user \"{}\"? This cannot be undone.", user.name()),
        );
        if !confirmation.confirm(&prompt) {
            return Ok(Deletion::Cancelled);
        }
        let removed = self.repository.delete(id).await?;
        tracing::info!(user_id = %id, "user deleted");
        self.notifier.notify(
            NotificationKind::Success,
            format!("User \"{}\" deleted", removed.name()),
        );
        Ok(Deletion::Deleted(removed))
    }

    /// Finds a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] when lookup fails.
    pub async fn find_by_id(&self, id: UserId) -> UserServiceResult<Option<User>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns one page of users matching `query`.
    ///
    /// Pages past the last one are empty.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] when lookup fails.
    pub async fn search(&self, query: UserQuery) -> UserServiceResult<UserPage> {
        let matches: Vec<User> = self
            .repository
            .list()
            .await?
            .into_iter()
            .filter(|user| query.status.is_none_or(|status| user.status() == status))
            .filter(|user| user.matches_text(query.text.trim()))
            .collect();

        let page = query.page.max(1);
        let total_matches = matches.len();
        let offset = page.saturating_sub(1).saturating_mul(self.page_size);
        Ok(UserPage {
            users: matches
                .into_iter()
                .skip(offset)
                .take(self.page_size)
                .collect(),
            page,
            total_pages: total_matches.div_ceil(self.page_size),
            total_matches,
        })
    }

    /// Returns total and active user counts.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] when lookup fails.
    pub async fn stats(&self) -> UserServiceResult<UserStats> {
        let users = self.repository.list().await?;
        Ok(UserStats {
            total: users.len(),
            active: users
                .iter()
                .filter(|user| user.status() == UserStatus::Active)
                .count(),
        })
    }

    async fn require(&self, id: UserId) -> UserServiceResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserServiceError::Repository(UserRepositoryError::NotFound(id)))
    }
}

fn ensure_unique_email(
    users: &[User],
    email: &EmailAddress,
    except: Option<UserId>,
) -> UserServiceResult<()> {
    let taken = users
        .iter()
        .filter(|user| Some(user.id()) != except)
        .any(|user| user.email().same_address(email));
    if taken {
        return Err(UserServiceError::DuplicateEmail(email.clone()));
    }
    Ok(())
}
