//! User repository adapters.

pub mod memory;
pub mod stored;

pub use memory::InMemoryUserRepository;
pub use stored::StoredUserRepository;

use crate::user::{
    domain::{User, UserId},
    ports::{UserRepositoryError, UserRepositoryResult},
};

fn insert(users: &mut Vec<User>, user: &User) -> UserRepositoryResult<()> {
    if users.iter().any(|stored| stored.id() == user.id()) {
        return Err(UserRepositoryError::DuplicateUser(user.id()));
    }
    users.push(user.clone());
    Ok(())
}

fn replace(users: &mut [User], user: &User) -> UserRepositoryResult<()> {
    let slot = users
        .iter_mut()
        .find(|stored| stored.id() == user.id())
        .ok_or(UserRepositoryError::NotFound(user.id()))?;
    *slot = user.clone();
    Ok(())
}

fn take(users: &mut Vec<User>, id: UserId) -> UserRepositoryResult<User> {
    let index = users
        .iter()
        .position(|stored| stored.id() == id)
        .ok_or(UserRepositoryError::NotFound(id))?;
    Ok(users.remove(index))
}
