//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// A username or email uniqueness constraint rejected the insert.
        Conflict { message: String } => "user already exists: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "{message}",
    }
}

/// Driven port over the `Users` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the stored row.
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Whether a user with `id` exists.
    async fn exists(&self, id: UserId) -> Result<bool, UserPersistenceError>;

    /// Delete a user, cascading to their posts. Returns whether a row was removed.
    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError>;

    /// Number of distinct users.
    async fn count(&self) -> Result<i64, UserPersistenceError>;
}
