//! Driving port for registering bloggers.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User};

/// Domain use-case port for creating users.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a user. Duplicate usernames or emails fail with
    /// [`ErrorCode::Conflict`](crate::domain::ErrorCode::Conflict).
    async fn create_user(&self, user: NewUser) -> Result<User, Error>;
}
