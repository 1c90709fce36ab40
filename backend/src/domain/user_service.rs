//! User registration service implementing [`UsersCommand`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{UserRepository, UsersCommand};
use crate::domain::service_support::map_user_persistence_error;
use crate::domain::{Error, NewUser, User};

/// Registers users through a [`UserRepository`].
#[derive(Clone)]
pub struct UserService<R> {
    users: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a service backed by `users`.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, user: NewUser) -> Result<User, Error> {
        let created = self
            .users
            .create(&user)
            .await
            .map_err(map_user_persistence_error)?;
        info!(user_id = %created.id(), username = %created.username(), "user created");
        Ok(created)
    }
}
