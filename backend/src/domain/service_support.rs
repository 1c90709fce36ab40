//! Shared mapping from repository failures to domain errors.

use tracing::{error, warn};

use crate::domain::Error;
use crate::domain::ports::{PostPersistenceError, UserPersistenceError};

/// Message returned when a username or email is already registered.
pub const DUPLICATE_USER_MESSAGE: &str = "Username or email already exists.";

/// Message returned when a post references an unknown author.
pub fn unknown_user_message(user_id: impl std::fmt::Display) -> String {
    format!("User with ID {user_id} not found.")
}

pub(crate) fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            error!(%message, "user repository unavailable");
            Error::internal(message)
        }
        UserPersistenceError::Conflict { message } => {
            warn!(%message, "user uniqueness constraint rejected insert");
            Error::conflict(DUPLICATE_USER_MESSAGE)
        }
        UserPersistenceError::Query { message } => {
            error!(%message, "user repository query failed");
            Error::internal(message)
        }
    }
}

pub(crate) fn map_post_persistence_error(error: PostPersistenceError) -> Error {
    match error {
        PostPersistenceError::Connection { message } => {
            error!(%message, "post repository unavailable");
            Error::internal(message)
        }
        PostPersistenceError::MissingAuthor { user_id } => {
            Error::not_found(unknown_user_message(user_id))
        }
        PostPersistenceError::Query { message } => {
            error!(%message, "post repository query failed");
            Error::internal(message)
        }
    }
}
