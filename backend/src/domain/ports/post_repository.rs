//! Port abstraction for post persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostWithAuthor, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by post repository adapters.
    pub enum PostPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "post repository connection failed: {message}",
        /// The referenced author row is gone (foreign key rejected the insert).
        MissingAuthor { user_id: i64 } => "user {user_id} does not exist",
        /// Query or mutation failed during execution.
        Query { message: String } => "{message}",
    }
}

/// Driven port over the `Posts` table (joined with `Users` for reads).
///
/// Listings are ordered newest first by `created_at`, ties broken by the
/// higher post id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a post and return the stored row.
    async fn create(&self, post: &NewPost) -> Result<Post, PostPersistenceError>;

    /// Every post joined with its author.
    async fn list_with_authors(&self) -> Result<Vec<PostWithAuthor>, PostPersistenceError>;

    /// Posts written by `user_id`, joined with the author.
    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<PostWithAuthor>, PostPersistenceError>;

    /// Number of posts regardless of author.
    async fn count(&self) -> Result<i64, PostPersistenceError>;
}
