//! Driving port for reading posts.

use async_trait::async_trait;

use crate::domain::{Error, PostWithAuthor, UserId};

/// Domain use-case port for post listings. Results are newest first.
#[async_trait]
pub trait PostsQuery: Send + Sync {
    /// Every post with its author.
    async fn list_posts(&self) -> Result<Vec<PostWithAuthor>, Error>;

    /// Posts by one user.
    ///
    /// An empty result is reported as
    /// [`ErrorCode::NotFound`](crate::domain::ErrorCode::NotFound), whether or
    /// not the user exists.
    async fn list_user_posts(&self, user_id: UserId) -> Result<Vec<PostWithAuthor>, Error>;
}
