//! Driving port for publishing posts.

use async_trait::async_trait;

use crate::domain::{Error, NewPost, Post};

/// Domain use-case port for creating posts.
#[async_trait]
pub trait PostsCommand: Send + Sync {
    /// Publish a post for an existing user.
    ///
    /// Fails with [`ErrorCode::NotFound`](crate::domain::ErrorCode::NotFound)
    /// when the author does not exist.
    async fn create_post(&self, post: NewPost) -> Result<Post, Error>;
}
