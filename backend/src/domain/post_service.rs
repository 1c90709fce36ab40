//! Post publishing and listing service.
//!
//! Implements [`PostsCommand`] and [`PostsQuery`] over the post and user
//! repositories. Publishing checks that the author exists before inserting;
//! a foreign-key rejection from a concurrent delete is reported the same way.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{PostRepository, PostsCommand, PostsQuery, UserRepository};
use crate::domain::service_support::{
    map_post_persistence_error, map_user_persistence_error, unknown_user_message,
};
use crate::domain::{Error, NewPost, Post, PostWithAuthor, UserId};

/// Message returned when a user's post listing comes back empty.
pub fn no_posts_message(user_id: impl std::fmt::Display) -> String {
    format!("No posts found for user ID {user_id}, or user does not exist.")
}

/// Publishes and lists posts.
#[derive(Clone)]
pub struct PostService<P, U> {
    posts: Arc<P>,
    users: Arc<U>,
}

impl<P, U> PostService<P, U> {
    /// Create a service over the given repositories.
    pub fn new(posts: Arc<P>, users: Arc<U>) -> Self {
        Self { posts, users }
    }
}

#[async_trait]
impl<P, U> PostsCommand for PostService<P, U>
where
    P: PostRepository,
    U: UserRepository,
{
    async fn create_post(&self, post: NewPost) -> Result<Post, Error> {
        let author = post.user_id();
        let exists = self
            .users
            .exists(author)
            .await
            .map_err(map_user_persistence_error)?;
        if !exists {
            debug!(user_id = %author, "rejecting post for unknown author");
            return Err(Error::not_found(unknown_user_message(author)));
        }

        let created = self
            .posts
            .create(&post)
            .await
            .map_err(map_post_persistence_error)?;
        info!(post_id = %created.id, user_id = %created.user_id, "post created");
        Ok(created)
    }
}

#[async_trait]
impl<P, U> PostsQuery for PostService<P, U>
where
    P: PostRepository,
    U: UserRepository,
{
    async fn list_posts(&self) -> Result<Vec<PostWithAuthor>, Error> {
        self.posts
            .list_with_authors()
            .await
            .map_err(map_post_persistence_error)
    }

    async fn list_user_posts(&self, user_id: UserId) -> Result<Vec<PostWithAuthor>, Error> {
        let posts = self
            .posts
            .list_for_user(user_id)
            .await
            .map_err(map_post_persistence_error)?;
        if posts.is_empty() {
            return Err(Error::not_found(no_posts_message(user_id)));
        }
        Ok(posts)
    }
}
