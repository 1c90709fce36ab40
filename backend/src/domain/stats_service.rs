//! Blog-wide counters.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::ports::{PostRepository, StatsQuery, UserRepository};
use crate::domain::service_support::{map_post_persistence_error, map_user_persistence_error};

/// Reads aggregate counts from the repositories.
#[derive(Clone)]
pub struct StatsService<U, P> {
    users: Arc<U>,
    posts: Arc<P>,
}

impl<U, P> StatsService<U, P> {
    /// Create a service over the given repositories.
    pub fn new(users: Arc<U>, posts: Arc<P>) -> Self {
        Self { users, posts }
    }
}

#[async_trait]
impl<U, P> StatsQuery for StatsService<U, P>
where
    U: UserRepository,
    P: PostRepository,
{
    async fn total_bloggers(&self) -> Result<i64, Error> {
        self.users.count().await.map_err(map_user_persistence_error)
    }

    async fn total_posts(&self) -> Result<i64, Error> {
        self.posts.count().await.map_err(map_post_persistence_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{MockPostRepository, MockUserRepository, PostPersistenceError};

    #[tokio::test]
    async fn counts_come_from_each_repository() {
        let mut users = MockUserRepository::new();
        users.expect_count().returning(|| Ok(3));
        let mut posts = MockPostRepository::new();
        posts.expect_count().returning(|| Ok(11));

        let service = StatsService::new(Arc::new(users), Arc::new(posts));
        assert_eq!(service.total_bloggers().await.expect("bloggers"), 3);
        assert_eq!(service.total_posts().await.expect("posts"), 11);
    }

    #[tokio::test]
    async fn post_count_connection_failure_is_internal() {
        let mut posts = MockPostRepository::new();
        posts
            .expect_count()
            .returning(|| Err(PostPersistenceError::connection("pool timed out")));

        let service = StatsService::new(Arc::new(MockUserRepository::new()), Arc::new(posts));
        let error = service.total_posts().await.expect_err("offline");
        assert_eq!(error.code(), ErrorCode::InternalError);
        assert_eq!(error.message(), "pool timed out");
    }
}
