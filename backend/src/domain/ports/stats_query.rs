//! Driving port for blog-wide counters.

use async_trait::async_trait;

use crate::domain::Error;

/// Domain use-case port for aggregate statistics.
#[async_trait]
pub trait StatsQuery: Send + Sync {
    /// Count of distinct registered users.
    async fn total_bloggers(&self) -> Result<i64, Error>;

    /// Count of all posts.
    async fn total_posts(&self) -> Result<i64, Error>;
}
