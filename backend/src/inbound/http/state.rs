//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` so they depend only on
//! domain ports and stay testable without a database.

use std::sync::Arc;

use crate::domain::ports::{PostsCommand, PostsQuery, StatsQuery, UsersCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User registration.
    pub users: Arc<dyn UsersCommand>,
    /// Post publishing.
    pub posts: Arc<dyn PostsCommand>,
    /// Post listings.
    pub posts_query: Arc<dyn PostsQuery>,
    /// Blog-wide counters.
    pub stats: Arc<dyn StatsQuery>,
}

impl HttpState {
    /// Bundle the driving ports.
    pub fn new(
        users: Arc<dyn UsersCommand>,
        posts: Arc<dyn PostsCommand>,
        posts_query: Arc<dyn PostsQuery>,
        stats: Arc<dyn StatsQuery>,
    ) -> Self {
        Self {
            users,
            posts,
            posts_query,
            stats,
        }
    }

    /// Use one implementation for every port.
    ///
    /// Handy for in-memory test doubles that implement all four traits.
    pub fn from_shared<T>(ports: Arc<T>) -> Self
    where
        T: UsersCommand + PostsCommand + PostsQuery + StatsQuery + 'static,
    {
        Self {
            users: ports.clone(),
            posts: ports.clone(),
            posts_query: ports.clone(),
            stats: ports,
        }
    }
}
