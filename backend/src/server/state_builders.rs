//! Wire Diesel repositories into the domain services behind [`HttpState`].

use std::sync::Arc;

use crate::domain::{PostService, StatsService, UserService};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{DbPool, DieselPostRepository, DieselUserRepository};

/// Build handler state backed by the SQLite pool.
pub fn build_http_state(pool: &DbPool) -> HttpState {
    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    let posts = Arc::new(DieselPostRepository::new(pool.clone()));

    let post_service = Arc::new(PostService::new(posts.clone(), users.clone()));
    HttpState::new(
        Arc::new(UserService::new(users.clone())),
        post_service.clone(),
        post_service,
        Arc::new(StatsService::new(users, posts)),
    )
}
