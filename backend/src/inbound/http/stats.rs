//! Blog-wide counters.
//!
//! ```text
//! GET /api/stats/bloggers -> {"total_bloggers": 3}
//! GET /api/stats/posts    -> {"total_posts": 11}
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Response body for `GET /api/stats/bloggers`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TotalBloggersResponse {
    /// Count of distinct users.
    pub total_bloggers: i64,
}

/// Response body for `GET /api/stats/posts`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TotalPostsResponse {
    /// Count of all posts.
    pub total_posts: i64,
}

/// Number of registered bloggers.
#[utoipa::path(
    get,
    path = "/api/stats/bloggers",
    responses(
        (status = 200, description = "Distinct user count", body = TotalBloggersResponse),
        (status = 500, description = "Storage failure", body = Error)
    ),
    tags = ["stats"],
    operation_id = "totalBloggers"
)]
#[get("/stats/bloggers")]
pub async fn total_bloggers(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<TotalBloggersResponse>> {
    let total_bloggers = state.stats.total_bloggers().await?;
    Ok(web::Json(TotalBloggersResponse { total_bloggers }))
}

/// Number of posts.
#[utoipa::path(
    get,
    path = "/api/stats/posts",
    responses(
        (status = 200, description = "Post count", body = TotalPostsResponse),
        (status = 500, description = "Storage failure", body = Error)
    ),
    tags = ["stats"],
    operation_id = "totalPosts"
)]
#[get("/stats/posts")]
pub async fn total_posts(state: web::Data<HttpState>) -> ApiResult<web::Json<TotalPostsResponse>> {
    let total_posts = state.stats.total_posts().await?;
    Ok(web::Json(TotalPostsResponse { total_posts }))
}
