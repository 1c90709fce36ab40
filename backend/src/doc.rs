//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects the blog routes, health probes and the schemas they
//! reference. Swagger UI serves it in debug builds; `openapi-dump` prints it
//! for external tooling.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::posts::{
    CreatePostRequest, CreatePostResponse, FeedPostResponse, UserPostResponse,
};
use crate::inbound::http::stats::{TotalBloggersResponse, TotalPostsResponse};
use crate::inbound::http::users::{CreateUserRequest, CreateUserResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog backend API",
        description = "Users, posts and blog statistics over JSON, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::posts::create_post,
        crate::inbound::http::posts::list_posts,
        crate::inbound::http::posts::list_user_posts,
        crate::inbound::http::stats::total_bloggers,
        crate::inbound::http::stats::total_posts,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        CreateUserRequest,
        CreateUserResponse,
        CreatePostRequest,
        CreatePostResponse,
        FeedPostResponse,
        UserPostResponse,
        TotalBloggersResponse,
        TotalPostsResponse,
    )),
    tags(
        (name = "users", description = "Blogger registration"),
        (name = "posts", description = "Publishing and reading posts"),
        (name = "stats", description = "Blog-wide counters"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
