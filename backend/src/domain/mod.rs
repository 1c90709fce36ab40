//! Domain primitives, ports and services.
//!
//! Purpose: define the blog's typed entities (users and posts), the ports the
//! adapters implement, and the services that sit between them. Adapters never
//! see persistence errors directly; services translate them into [`Error`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - TraceId: per-request correlation identifier.
//! - User, NewUser, Post, NewPost, PostWithAuthor: blog entities.
//! - UserService, PostService, StatsService: use-case implementations.

pub mod error;
pub mod ports;
pub mod post;
mod post_service;
mod service_support;
mod stats_service;
pub mod trace_id;
pub mod user;
mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::post::{Author, NewPost, Post, PostId, PostValidationError, PostWithAuthor};
pub use self::post_service::{PostService, no_posts_message};
pub use self::service_support::{DUPLICATE_USER_MESSAGE, unknown_user_message};
pub use self::stats_service::StatsService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{Email, NewUser, User, UserId, UserValidationError, Username};
pub use self::user_service::UserService;

/// Convenient result alias for use cases and handlers.
///
/// # Examples
/// ```
/// use blog_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("User with ID 1 not found."))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
