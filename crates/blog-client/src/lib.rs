//! Terminal client for the blog API.
//!
//! Mirrors the browser page: a feed of post cards and a form that publishes
//! a post, with transient success and failure messages.

pub mod actions;
pub mod api;
pub mod error;
pub mod form;
pub mod message;
pub mod render;

pub use api::{BlogApi, CreatedPost, DEFAULT_API_BASE, FeedPost};
pub use error::ClientError;
