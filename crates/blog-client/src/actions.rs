//! The two user actions: load the feed and submit the form.

use std::fmt::Display;
use std::io::{self, Write};

use chrono::TimeZone;
use tracing::{error, info};

use crate::api::BlogApi;
use crate::form::PostDraft;
use crate::message::FormMessage;
use crate::render::{LOAD_FAILED_MESSAGE, LOADING_MESSAGE, render_feed};

/// Confirmation after a post is accepted.
pub const POST_ADDED_MESSAGE: &str = "Post added successfully!";
/// Shown when a submission fails for any network or HTTP reason.
pub const POST_FAILED_MESSAGE: &str = "Failed to add post. Please try again.";

/// Fetch and render the feed. Returns whether the fetch succeeded.
///
/// A failed fetch is logged and replaced by [`LOAD_FAILED_MESSAGE`].
///
/// # Errors
///
/// Only write failures on `out`.
pub async fn show_feed<W, Tz>(api: &BlogApi, out: &mut W, tz: &Tz) -> io::Result<bool>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    writeln!(out, "{LOADING_MESSAGE}")?;
    match api.list_posts().await {
        Ok(posts) => {
            render_feed(out, &posts, tz)?;
            Ok(true)
        }
        Err(err) => {
            error!(error = %err, "failed to load posts");
            writeln!(out, "{LOAD_FAILED_MESSAGE}")?;
            Ok(false)
        }
    }
}

/// Validate the form and publish it as `user_id`.
///
/// Blank fields are rejected locally without a request. Every failure is
/// reported through the returned message; nothing is retried.
pub async fn submit_post(api: &BlogApi, user_id: i64, title: &str, content: &str) -> FormMessage {
    let draft = match PostDraft::new(title, content) {
        Ok(draft) => draft,
        Err(err) => return FormMessage::error(err.to_string()),
    };
    match api.create_post(user_id, &draft).await {
        Ok(created) => {
            info!(post_id = created.post_id, user_id, "post added");
            FormMessage::success(POST_ADDED_MESSAGE)
        }
        Err(err) => {
            error!(error = %err, user_id, "failed to add post");
            FormMessage::error(POST_FAILED_MESSAGE)
        }
    }
}
