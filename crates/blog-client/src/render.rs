//! Plain-text rendering of the post feed.

use std::fmt::Display;
use std::io::{self, Write};

use chrono::{NaiveDateTime, TimeZone};

use crate::api::FeedPost;

/// Shown while the feed request is in flight.
pub const LOADING_MESSAGE: &str = "Loading posts...";
/// Shown when the feed is empty.
pub const EMPTY_FEED_MESSAGE: &str = "No posts found yet. Be the first to create one!";
/// Shown when the feed could not be fetched.
pub const LOAD_FAILED_MESSAGE: &str =
    "Failed to load posts. Please ensure the backend server is running.";

/// `Posted on: 1/2/2024 at 3:04:05 PM`, with `created_at` (UTC) shown in `tz`.
///
/// # Examples
/// ```
/// use blog_client::render::format_posted_on;
/// use chrono::{NaiveDate, Utc};
///
/// let at = NaiveDate::from_ymd_opt(2024, 1, 2)
///     .and_then(|d| d.and_hms_opt(15, 4, 5))
///     .expect("valid timestamp");
/// assert_eq!(format_posted_on(&at, &Utc), "Posted on: 1/2/2024 at 3:04:05 PM");
/// ```
pub fn format_posted_on<Tz>(created_at: &NaiveDateTime, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let local = tz.from_utc_datetime(created_at);
    format!(
        "Posted on: {} at {}",
        local.format("%-m/%-d/%Y"),
        local.format("%-I:%M:%S %p")
    )
}

/// Write one post card: title, content, then the posting time.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_post<W, Tz>(out: &mut W, post: &FeedPost, tz: &Tz) -> io::Result<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    writeln!(out, "{}", post.title)?;
    writeln!(out, "{}", post.content)?;
    writeln!(out, "{}", format_posted_on(&post.created_at, tz))?;
    writeln!(out)
}

/// Write every post in order, or [`EMPTY_FEED_MESSAGE`] when there are none.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_feed<W, Tz>(out: &mut W, posts: &[FeedPost], tz: &Tz) -> io::Result<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if posts.is_empty() {
        return writeln!(out, "{EMPTY_FEED_MESSAGE}");
    }
    posts
        .iter()
        .try_for_each(|post| render_post(&mut *out, post, tz))
}
