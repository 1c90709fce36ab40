//! Transient status messages shown under the post form.
//!
//! A message is visible for [`MESSAGE_TTL`] after it is raised and then
//! hidden. Timing uses the tokio clock so tests can pause it.

use std::io::{self, Write};
use std::time::Duration;

use tokio::time::{Instant, sleep_until};

/// How long a message stays on screen.
pub const MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Clears the current terminal line and returns the cursor to column 0.
const CLEAR_LINE: &str = "\r\x1b[2K";

/// Whether the message reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// The action completed.
    Success,
    /// The action failed or was rejected.
    Error,
}

/// A message raised at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    text: String,
    kind: MessageKind,
    raised_at: Instant,
}

impl FormMessage {
    /// Raise a success message now.
    pub fn success(text: impl Into<String>) -> Self {
        Self::raise(text, MessageKind::Success)
    }

    /// Raise an error message now.
    pub fn error(text: impl Into<String>) -> Self {
        Self::raise(text, MessageKind::Error)
    }

    fn raise(text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            text: text.into(),
            kind,
            raised_at: Instant::now(),
        }
    }

    /// Message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Success or error.
    pub const fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Shorthand for `kind() == MessageKind::Success`.
    pub const fn is_success(&self) -> bool {
        matches!(self.kind, MessageKind::Success)
    }

    /// Instant at which the message disappears.
    pub fn expires_at(&self) -> Instant {
        self.raised_at + MESSAGE_TTL
    }

    /// Whether the message is still on screen.
    pub fn is_visible(&self) -> bool {
        Instant::now() < self.expires_at()
    }
}

/// Show `message` on the current line until it expires, then erase it.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub async fn flash<W: Write>(out: &mut W, message: &FormMessage) -> io::Result<()> {
    write!(out, "{}", message.text())?;
    out.flush()?;
    sleep_until(message.expires_at()).await;
    write!(out, "{CLEAR_LINE}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn message_hides_after_three_seconds() {
        let message = FormMessage::success("Post added successfully!");
        assert!(message.is_visible());

        tokio::time::advance(Duration::from_millis(2_999)).await;
        assert!(message.is_visible());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(!message.is_visible());
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn flash_writes_then_clears() {
        let message = FormMessage::error("Failed to add post. Please try again.");
        let started = Instant::now();
        let mut out = Vec::new();

        flash(&mut out, &message).await.expect("write to vec");

        assert_eq!(started.elapsed(), MESSAGE_TTL);
        let written = String::from_utf8(out).expect("utf-8");
        assert_eq!(
            written,
            format!("Failed to add post. Please try again.{CLEAR_LINE}")
        );
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn flash_of_stale_message_returns_immediately() {
        let message = FormMessage::success("done");
        tokio::time::advance(MESSAGE_TTL * 2).await;
        let before = Instant::now();

        flash(&mut Vec::<u8>::new(), &message).await.expect("write to vec");

        assert_eq!(before.elapsed(), Duration::ZERO);
    }

    #[rstest]
    fn kind_is_recorded() {
        assert!(FormMessage::success("ok").is_success());
        assert_eq!(FormMessage::error("no").kind(), MessageKind::Error);
    }
}
