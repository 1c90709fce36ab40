//! Errors raised while talking to the blog API.

use reqwest::StatusCode;
use serde::Deserialize;

/// Failure of a single API call.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, timeout).
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("server responded with {status}: {message}")]
    Status {
        /// HTTP status returned by the server.
        status: StatusCode,
        /// `message` from the error payload, or the raw body.
        message: String,
    },
    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(#[source] serde_json::Error),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl ClientError {
    /// Build a [`ClientError::Status`] from a failed response body.
    ///
    /// The API reports failures as `{"message": ...}`; anything else is kept
    /// verbatim, falling back to the status reason when the body is empty.
    pub fn status(status: StatusCode, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body).map_or_else(
            |_| {
                let raw = String::from_utf8_lossy(body).trim().to_owned();
                if raw.is_empty() {
                    status.canonical_reason().unwrap_or("unknown").to_owned()
                } else {
                    raw
                }
            },
            |parsed| parsed.message,
        );
        Self::Status { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(br#"{"message":"User with ID 9 not found.","code":"not_found"}"#.as_slice(), "User with ID 9 not found.")]
    #[case(b"upstream exploded".as_slice(), "upstream exploded")]
    #[case(b"".as_slice(), "Not Found")]
    fn status_message_prefers_payload(#[case] body: &[u8], #[case] expected: &str) {
        let err = ClientError::status(StatusCode::NOT_FOUND, body);
        let ClientError::Status { status, message } = err else {
            panic!("expected status error");
        };
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(message, expected);
    }
}
