//! Reqwest-backed access to the blog API.
//!
//! Only the two calls the client needs are wrapped: reading the feed and
//! publishing a post. Transport details stay here; callers see decoded
//! records or a [`ClientError`].

use std::time::Duration;

use chrono::NaiveDateTime;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ClientError;
use crate::form::PostDraft;

/// Base URL used when none is given on the command line.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// One entry of `GET /posts`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedPost {
    /// Post identifier.
    pub post_id: i64,
    /// Title.
    pub title: String,
    /// Body.
    pub content: String,
    /// Creation time as stored by the server (UTC).
    pub created_at: NaiveDateTime,
    /// Author name, when the server includes it.
    #[serde(default)]
    pub username: Option<String>,
}

/// Acknowledgement returned by `POST /posts`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedPost {
    /// Server confirmation text.
    pub message: String,
    /// Identifier assigned to the new post.
    pub post_id: i64,
}

#[derive(Serialize)]
struct CreatePostBody<'a> {
    user_id: i64,
    title: &'a str,
    content: &'a str,
}

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct BlogApi {
    client: Client,
    base: Url,
}

impl BlogApi {
    /// Build a client for `base`, e.g. `http://localhost:5000/api`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when the reqwest client cannot be
    /// constructed.
    pub fn new(base: Url) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ClientError::Transport)?;
        Ok(Self { client, base })
    }

    /// Base URL every request is issued against.
    pub const fn base(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base.as_str().trim_end_matches('/'))
    }

    /// Fetch every post, newest first.
    ///
    /// # Errors
    ///
    /// Transport, non-success status and decode failures.
    pub async fn list_posts(&self) -> Result<Vec<FeedPost>, ClientError> {
        let url = self.endpoint("posts");
        debug!(%url, "fetching posts");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        decode(response).await
    }

    /// Publish `draft` as `user_id`.
    ///
    /// # Errors
    ///
    /// Transport, non-success status and decode failures.
    pub async fn create_post(
        &self,
        user_id: i64,
        draft: &PostDraft,
    ) -> Result<CreatedPost, ClientError> {
        let url = self.endpoint("posts");
        debug!(%url, user_id, "creating post");
        let body = CreatePostBody {
            user_id,
            title: draft.title(),
            content: draft.content(),
        };
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.bytes().await.map_err(ClientError::Transport)?;
    if !status.is_success() {
        return Err(ClientError::status(status, body.as_ref()));
    }
    serde_json::from_slice(body.as_ref()).map_err(ClientError::Decode)
}
