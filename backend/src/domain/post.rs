//! Blog post data model.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Email, UserId, Username};

/// Validation errors returned while building a [`NewPost`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostValidationError {
    /// One or more of `user_id`, `title` and `content` were absent or blank.
    #[error("User ID, title, and content are required.")]
    MissingFields {
        /// Names of the missing request fields, in request order.
        fields: Vec<&'static str>,
    },
}

/// Database-assigned post identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(i64);

impl PostId {
    /// Wrap a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw integer value as stored in the `Posts` table.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated input for publishing a post.
///
/// ## Invariants
/// - `title` and `content` are non-blank.
///
/// # Examples
/// ```
/// use blog_backend::domain::{NewPost, PostValidationError};
///
/// let err = NewPost::try_from_parts(Some(1), Some("Hello"), None).unwrap_err();
/// assert_eq!(err, PostValidationError::MissingFields { fields: vec!["content"] });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    user_id: UserId,
    title: String,
    content: String,
}

impl NewPost {
    /// Build from loosely typed request fields.
    pub fn try_from_parts(
        user_id: Option<i64>,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<Self, PostValidationError> {
        let title = title.filter(|value| !value.trim().is_empty());
        let content = content.filter(|value| !value.trim().is_empty());

        match (user_id, title, content) {
            (Some(user_id), Some(title), Some(content)) => Ok(Self {
                user_id: UserId::new(user_id),
                title: title.to_owned(),
                content: content.to_owned(),
            }),
            (user_id, title, content) => {
                let fields = [
                    ("user_id", user_id.is_none()),
                    ("title", title.is_none()),
                    ("content", content.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, missing)| missing.then_some(name))
                .collect();
                Err(PostValidationError::MissingFields { fields })
            }
        }
    }

    /// Author of the post.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Post title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Post body.
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Persisted post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Identifier assigned on insert.
    pub id: PostId,
    /// Author.
    pub user_id: UserId,
    /// Title.
    pub title: String,
    /// Body.
    pub content: String,
    /// Insertion time (UTC).
    pub created_at: NaiveDateTime,
    /// Last modification time (UTC); equal to `created_at` until edits exist.
    pub updated_at: NaiveDateTime,
}

/// Author columns joined onto a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Author identifier.
    pub user_id: UserId,
    /// Author username.
    pub username: Username,
    /// Author email, if any.
    pub email: Option<Email>,
}

/// A post together with its author, as shown in listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostWithAuthor {
    /// The post itself.
    pub post: Post,
    /// Its author.
    pub author: Author,
}
