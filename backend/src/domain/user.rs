//! Blog user (blogger) data model.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Validation errors returned while building a [`NewUser`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The username was absent, empty or whitespace.
    #[error("Username is required")]
    MissingUsername,
}

/// Database-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw integer value as stored in the `Users` table.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Unique, non-blank username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(UserValidationError::MissingUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Optional contact address; unique across users when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Build an email from raw input, treating blank input as absent.
    pub fn parse_optional(raw: Option<&str>) -> Option<Self> {
        raw.filter(|value| !value.trim().is_empty())
            .map(|value| Self(value.to_owned()))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

/// Validated input for registering a user.
///
/// # Examples
/// ```
/// use blog_backend::domain::NewUser;
///
/// let user = NewUser::try_from_parts(Some("ada"), Some("  ")).expect("valid user");
/// assert_eq!(user.username().as_ref(), "ada");
/// assert!(user.email().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    username: Username,
    email: Option<Email>,
}

impl NewUser {
    /// Build from loosely typed request fields.
    pub fn try_from_parts(
        username: Option<&str>,
        email: Option<&str>,
    ) -> Result<Self, UserValidationError> {
        let username = Username::new(username.unwrap_or_default())?;
        Ok(Self {
            username,
            email: Email::parse_optional(email),
        })
    }

    /// Requested username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Requested email, if any.
    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }
}

/// Persisted user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    email: Option<Email>,
    created_at: NaiveDateTime,
}

impl User {
    /// Assemble a user from stored values.
    pub fn new(
        id: UserId,
        username: Username,
        email: Option<Email>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            username,
            email,
            created_at,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Unique username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Email address, if one was given.
    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    /// Insertion time (UTC).
    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }
}
