//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer; repositories convert them
//! into domain values.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::{posts, users};

/// Row read from `Users`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserRow {
    pub user_id: i64,
    pub username: String,
    pub email: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Insertable user; id and `created_at` come from column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: &'a str,
    pub email: Option<&'a str>,
}

/// Author columns selected alongside a post.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct AuthorRow {
    pub user_id: i64,
    pub username: String,
    pub email: Option<String>,
}

/// Row read from `Posts`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct PostRow {
    pub post_id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable post; id and timestamps come from column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = posts)]
pub(crate) struct NewPostRow<'a> {
    pub user_id: i64,
    pub title: &'a str,
    pub content: &'a str,
}
