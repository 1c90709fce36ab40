//! SQLite-backed `PostRepository` implementation using Diesel ORM.
//!
//! Listings join `Posts` with `Users` and order newest first, breaking
//! timestamp ties (second resolution) by the higher post id.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PostPersistenceError, PostRepository};
use crate::domain::{Author, Email, NewPost, Post, PostId, PostWithAuthor, UserId, Username};

use super::diesel_error_mapping::{StorageFailure, classify_diesel_error, classify_pool_error};
use super::models::{AuthorRow, NewPostRow, PostRow};
use super::pool::DbPool;
use super::schema::{posts, users};

/// Diesel-backed implementation of the `PostRepository` port.
#[derive(Clone)]
pub struct DieselPostRepository {
    pool: DbPool,
}

impl DieselPostRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_failure(failure: StorageFailure, user_id: Option<i64>) -> PostPersistenceError {
    match (failure, user_id) {
        (StorageFailure::Connection(message), _) => PostPersistenceError::connection(message),
        (StorageFailure::ForeignKeyViolation(_), Some(user_id)) => {
            PostPersistenceError::missing_author(user_id)
        }
        (
            StorageFailure::ForeignKeyViolation(message)
            | StorageFailure::UniqueViolation(message)
            | StorageFailure::Query(message),
            _,
        ) => PostPersistenceError::query(message),
    }
}

fn map_diesel_error(error: diesel::result::Error) -> PostPersistenceError {
    map_failure(classify_diesel_error(error), None)
}

fn row_to_post(row: PostRow) -> Post {
    Post {
        id: PostId::new(row.post_id),
        user_id: UserId::new(row.user_id),
        title: row.title,
        content: row.content,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

fn rows_to_entry((post, author): (PostRow, AuthorRow)) -> Result<PostWithAuthor, PostPersistenceError> {
    let username = Username::new(author.username)
        .map_err(|err| PostPersistenceError::query(format!("user {}: {err}", author.user_id)))?;
    Ok(PostWithAuthor {
        post: row_to_post(post),
        author: Author {
            user_id: UserId::new(author.user_id),
            username,
            email: Email::parse_optional(author.email.as_deref()),
        },
    })
}

#[async_trait]
impl PostRepository for DieselPostRepository {
    async fn create(&self, post: &NewPost) -> Result<Post, PostPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_failure(classify_pool_error(err), None))?;

        let user_id = post.user_id().get();
        let new_row = NewPostRow {
            user_id,
            title: post.title(),
            content: post.content(),
        };

        let row: PostRow = diesel::insert_into(posts::table)
            .values(&new_row)
            .returning(PostRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_failure(classify_diesel_error(err), Some(user_id)))?;

        Ok(row_to_post(row))
    }

    async fn list_with_authors(&self) -> Result<Vec<PostWithAuthor>, PostPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_failure(classify_pool_error(err), None))?;

        let rows: Vec<(PostRow, AuthorRow)> = posts::table
            .inner_join(users::table)
            .select((PostRow::as_select(), AuthorRow::as_select()))
            .order((posts::created_at.desc(), posts::post_id.desc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(rows_to_entry).collect()
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<PostWithAuthor>, PostPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_failure(classify_pool_error(err), None))?;

        let rows: Vec<(PostRow, AuthorRow)> = posts::table
            .inner_join(users::table)
            .filter(posts::user_id.eq(user_id.get()))
            .select((PostRow::as_select(), AuthorRow::as_select()))
            .order((posts::created_at.desc(), posts::post_id.desc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(rows_to_entry).collect()
    }

    async fn count(&self) -> Result<i64, PostPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_failure(classify_pool_error(err), None))?;

        posts::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}
