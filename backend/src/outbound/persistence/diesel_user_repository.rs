//! SQLite-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::dsl::{count_distinct, exists};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Email, NewUser, User, UserId, Username};

use super::diesel_error_mapping::{StorageFailure, classify_diesel_error, classify_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_failure(failure: StorageFailure) -> UserPersistenceError {
    match failure {
        StorageFailure::Connection(message) => UserPersistenceError::connection(message),
        StorageFailure::UniqueViolation(message) => UserPersistenceError::conflict(message),
        StorageFailure::ForeignKeyViolation(message) | StorageFailure::Query(message) => {
            UserPersistenceError::query(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_failure(classify_diesel_error(error))
}

/// Convert a stored row into a domain user.
fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let username = Username::new(row.username)
        .map_err(|err| UserPersistenceError::query(format!("user {}: {err}", row.user_id)))?;
    Ok(User::new(
        UserId::new(row.user_id),
        username,
        Email::parse_optional(row.email.as_deref()),
        row.created_at,
    ))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_failure(classify_pool_error(err)))?;

        let new_row = NewUserRow {
            username: user.username().as_ref(),
            email: user.email().map(AsRef::as_ref),
        };

        let row: UserRow = diesel::insert_into(users::table)
            .values(&new_row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_user(row)
    }

    async fn exists(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_failure(classify_pool_error(err)))?;

        diesel::select(exists(users::table.filter(users::user_id.eq(id.get()))))
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_failure(classify_pool_error(err)))?;

        let removed = diesel::delete(users::table.filter(users::user_id.eq(id.get())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }

    async fn count(&self) -> Result<i64, UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_failure(classify_pool_error(err)))?;

        users::table
            .select(count_distinct(users::user_id))
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}
