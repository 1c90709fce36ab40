//! Idempotent schema creation run at startup.

use std::io;
use std::path::Path;

use diesel_async::SimpleAsyncConnection;
use tracing::info;

use super::pool::{DbPool, PoolError};

/// DDL for the blog tables. Safe to run against an existing database.
pub const SCHEMA_SQL: &str = "\
CREATE TABLE IF NOT EXISTS Users (
    user_id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    email TEXT UNIQUE,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);
CREATE TABLE IF NOT EXISTS Posts (
    post_id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (user_id) REFERENCES Users(user_id) ON DELETE CASCADE
);";

/// Failures while preparing the database.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// The database directory could not be created.
    #[error("failed to create database directory {path}: {source}")]
    Directory {
        path: String,
        #[source]
        source: io::Error,
    },
    /// No connection could be opened.
    #[error(transparent)]
    Pool(#[from] PoolError),
    /// The DDL failed.
    #[error("failed to create schema: {message}")]
    Schema { message: String },
}

/// Create the parent directory of `database_path` when missing.
pub fn ensure_database_dir(database_path: &Path) -> Result<(), BootstrapError> {
    let Some(parent) = database_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    else {
        return Ok(());
    };
    std::fs::create_dir_all(parent).map_err(|source| BootstrapError::Directory {
        path: parent.display().to_string(),
        source,
    })
}

/// Ensure the `Users` and `Posts` tables exist.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), BootstrapError> {
    let mut conn = pool.get().await?;
    conn.batch_execute(SCHEMA_SQL)
        .await
        .map_err(|err| BootstrapError::Schema {
            message: err.to_string(),
        })?;
    info!("database schema ready");
    Ok(())
}
