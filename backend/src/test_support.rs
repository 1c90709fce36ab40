//! Test utilities shared by unit tests and the integration suites in
//! `tests/`. Compiled for tests and behind the `test-support` feature.

use std::error::Error as StdError;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tempfile::TempDir;

use crate::domain::PostId;
use crate::outbound::persistence::schema::posts;
use crate::outbound::persistence::{BootstrapError, DbPool, PoolConfig, ensure_schema};

/// A freshly bootstrapped SQLite database in a temporary directory.
///
/// The directory, and with it the database file, is removed on drop.
///
/// # Examples
/// ```no_run
/// use blog_backend::test_support::TempDatabase;
///
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let db = TempDatabase::new().await?;
/// let _pool = db.pool();
/// # Ok(())
/// # }
/// ```
pub struct TempDatabase {
    _dir: TempDir,
    pool: DbPool,
}

impl TempDatabase {
    /// Create the database file and both tables.
    ///
    /// # Errors
    /// Fails when the temporary directory, pool or schema cannot be created.
    pub async fn new() -> Result<Self, BootstrapError> {
        let dir = tempfile::tempdir().map_err(|source| BootstrapError::Directory {
            path: std::env::temp_dir().display().to_string(),
            source,
        })?;
        let path = dir.path().join("blog.db");
        let pool = DbPool::new(PoolConfig::new(path.to_string_lossy().into_owned())).await?;
        ensure_schema(&pool).await?;
        Ok(Self { _dir: dir, pool })
    }

    /// Pool over the temporary database.
    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    /// Overwrite a post's `created_at` so ordering tests need not sleep.
    ///
    /// # Errors
    /// Fails when no connection is available or no row matches `post_id`.
    pub async fn set_post_created_at(
        &self,
        post_id: PostId,
        created_at: NaiveDateTime,
    ) -> Result<(), Box<dyn StdError + Send + Sync>> {
        let mut conn = self.pool.get().await?;
        let updated = diesel::update(posts::table.find(post_id.get()))
            .set(posts::created_at.eq(created_at))
            .execute(&mut conn)
            .await?;
        if updated == 0 {
            return Err(format!("post {post_id} not found").into());
        }
        Ok(())
    }
}
