//! SQLite persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports, backed by a
//! single SQLite file through `diesel-async` and `bb8` pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Typed errors**: Diesel and pool failures are classified and mapped to
//!   the port error enums; query failures keep the raw SQLite message.
//!
//! # Example
//!
//! ```ignore
//! use blog_backend::outbound::persistence::{DbPool, PoolConfig, DieselUserRepository};
//!
//! let pool = DbPool::new(PoolConfig::new("data/blog.db")).await?;
//! ensure_schema(&pool).await?;
//! let users = DieselUserRepository::new(pool);
//! ```

mod bootstrap;
mod diesel_error_mapping;
mod diesel_post_repository;
mod diesel_user_repository;
mod models;
mod pool;
pub(crate) mod schema;

pub use bootstrap::{BootstrapError, SCHEMA_SQL, ensure_database_dir, ensure_schema};
pub use diesel_post_repository::DieselPostRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{AsyncSqliteConnection, BUSY_TIMEOUT_MS, DbPool, PoolConfig, PoolError};
