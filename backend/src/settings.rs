//! Server configuration loaded via OrthoConfig.
//!
//! Values layer CLI flags over `BLOG_*` environment variables over an
//! optional config file; anything unset falls back to the defaults below.

use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5000;
/// Default bind address (all interfaces).
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";
/// Default SQLite database file.
pub const DEFAULT_DATABASE_PATH: &str = "data/blog.db";
/// Default number of pooled connections.
pub const DEFAULT_POOL_MAX_SIZE: u32 = 4;

/// Blog server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BLOG")]
pub struct BlogSettings {
    /// TCP port to listen on.
    #[ortho_config(default = 5000)]
    pub port: u16,
    /// Host or address to bind.
    pub bind_host: Option<String>,
    /// SQLite database file; its directory is created when missing.
    pub database_path: Option<PathBuf>,
    /// Maximum pooled connections.
    pub pool_max_size: Option<u32>,
}

impl BlogSettings {
    /// Configured port; [`DEFAULT_PORT`] unless overridden.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Configured bind host, falling back to [`DEFAULT_BIND_HOST`].
    pub fn bind_host(&self) -> &str {
        self.bind_host.as_deref().unwrap_or(DEFAULT_BIND_HOST)
    }

    /// Configured database path, falling back to [`DEFAULT_DATABASE_PATH`].
    pub fn database_path(&self) -> &Path {
        self.database_path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_DATABASE_PATH))
    }

    /// Configured pool size, falling back to [`DEFAULT_POOL_MAX_SIZE`].
    /// Zero is treated as unset.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }
}
