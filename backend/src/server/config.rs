//! HTTP server configuration object.

use crate::outbound::persistence::DbPool;
use crate::settings::BlogSettings;

/// Everything [`super::create_server`] needs to start listening.
#[derive(Clone)]
pub struct ServerConfig {
    pub(crate) bind_host: String,
    pub(crate) port: u16,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Construct a configuration binding `bind_host:port` over `db_pool`.
    #[must_use]
    pub fn new(bind_host: impl Into<String>, port: u16, db_pool: DbPool) -> Self {
        Self {
            bind_host: bind_host.into(),
            port,
            db_pool,
        }
    }

    /// Take the bind address from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &BlogSettings, db_pool: DbPool) -> Self {
        Self::new(settings.bind_host(), settings.port(), db_pool)
    }

    /// Host and port the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.bind_host.as_str(), self.port)
    }
}
