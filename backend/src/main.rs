//! Backend entry-point: loads settings, prepares the SQLite database and
//! serves the blog API.

use std::io;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use blog_backend::inbound::http::health::HealthState;
use blog_backend::outbound::persistence::{DbPool, PoolConfig, ensure_database_dir, ensure_schema};
use blog_backend::server::{ServerConfig, create_server};
use blog_backend::settings::BlogSettings;
use ortho_config::OrthoConfig;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = BlogSettings::load_from_iter(std::env::args_os())
        .map_err(|err| io::Error::other(format!("failed to load settings: {err}")))?;

    let database_path = settings.database_path();
    ensure_database_dir(database_path).map_err(io::Error::other)?;
    let pool_config = PoolConfig::new(database_path.to_string_lossy().into_owned())
        .with_max_size(settings.pool_max_size());
    let pool = DbPool::new(pool_config).await.map_err(io::Error::other)?;
    ensure_schema(&pool).await.map_err(io::Error::other)?;
    info!(path = %database_path.display(), "connected to SQLite database");

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::from_settings(&settings, pool);
    let (host, port) = config.bind_addr();
    info!(%host, port, "server listening");
    let server = create_server(health_state, config)?;
    server.await
}
