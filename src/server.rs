//! HTTP server initialization and runtime setup.
//!
//! Handles database connection, migrations, GeoIP setup, and the Axum server
//! lifecycle.

use crate::config::Config;
use crate::infrastructure::geoip::{CountryResolver, MaxMindResolver};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (creating the database file if needed)
/// - Schema migrations
/// - Optional GeoIP resolver
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    ensure_store_directory(&config.database_url)?;

    let options = SqliteConnectOptions::from_str(&config.database_url)
        .context("Invalid DATABASE_URL")?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let resolver: Option<Arc<dyn CountryResolver>> = match &config.geoip_db {
        Some(path) => match MaxMindResolver::open(path) {
            Ok(resolver) => {
                tracing::info!("GeoIP resolver enabled ({path})");
                Some(Arc::new(resolver))
            }
            Err(e) => {
                tracing::warn!("Failed to open GeoIP database: {e}. Continuing without country resolution.");
                None
            }
        },
        None => None,
    };

    let listen_addr = config.listen_addr.clone();
    let state = AppState::build(pool, Arc::new(config), resolver);

    let app = app_router(state);

    let addr: SocketAddr = listen_addr.parse().context("Invalid LISTEN address")?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}

/// Creates the parent directory for a file-backed store.
///
/// In-memory databases and bare filenames need no directory setup.
fn ensure_store_directory(database_url: &str) -> Result<()> {
    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");

    if path.is_empty() || path.starts_with(':') {
        return Ok(());
    }

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create store directory {}", parent.display()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_store_directory_ignores_memory_urls() {
        assert!(ensure_store_directory("sqlite::memory:").is_ok());
        assert!(ensure_store_directory("sqlite://:memory:").is_ok());
    }

    #[test]
    fn test_ensure_store_directory_ignores_bare_filenames() {
        assert!(ensure_store_directory("sqlite://urls.db").is_ok());
    }
}
