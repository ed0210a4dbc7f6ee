//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. There are no ambient globals: the resulting [`Config`] is passed
//! into the components that need it.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite location (default: `sqlite://data/urls.db`)
//! - `BASE_URL` - Base URL used when building short links; when unset the
//!   request `Host` header is used instead
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `DEFAULT_VALIDITY_MINUTES` - Link validity when the client omits one
//!   (default: 30)
//! - `GEOIP_DB` - Path to a MaxMind MMDB file; enables country resolution
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Connection pool size (default: 5)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Base URL override for generated short links. When `None`, short links
    /// are built from the request's `Host` header.
    pub base_url: Option<String>,
    pub listen_addr: String,
    /// Validity in minutes applied when a create request omits `validity`.
    pub default_validity_minutes: i64,
    /// Path to a MaxMind MMDB database. Country resolution is disabled when
    /// unset.
    pub geoip_db: Option<String>,
    pub log_level: String,
    pub log_format: String,
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`).
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/urls.db".to_string());

        let base_url = env::var("BASE_URL").ok().filter(|v| !v.is_empty());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let default_validity_minutes = env::var("DEFAULT_VALIDITY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let geoip_db = env::var("GEOIP_DB").ok().filter(|v| !v.is_empty());

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Self {
            database_url,
            base_url,
            listen_addr,
            default_validity_minutes,
            geoip_db,
            log_level,
            log_format,
            db_max_connections,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_url` is not a SQLite URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `db_max_connections` is zero
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);

        match &self.base_url {
            Some(base) => tracing::info!("  Base URL: {}", base),
            None => tracing::info!("  Base URL: derived from Host header"),
        }

        tracing::info!("  Default validity: {} minutes", self.default_validity_minutes);

        match &self.geoip_db {
            Some(path) => tracing::info!("  GeoIP database: {}", path),
            None => tracing::info!("  GeoIP: disabled"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            database_url: "sqlite://data/urls.db".to_string(),
            base_url: None,
            listen_addr: "0.0.0.0:3000".to_string(),
            default_validity_minutes: 30,
            geoip_db: None,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            db_max_connections: 5,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        config.database_url = "postgres://localhost/test".to_string();
        assert!(config.validate().is_err());
        config.database_url = "sqlite::memory:".to_string();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "127.0.0.1:3000".to_string();
        assert!(config.validate().is_ok());

        config.db_max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("BASE_URL");
            env::remove_var("LISTEN");
            env::remove_var("DEFAULT_VALIDITY_MINUTES");
            env::remove_var("GEOIP_DB");
        }

        let config = Config::from_env();

        assert_eq!(config.database_url, "sqlite://data/urls.db");
        assert!(config.base_url.is_none());
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.default_validity_minutes, 30);
        assert!(config.geoip_db.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("DATABASE_URL", "sqlite://tmp/test.db");
            env::set_var("BASE_URL", "https://sho.rt");
            env::set_var("DEFAULT_VALIDITY_MINUTES", "120");
            env::set_var("GEOIP_DB", "/var/lib/geoip/country.mmdb");
        }

        let config = Config::from_env();

        assert_eq!(config.database_url, "sqlite://tmp/test.db");
        assert_eq!(config.base_url.as_deref(), Some("https://sho.rt"));
        assert_eq!(config.default_validity_minutes, 120);
        assert_eq!(config.geoip_db.as_deref(), Some("/var/lib/geoip/country.mmdb"));

        // Cleanup
        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("BASE_URL");
            env::remove_var("DEFAULT_VALIDITY_MINUTES");
            env::remove_var("GEOIP_DB");
        }
    }

    #[test]
    #[serial]
    fn test_non_numeric_validity_falls_back_to_default() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("DEFAULT_VALIDITY_MINUTES", "soon");
        }

        let config = Config::from_env();
        assert_eq!(config.default_validity_minutes, 30);

        unsafe {
            env::remove_var("DEFAULT_VALIDITY_MINUTES");
        }
    }
}
