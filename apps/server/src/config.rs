//! Server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, then passed explicitly into the router state. No global
//! settings object exists anywhere in the service.

use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Socket address the HTTP server binds to.
    pub bind_addr: SocketAddr,

    /// Path to the SQLite catalog database file.
    pub database_path: PathBuf,

    /// Directory where rendered receipt PDFs are persisted.
    pub media_root: PathBuf,

    /// Public base URL prepended to stored document names,
    /// e.g. `http://localhost:8000/media`.
    pub media_base_url: String,
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable              | Default                       |
    /// |-----------------------|-------------------------------|
    /// | `KASSA_BIND_ADDR`     | `127.0.0.1:8000`              |
    /// | `KASSA_DATABASE_PATH` | `./data/kassa.db`             |
    /// | `KASSA_MEDIA_ROOT`    | `./media`                     |
    /// | `KASSA_MEDIA_BASE_URL`| `http://localhost:8000/media` |
    pub fn load() -> Result<Self, ConfigError> {
        let config = AppConfig {
            bind_addr: env::var("KASSA_BIND_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:8000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("KASSA_BIND_ADDR".to_string()))?,

            database_path: env::var("KASSA_DATABASE_PATH")
                .unwrap_or_else(|_| "./data/kassa.db".to_string())
                .into(),

            media_root: env::var("KASSA_MEDIA_ROOT")
                .unwrap_or_else(|_| "./media".to_string())
                .into(),

            media_base_url: env::var("KASSA_MEDIA_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000/media".to_string()),
        };

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // Only exercises the default branch; env overrides are covered by
        // deployment, not unit tests (env vars are process-global).
        let config = AppConfig::load().unwrap();
        assert_eq!(config.bind_addr.port(), 8000);
        assert!(config.media_base_url.starts_with("http://"));
    }
}
