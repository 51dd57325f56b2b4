//! Kasir API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. A `.env` file, if present, is applied to the environment first
//! (see `main.rs`).

use std::env;
use std::time::Duration;

use kasir_db::DbConfig;

/// Kasir API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Listen address
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// SQLite database file (`:memory:` allowed)
    pub database_path: String,

    /// Pool size
    pub db_max_connections: u32,

    /// How long a request waits for a pooled connection
    pub db_connect_timeout_secs: u64,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(ApiConfig {
            host: get("HOST", "0.0.0.0"),

            port: get("PORT", "8080")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,

            database_path: get("DATABASE_PATH", "kasir.db"),

            db_max_connections: get("DB_MAX_CONNECTIONS", "5")
                .parse()
                .ok()
                .filter(|&n: &u32| n >= 1)
                .ok_or_else(|| ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()))?,

            db_connect_timeout_secs: get("DB_CONNECT_TIMEOUT_SECS", "30")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DB_CONNECT_TIMEOUT_SECS".to_string()))?,
        })
    }

    /// `host:port` for the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Pool settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        if self.database_path == ":memory:" {
            return DbConfig::in_memory();
        }
        DbConfig::new(&self.database_path)
            .max_connections(self.db_max_connections)
            .connect_timeout(Duration::from_secs(self.db_connect_timeout_secs))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.database_path, "kasir.db");
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.db_connect_timeout_secs, 30);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("DATABASE_PATH", "/data/pos.db"),
            ("DB_MAX_CONNECTIONS", "8"),
        ])
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:9000");

        let db = config.db_config();
        assert_eq!(db.database_path.to_str(), Some("/data/pos.db"));
        assert_eq!(db.max_connections, 8);
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PORT");
    }

    #[test]
    fn test_zero_pool_size_rejected() {
        let err = load(&[("DB_MAX_CONNECTIONS", "0")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for DB_MAX_CONNECTIONS");

        assert!(load(&[("DB_MAX_CONNECTIONS", "1")]).is_ok());
    }

    #[test]
    fn test_memory_database() {
        let config = load(&[("DATABASE_PATH", ":memory:")]).unwrap();
        assert_eq!(config.db_config().max_connections, 1);
    }
}
