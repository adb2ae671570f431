//! Runtime configuration loaded from the environment.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable overriding the HTTP port.
pub const ENV_PORT: &str = "PARLEY_PORT";
/// Environment variable overriding the database path.
pub const ENV_DB_PATH: &str = "PARLEY_DB_PATH";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3000;

/// Top-level runtime configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP port to bind.
    pub port: u16,
    /// `SQLite` database path.
    pub db_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            db_path: PathBuf::from("parley.sqlite3"),
        }
    }
}

impl AppConfig {
    /// Load configuration, applying environment overrides over defaults.
    ///
    /// Unparseable values fall back to the defaults rather than failing
    /// startup.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let port = std::env::var(ENV_PORT)
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        let db_path = std::env::var(ENV_DB_PATH)
            .ok()
            .map_or(defaults.db_path, PathBuf::from);
        Self { port, db_path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.db_path, PathBuf::from("parley.sqlite3"));
    }
}
