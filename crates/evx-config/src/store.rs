//! Backing store configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default logical database name.
fn default_database() -> String {
    "evidence-db-test".to_string()
}

/// Default root directory for local database files.
fn default_data_dir() -> String {
    ".evidex/data".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Remote database URL (e.g., `libsql://evidence-db.example.turso.io`).
    /// When set together with `auth_token`, remote mode is used.
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database.
    #[serde(default)]
    pub auth_token: String,

    /// Root directory for local database files (local mode).
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Logical database name. Local mode maps it to
    /// `<data_dir>/<database>.db`; `:memory:` selects an in-memory database.
    #[serde(default = "default_database")]
    pub database: String,

    /// Timeout for the liveness ping on connect, in seconds. Zero relies on
    /// the store client's own defaults.
    #[serde(default)]
    pub connect_timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            auth_token: String::new(),
            data_dir: default_data_dir(),
            database: default_database(),
            connect_timeout_secs: 0,
        }
    }
}

impl StoreConfig {
    /// An in-memory store, for tests and throwaway runs.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            database: ":memory:".to_string(),
            ..Self::default()
        }
    }

    /// Check whether remote mode is fully configured.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    /// Path of the local database file for the configured logical database.
    ///
    /// `:memory:` is passed through untouched.
    #[must_use]
    pub fn local_db_path(&self) -> String {
        if self.database == ":memory:" {
            return self.database.clone();
        }
        PathBuf::from(&self.data_dir)
            .join(format!("{}.db", self.database))
            .to_string_lossy()
            .into_owned()
    }

    /// Connect timeout, or `None` to defer to the client's own defaults.
    #[must_use]
    pub const fn connect_timeout(&self) -> Option<Duration> {
        if self.connect_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.connect_timeout_secs))
        }
    }

    /// Reject configurations that cannot name a database.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `database` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.database".to_string(),
                reason: "logical database name must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_local_mode() {
        let config = StoreConfig::default();
        assert!(!config.is_remote());
        assert_eq!(config.database, "evidence-db-test");
        assert_eq!(config.local_db_path(), ".evidex/data/evidence-db-test.db");
        assert!(config.connect_timeout().is_none());
    }

    #[test]
    fn remote_requires_url_and_token() {
        let mut config = StoreConfig {
            url: "libsql://evidence-db.example.turso.io".into(),
            ..Default::default()
        };
        assert!(!config.is_remote());

        config.auth_token = "token123".into();
        assert!(config.is_remote());
    }

    #[test]
    fn memory_database_passes_through() {
        let config = StoreConfig::in_memory();
        assert_eq!(config.local_db_path(), ":memory:");
    }

    #[test]
    fn timeout_zero_means_client_default() {
        let config = StoreConfig {
            connect_timeout_secs: 5,
            ..Default::default()
        };
        assert_eq!(config.connect_timeout(), Some(Duration::from_secs(5)));
        assert!(StoreConfig::default().connect_timeout().is_none());
    }

    #[test]
    fn empty_database_name_rejected() {
        let config = StoreConfig {
            database: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(StoreConfig::default().validate().is_ok());
    }
}
