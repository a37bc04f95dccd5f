//! # evx-config
//!
//! Layered configuration loading for Evidex using figment.
//!
//! Sources are merged lowest to highest precedence:
//! built-in defaults, then `~/.config/evidex/config.toml`, then the
//! project-local `.evidex/config.toml`, then `EVIDEX_*` environment
//! variables. Env vars use `__` to separate nested sections, so
//! `EVIDEX_STORE__DATABASE` sets `store.database` and
//! `EVIDEX_STORE__AUTH_TOKEN` sets `store.auth_token`.
//!
//! ```no_run
//! use evx_config::EvidexConfig;
//!
//! let config = EvidexConfig::load_with_dotenv().expect("config");
//! if config.store.is_remote() {
//!     println!("remote store: {}", config.store.url);
//! }
//! ```

mod error;
mod general;
mod store;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for configuration overrides.
const ENV_PREFIX: &str = "EVIDEX_";

/// Project-local configuration file, relative to the working directory.
const PROJECT_CONFIG: &str = ".evidex/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EvidexConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl EvidexConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not touch `.env` files; see [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after sourcing a `.env` file, if one exists.
    ///
    /// This is the entry point the CLI uses.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::source_dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can layer additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        for path in [Self::user_config_path(), Some(PathBuf::from(PROJECT_CONFIG))]
            .into_iter()
            .flatten()
        {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Location of the user-global config file, if a config dir exists.
    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("evidex").join("config.toml"))
    }

    /// Source `.env` from the crate dir or one of its ancestors.
    ///
    /// Quietly does nothing when no `.env` is found.
    fn source_dotenv() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            loop {
                let candidate = dir.join(".env");
                if candidate.exists() {
                    let _ = dotenvy::from_path(&candidate);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }
        let _ = dotenvy::dotenv();
    }
}
