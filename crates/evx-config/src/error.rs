//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Merging or extracting the layered configuration failed.
    #[error("failed to load configuration: {0}")]
    Load(#[from] figment::Error),

    /// A field holds a value the application cannot work with.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
