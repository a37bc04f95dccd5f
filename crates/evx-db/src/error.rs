//! Store error types for evx-db.

use thiserror::Error;

use evx_core::errors::ValidationError;

/// Errors from store operations.
///
/// `Connection` covers everything up to and including the liveness ping;
/// once a connection is established, store-reported failures surface as
/// `Storage` with the underlying client message preserved. Neither is
/// retried by this layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store is unreachable or rejected the credentials.
    #[error("connection failed: {0}")]
    Connection(String),

    /// Schema migration failed.
    #[error("migration failed: {0}")]
    Migration(String),

    /// A result row could not be decoded into an entity.
    #[error("query failed: {0}")]
    Query(String),

    /// Expected a result row but none was returned.
    #[error("no result returned")]
    NoResult,

    /// The store rejected an operation after connection succeeded.
    #[error("storage error: {0}")]
    Storage(#[from] libsql::Error),

    /// A draft entity or user-supplied value failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
