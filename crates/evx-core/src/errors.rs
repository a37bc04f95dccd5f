//! Cross-cutting validation errors for Evidex.
//!
//! Store-specific errors (`StoreError`) are defined in `evx-db`; configuration
//! errors in `evx-config`. Validation failures are surfaced here because they
//! occur at entity construction time, before any store interaction.

use thiserror::Error;

/// A draft entity or user-supplied value failed validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{entity}: required field '{field}' is missing or empty")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// A study outcome value outside the fixed enumeration.
    #[error("unknown study outcome '{0}' (expected positive, negative, mixed, or neutral)")]
    UnknownOutcome(String),

    /// A field name that is not queryable on articles.
    #[error("unknown query field '{0}' (expected pmc_id or title)")]
    UnknownField(String),

    /// An entity type name that does not exist.
    #[error("unknown entity type '{0}'")]
    UnknownEntityType(String),
}
