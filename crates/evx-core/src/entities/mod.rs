//! Entity structs for the stored document types.
//!
//! Each stored entity has a companion draft type (`NewAuthor`, `NewArticle`,
//! …) representing the not-yet-inserted form: drafts carry no identifier and
//! validate their required fields at construction time, so a malformed entity
//! is rejected before any store interaction. Stored entities always carry the
//! store-assigned identifier.

mod article;
mod author;
mod review;
mod tag;
mod trial;

pub use article::{Article, NewArticle};
pub use author::{Author, NewAuthor};
pub use review::{NewSystematicReview, SystematicReview};
pub use tag::{NewTag, Tag};
pub use trial::{ClinicalTrial, NewClinicalTrial};

use crate::errors::ValidationError;

/// Reject a missing or empty required string field.
pub(crate) fn require_non_empty(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { entity, field });
    }
    Ok(())
}

/// Reject an empty required sequence field.
pub(crate) fn require_non_empty_list<T>(
    entity: &'static str,
    field: &'static str,
    value: &[T],
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingField { entity, field });
    }
    Ok(())
}
