use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::StudyOutcome;
use crate::errors::ValidationError;

use super::{require_non_empty, require_non_empty_list};

/// A stored systematic review.
///
/// Unlike articles, the author sequence holds plain display names rather
/// than references to stored author records.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SystematicReview {
    pub id: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub authors: Vec<String>,
    pub number_of_studies: Option<i64>,
    pub primary_outcome: StudyOutcome,
    pub created_at: DateTime<Utc>,
}

/// Draft systematic review awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSystematicReview {
    pub title: String,
    pub abstract_text: String,
    pub authors: Vec<String>,
    pub number_of_studies: Option<i64>,
    pub primary_outcome: StudyOutcome,
}

impl NewSystematicReview {
    /// # Errors
    ///
    /// Returns `ValidationError::MissingField` if `title` or `abstract` is
    /// empty, or the author list is empty.
    pub fn new(
        title: impl Into<String>,
        abstract_text: impl Into<String>,
        authors: Vec<String>,
        primary_outcome: StudyOutcome,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let abstract_text = abstract_text.into();
        require_non_empty("systematic_review", "title", &title)?;
        require_non_empty("systematic_review", "abstract", &abstract_text)?;
        require_non_empty_list("systematic_review", "authors", &authors)?;
        Ok(Self {
            title,
            abstract_text,
            authors,
            number_of_studies: None,
            primary_outcome,
        })
    }

    #[must_use]
    pub const fn with_study_count(mut self, count: i64) -> Self {
        self.number_of_studies = Some(count);
        self
    }
}
