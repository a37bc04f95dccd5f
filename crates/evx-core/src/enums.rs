//! Outcome, entity type, and query field enums for Evidex.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all =
//! "snake_case")]`. String parsing is fallible and returns
//! `ValidationError`, so malformed user input is rejected before any store
//! interaction.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

// ---------------------------------------------------------------------------
// StudyOutcome
// ---------------------------------------------------------------------------

/// Primary outcome of a systematic review or clinical trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StudyOutcome {
    Positive,
    Negative,
    Mixed,
    Neutral,
}

impl StudyOutcome {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Mixed => "mixed",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for StudyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudyOutcome {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "mixed" => Ok(Self::Mixed),
            "neutral" => Ok(Self::Neutral),
            other => Err(ValidationError::UnknownOutcome(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// The logical entity types held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Article,
    Author,
    Tag,
    SystematicReview,
    ClinicalTrial,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Author => "author",
            Self::Tag => "tag",
            Self::SystematicReview => "systematic_review",
            Self::ClinicalTrial => "clinical_trial",
        }
    }

    /// All entity types, for exhaustive iteration in verification and tests.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Article,
            Self::Author,
            Self::Tag,
            Self::SystematicReview,
            Self::ClinicalTrial,
        ]
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "article" => Ok(Self::Article),
            "author" => Ok(Self::Author),
            "tag" => Ok(Self::Tag),
            "systematic_review" => Ok(Self::SystematicReview),
            "clinical_trial" => Ok(Self::ClinicalTrial),
            other => Err(ValidationError::UnknownEntityType(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ArticleField
// ---------------------------------------------------------------------------

/// Whitelist of article columns a caller may match on.
///
/// Keeping this an enum (rather than accepting arbitrary column names)
/// means the dynamically built WHERE clause can never reference a column
/// outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ArticleField {
    PmcId,
    Title,
}

impl ArticleField {
    /// SQL column name for this field.
    #[must_use]
    pub const fn as_column(self) -> &'static str {
        match self {
            Self::PmcId => "pmc_id",
            Self::Title => "title",
        }
    }
}

impl fmt::Display for ArticleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_column())
    }
}

impl FromStr for ArticleField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pmc_id" => Ok(Self::PmcId),
            "title" => Ok(Self::Title),
            other => Err(ValidationError::UnknownField(other.to_string())),
        }
    }
}
