//! Report types returned by the seeding and query workflows and rendered
//! as JSON by `evx` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Author, ClinicalTrial, SystematicReview, Tag};
use crate::resolved::ResolvedArticle;

/// Per-type row counts, gathered during seed verification.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EntityCounts {
    pub articles: u64,
    pub authors: u64,
    pub tags: u64,
    pub systematic_reviews: u64,
    pub clinical_trials: u64,
}

impl EntityCounts {
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.articles + self.authors + self.tags + self.systematic_reviews + self.clinical_trials
    }
}

/// Response from `evx seed`: the full seeded graph, read back from the store
/// and resolved for verification.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeedReport {
    pub authors: Vec<Author>,
    pub tags: Vec<Tag>,
    pub articles: Vec<ResolvedArticle>,
    pub systematic_reviews: Vec<SystematicReview>,
    pub clinical_trials: Vec<ClinicalTrial>,
    pub counts: EntityCounts,
    /// Total dangling references across all resolved articles. Expected to
    /// be zero after a clean seed.
    pub dangling_references: usize,
}

/// Response from `evx query`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QueryOutcome {
    pub field: String,
    pub value: String,
    pub matches: Vec<ResolvedArticle>,
    /// True when no article matched and `matches` instead holds at most one
    /// arbitrary sample article for diagnostic inspection.
    pub used_fallback: bool,
}
