//! Resolved views produced by the link resolver.
//!
//! A resolved view is a new value; the source `Article` and its reference
//! sequences are never mutated during resolution. References whose target no
//! longer exists are counted as dangling rather than dropped silently or
//! raised as errors, so callers can distinguish "child deleted" from
//! "article has no authors".

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Article, Author, Tag};

/// One resolved reference sequence: the populated children that were found,
/// in the parent's original order, plus the count of dangling references.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResolvedRefs<T> {
    pub resolved: Vec<T>,
    pub dangling: usize,
}

impl<T> ResolvedRefs<T> {
    #[must_use]
    pub const fn new(resolved: Vec<T>, dangling: usize) -> Self {
        Self { resolved, dangling }
    }

    /// True when every reference in the sequence resolved to a live child.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.dangling == 0
    }
}

/// An article with both reference sequences resolved.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResolvedArticle {
    pub article: Article,
    pub authors: ResolvedRefs<Author>,
    pub tags: ResolvedRefs<Tag>,
}

impl ResolvedArticle {
    /// Total number of references that resolved across both sequences.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.authors.resolved.len() + self.tags.resolved.len()
    }

    /// Total number of dangling references across both sequences.
    #[must_use]
    pub const fn dangling_count(&self) -> usize {
        self.authors.dangling + self.tags.dangling
    }

    #[must_use]
    pub const fn is_fully_resolved(&self) -> bool {
        self.authors.is_complete() && self.tags.is_complete()
    }
}
