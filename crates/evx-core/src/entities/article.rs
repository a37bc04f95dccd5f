use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

use super::require_non_empty;

/// A stored article referencing authors and tags by identifier.
///
/// The reference sequences hold identifiers only; resolving them into
/// populated `Author`/`Tag` records is an explicit step performed by the
/// link resolver, never done implicitly on load. Insertion order of the
/// sequences is preserved for display.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub content: String,
    pub pmc_id: Option<String>,
    pub author_ids: Vec<String>,
    pub tag_ids: Vec<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub is_published: bool,
}

/// Draft article awaiting insertion.
///
/// Child references are attached after the children have been inserted and
/// assigned their identifiers, so a freshly built draft never references a
/// child that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub pmc_id: Option<String>,
    pub author_ids: Vec<String>,
    pub tag_ids: Vec<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub is_published: bool,
}

impl NewArticle {
    /// # Errors
    ///
    /// Returns `ValidationError::MissingField` if `title` or `content` is empty.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into();
        let content = content.into();
        require_non_empty("article", "title", &title)?;
        require_non_empty("article", "content", &content)?;
        Ok(Self {
            title,
            content,
            pmc_id: None,
            author_ids: Vec::new(),
            tag_ids: Vec::new(),
            published_at: None,
            view_count: 0,
            is_published: false,
        })
    }

    #[must_use]
    pub fn with_pmc_id(mut self, pmc_id: impl Into<String>) -> Self {
        self.pmc_id = Some(pmc_id.into());
        self
    }

    #[must_use]
    pub fn with_authors(mut self, author_ids: Vec<String>) -> Self {
        self.author_ids = author_ids;
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tag_ids: Vec<String>) -> Self {
        self.tag_ids = tag_ids;
        self
    }

    /// Mark the draft as published at the given instant.
    #[must_use]
    pub const fn published(mut self, at: DateTime<Utc>) -> Self {
        self.published_at = Some(at);
        self.is_published = true;
        self
    }

    #[must_use]
    pub const fn with_view_count(mut self, count: i64) -> Self {
        self.view_count = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_requires_title_and_content() {
        assert!(NewArticle::new("Sample Research Article", "body").is_ok());
        assert!(NewArticle::new("", "body").is_err());
        assert!(NewArticle::new("title", "").is_err());
    }

    #[test]
    fn published_sets_flag_and_timestamp() {
        let now = Utc::now();
        let draft = NewArticle::new("t", "c").unwrap().published(now);
        assert!(draft.is_published);
        assert_eq!(draft.published_at, Some(now));
    }

    #[test]
    fn reference_sequences_preserve_order() {
        let draft = NewArticle::new("t", "c")
            .unwrap()
            .with_authors(vec!["aut-1".into(), "aut-2".into()])
            .with_tags(vec!["tag-9".into(), "tag-3".into()]);
        assert_eq!(draft.author_ids, ["aut-1", "aut-2"]);
        assert_eq!(draft.tag_ids, ["tag-9", "tag-3"]);
    }
}
