//! Link resolver: joins article reference sequences into populated
//! child records.
//!
//! The store holds flat entities by identifier; references on an article
//! are plain identifier sequences. Resolution is always this explicit join
//! step, never an implicit or lazy load. A reference whose target no longer
//! exists resolves to a dangling count on the resolved view rather than an
//! error, so callers can distinguish "child deleted" from "article has no
//! authors".

use evx_core::entities::{Article, Author, Tag};
use evx_core::resolved::{ResolvedArticle, ResolvedRefs};

use crate::error::StoreError;
use crate::service::EvidenceStore;

impl EvidenceStore {
    /// Resolve both reference sequences of an article into a new
    /// `ResolvedArticle`. The source article is not mutated.
    ///
    /// The author sequence and the tag sequence are independent, so they
    /// are fetched concurrently and joined; within a sequence, lookups run
    /// in order so the resolved children keep the parent's ordering.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only on store failures; missing children are
    /// reported via the dangling counts, never as errors.
    pub async fn resolve_article(&self, article: &Article) -> Result<ResolvedArticle, StoreError> {
        let (authors, tags) = tokio::try_join!(
            self.resolve_author_refs(&article.author_ids),
            self.resolve_tag_refs(&article.tag_ids),
        )?;

        Ok(ResolvedArticle {
            article: article.clone(),
            authors,
            tags,
        })
    }

    /// Resolve every article in the slice, preserving slice order.
    ///
    /// # Errors
    ///
    /// Returns the first `StoreError` encountered.
    pub async fn resolve_articles(
        &self,
        articles: &[Article],
    ) -> Result<Vec<ResolvedArticle>, StoreError> {
        let mut resolved = Vec::with_capacity(articles.len());
        for article in articles {
            resolved.push(self.resolve_article(article).await?);
        }
        Ok(resolved)
    }

    async fn resolve_author_refs(&self, ids: &[String]) -> Result<ResolvedRefs<Author>, StoreError> {
        let mut resolved = Vec::with_capacity(ids.len());
        let mut dangling = 0;
        for id in ids {
            match self.get_author(id).await? {
                Some(author) => resolved.push(author),
                None => dangling += 1,
            }
        }
        Ok(ResolvedRefs::new(resolved, dangling))
    }

    async fn resolve_tag_refs(&self, ids: &[String]) -> Result<ResolvedRefs<Tag>, StoreError> {
        let mut resolved = Vec::with_capacity(ids.len());
        let mut dangling = 0;
        for id in ids {
            match self.get_tag(id).await? {
                Some(tag) => resolved.push(tag),
                None => dangling += 1,
            }
        }
        Ok(ResolvedRefs::new(resolved, dangling))
    }
}

#[cfg(test)]
mod tests {
    use evx_core::entities::{NewArticle, NewAuthor, NewTag};

    use crate::test_support::helpers::test_store;

    use super::*;

    async fn insert_author(store: &EvidenceStore, name: &str) -> Author {
        store
            .create_author(&NewAuthor::new(name).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn resolves_children_in_original_order() {
        let store = test_store().await;
        let smith = insert_author(&store, "Dr. John Smith").await;
        let doe = insert_author(&store, "Dr. Jane Doe").await;

        let article = store
            .create_article(
                &NewArticle::new("Evidence Integration Overview", "body")
                    .unwrap()
                    .with_authors(vec![smith.id.clone(), doe.id.clone()]),
            )
            .await
            .unwrap();

        let resolved = store.resolve_article(&article).await.unwrap();

        let names: Vec<_> = resolved
            .authors
            .resolved
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, ["Dr. John Smith", "Dr. Jane Doe"]);
        assert_eq!(resolved.dangling_count(), 0);
        assert!(resolved.is_fully_resolved());
    }

    #[tokio::test]
    async fn deleted_child_becomes_dangling_not_error() {
        let store = test_store().await;
        let smith = insert_author(&store, "Dr. John Smith").await;
        let doe = insert_author(&store, "Dr. Jane Doe").await;

        let article = store
            .create_article(
                &NewArticle::new("Evidence Integration Overview", "body")
                    .unwrap()
                    .with_authors(vec![smith.id.clone(), doe.id.clone()]),
            )
            .await
            .unwrap();

        store.delete_author(&doe.id).await.unwrap();

        let resolved = store.resolve_article(&article).await.unwrap();
        let names: Vec<_> = resolved
            .authors
            .resolved
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, ["Dr. John Smith"]);
        assert_eq!(resolved.authors.dangling, 1);
        assert_eq!(resolved.dangling_count(), 1);
        assert!(!resolved.is_fully_resolved());
    }

    #[tokio::test]
    async fn mixed_live_and_dangling_references_count_separately() {
        let store = test_store().await;
        let smith = insert_author(&store, "Dr. John Smith").await;
        let tag = store
            .create_tag(&NewTag::new("Research").unwrap())
            .await
            .unwrap();

        let article = store
            .create_article(
                &NewArticle::new("t", "c")
                    .unwrap()
                    .with_authors(vec![
                        smith.id.clone(),
                        "aut-gone1".into(),
                        "aut-gone2".into(),
                    ])
                    .with_tags(vec![tag.id.clone(), "tag-gone".into()]),
            )
            .await
            .unwrap();

        let resolved = store.resolve_article(&article).await.unwrap();
        assert_eq!(resolved.authors.resolved.len(), 1);
        assert_eq!(resolved.authors.dangling, 2);
        assert_eq!(resolved.tags.resolved.len(), 1);
        assert_eq!(resolved.tags.dangling, 1);
        assert_eq!(resolved.resolved_count(), 2);
        assert_eq!(resolved.dangling_count(), 3);
    }

    #[tokio::test]
    async fn source_article_reference_list_is_untouched() {
        let store = test_store().await;
        let article = store
            .create_article(
                &NewArticle::new("t", "c")
                    .unwrap()
                    .with_authors(vec!["aut-gone".into()]),
            )
            .await
            .unwrap();

        let resolved = store.resolve_article(&article).await.unwrap();

        // The resolved view drops nothing from the source's reference list.
        assert_eq!(article.author_ids, ["aut-gone"]);
        assert_eq!(resolved.article.author_ids, ["aut-gone"]);
        assert!(resolved.authors.resolved.is_empty());
    }

    #[tokio::test]
    async fn empty_reference_lists_resolve_to_empty_and_complete() {
        let store = test_store().await;
        let article = store
            .create_article(&NewArticle::new("t", "c").unwrap())
            .await
            .unwrap();

        let resolved = store.resolve_article(&article).await.unwrap();
        assert_eq!(resolved.resolved_count(), 0);
        assert_eq!(resolved.dangling_count(), 0);
        assert!(resolved.is_fully_resolved());
    }
}
