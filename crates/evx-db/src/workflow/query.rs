//! Query workflow: find articles by a field match and resolve their links,
//! falling back to one arbitrary sample article when nothing matches.

use evx_config::StoreConfig;
use evx_core::enums::ArticleField;
use evx_core::reports::QueryOutcome;

use crate::error::StoreError;
use crate::service::EvidenceStore;

/// Run the query workflow against the configured store, with the same
/// connect/teardown envelope as the seeding workflow.
///
/// # Errors
///
/// Returns `StoreError::Connection` if the store is unreachable, any other
/// `StoreError` from the failing step. Teardown runs on every path.
pub async fn run(
    config: &StoreConfig,
    field: ArticleField,
    value: &str,
) -> Result<QueryOutcome, StoreError> {
    let store = EvidenceStore::connect(config).await?;
    let outcome = query_store(&store, field, value).await;
    store.close();
    outcome
}

/// Query an already connected store.
///
/// When the field match comes back empty, one arbitrary article (if any
/// exists) is returned instead with `used_fallback = true`, so the caller
/// can distinguish "found results" from "showing an unrelated sample".
///
/// # Errors
///
/// Returns `StoreError` if a lookup or resolution fails.
pub async fn query_store(
    store: &EvidenceStore,
    field: ArticleField,
    value: &str,
) -> Result<QueryOutcome, StoreError> {
    tracing::info!(%field, value, "querying articles");
    let matches = store.find_articles_by(field, value).await?;

    if matches.is_empty() {
        tracing::info!(%field, value, "no match; falling back to a sample article");
        let mut resolved = Vec::new();
        if let Some(sample) = store.find_one_article().await? {
            resolved.push(store.resolve_article(&sample).await?);
        }
        return Ok(QueryOutcome {
            field: field.to_string(),
            value: value.to_string(),
            matches: resolved,
            used_fallback: true,
        });
    }

    let resolved = store.resolve_articles(&matches).await?;
    Ok(QueryOutcome {
        field: field.to_string(),
        value: value.to_string(),
        matches: resolved,
        used_fallback: false,
    })
}

#[cfg(test)]
mod tests {
    use crate::test_support::helpers::test_store;
    use crate::workflow::seed::seed_store;

    use super::*;

    #[tokio::test]
    async fn matching_query_resolves_without_fallback() {
        let store = test_store().await;
        seed_store(&store).await.unwrap();

        let outcome = query_store(&store, ArticleField::PmcId, "PMC10300813")
            .await
            .unwrap();

        assert!(!outcome.used_fallback);
        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(
            outcome.matches[0].article.pmc_id.as_deref(),
            Some("PMC10300813")
        );
        assert!(outcome.matches[0].is_fully_resolved());
    }

    #[tokio::test]
    async fn unmatched_query_falls_back_to_one_sample() {
        let store = test_store().await;
        seed_store(&store).await.unwrap();

        let outcome = query_store(&store, ArticleField::PmcId, "PMC99999999")
            .await
            .unwrap();

        assert!(outcome.used_fallback);
        assert_eq!(outcome.matches.len(), 1);
        // The sample is an unrelated article, not the one asked for.
        assert_ne!(
            outcome.matches[0].article.pmc_id.as_deref(),
            Some("PMC99999999")
        );
    }

    #[tokio::test]
    async fn unmatched_query_on_empty_store_returns_no_sample() {
        let store = test_store().await;

        let outcome = query_store(&store, ArticleField::PmcId, "PMC99999999")
            .await
            .unwrap();

        assert!(outcome.used_fallback);
        assert!(outcome.matches.is_empty());
    }

    #[tokio::test]
    async fn query_by_title_matches() {
        let store = test_store().await;
        seed_store(&store).await.unwrap();

        let outcome = query_store(&store, ArticleField::Title, "Sample Research Article")
            .await
            .unwrap();

        assert!(!outcome.used_fallback);
        assert_eq!(outcome.matches.len(), 1);
    }
}
