//! Seeding workflow: clean the store, insert the fixed sample graph,
//! read it back and resolve it for verification.
//!
//! Step order matters in one place only: children (authors, tags) are
//! inserted before any article referencing them, so a clean seed never
//! produces dangling references.

use evx_config::StoreConfig;
use evx_core::entities::{
    Author, NewArticle, NewAuthor, NewClinicalTrial, NewSystematicReview, NewTag, Tag,
};
use evx_core::enums::StudyOutcome;
use evx_core::reports::SeedReport;
use evx_core::resolved::ResolvedArticle;

use crate::error::StoreError;
use crate::service::EvidenceStore;

/// Run the full seeding workflow against the configured store.
///
/// `Disconnected → Connected → Cleaned → Seeded → Verified → Disconnected`;
/// on a connect failure the workflow aborts without any store interaction.
///
/// # Errors
///
/// Returns `StoreError::Connection` if the store is unreachable, any other
/// `StoreError` from the failing step. Teardown runs on every path.
pub async fn run(config: &StoreConfig) -> Result<SeedReport, StoreError> {
    let store = EvidenceStore::connect(config).await?;
    let outcome = seed_store(&store).await;
    store.close();
    outcome
}

/// Seed and verify against an already connected store.
///
/// # Errors
///
/// Returns `StoreError` from the first failing step.
pub async fn seed_store(store: &EvidenceStore) -> Result<SeedReport, StoreError> {
    tracing::info!("wiping logical database");
    store.wipe().await?;

    tracing::info!("inserting sample children");
    let authors = insert_sample_authors(store).await?;
    let tags = insert_sample_tags(store).await?;

    tracing::info!("inserting sample parents");
    let author_ids: Vec<String> = authors.iter().map(|a| a.id.clone()).collect();
    let tag_ids: Vec<String> = tags.iter().map(|t| t.id.clone()).collect();

    let article_draft = NewArticle::new(
        "Sample Research Article",
        "This is a sample article demonstrating link resolution over the evidence store.",
    )?
    .with_pmc_id("PMC10300813")
    .with_authors(author_ids)
    .with_tags(tag_ids)
    .published(chrono::Utc::now())
    .with_view_count(42);
    store.create_article(&article_draft).await?;

    let review_draft = NewSystematicReview::new(
        "Exercise Interventions for Chronic Pain: A Systematic Review",
        "Synthesis of randomized studies on exercise therapy outcomes for chronic pain.",
        vec!["Dr. John Smith".into(), "Dr. Jane Doe".into()],
        StudyOutcome::Positive,
    )?
    .with_study_count(24);
    store.create_review(&review_draft).await?;

    let trial_draft = NewClinicalTrial::new(
        "Randomized Trial of Telehealth Follow-up After Discharge",
        "Pragmatic randomized controlled trial of telehealth follow-up versus usual care.",
        vec!["Dr. Jane Doe".into()],
        StudyOutcome::Mixed,
    )?
    .with_participant_count(312);
    store.create_trial(&trial_draft).await?;

    verify(store).await
}

/// Read every entity type back, resolve every article, and assemble the
/// report used for inspection.
async fn verify(store: &EvidenceStore) -> Result<SeedReport, StoreError> {
    tracing::info!("verifying seeded graph");

    let authors = store.list_authors().await?;
    let tags = store.list_tags().await?;
    let systematic_reviews = store.list_reviews().await?;
    let clinical_trials = store.list_trials().await?;

    let articles = store.list_articles().await?;
    let articles = store.resolve_articles(&articles).await?;

    let counts = store.counts().await?;
    let dangling_references = articles.iter().map(ResolvedArticle::dangling_count).sum();

    Ok(SeedReport {
        authors,
        tags,
        articles,
        systematic_reviews,
        clinical_trials,
        counts,
        dangling_references,
    })
}

async fn insert_sample_authors(store: &EvidenceStore) -> Result<Vec<Author>, StoreError> {
    let drafts = [
        NewAuthor::new("Dr. John Smith")?
            .with_email("john.smith@university.edu")
            .with_affiliation("University Research Lab"),
        NewAuthor::new("Dr. Jane Doe")?
            .with_email("jane.doe@institute.org")
            .with_affiliation("Medical Research Institute"),
    ];

    let mut authors = Vec::with_capacity(drafts.len());
    for draft in &drafts {
        authors.push(store.create_author(draft).await?);
    }
    Ok(authors)
}

async fn insert_sample_tags(store: &EvidenceStore) -> Result<Vec<Tag>, StoreError> {
    let drafts = [
        NewTag::new("Research")?
            .with_color("blue")
            .with_description("Research articles"),
        NewTag::new("Medical")?
            .with_color("green")
            .with_description("Medical studies"),
    ];

    let mut tags = Vec::with_capacity(drafts.len());
    for draft in &drafts {
        tags.push(store.create_tag(draft).await?);
    }
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use evx_config::StoreConfig;
    use pretty_assertions::assert_eq;

    use crate::test_support::helpers::test_store;

    use super::*;

    #[tokio::test]
    async fn seed_builds_the_expected_graph() {
        let store = test_store().await;
        let report = seed_store(&store).await.unwrap();

        assert_eq!(report.counts.authors, 2);
        assert_eq!(report.counts.tags, 2);
        assert_eq!(report.counts.articles, 1);
        assert_eq!(report.counts.systematic_reviews, 1);
        assert_eq!(report.counts.clinical_trials, 1);
        assert_eq!(report.counts.total(), 7);

        assert_eq!(report.articles.len(), 1);
        let article = &report.articles[0];
        assert_eq!(article.article.pmc_id.as_deref(), Some("PMC10300813"));
        assert!(article.is_fully_resolved());
        assert_eq!(report.dangling_references, 0);

        let author_names: Vec<_> = article
            .authors
            .resolved
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(author_names, ["Dr. John Smith", "Dr. Jane Doe"]);

        let tag_names: Vec<_> = article
            .tags
            .resolved
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(tag_names, ["Research", "Medical"]);
    }

    #[tokio::test]
    async fn seed_wipes_previous_contents_first() {
        let store = test_store().await;
        seed_store(&store).await.unwrap();
        let report = seed_store(&store).await.unwrap();

        // Re-seeding does not accumulate rows.
        assert_eq!(report.counts.total(), 7);
    }

    #[tokio::test]
    async fn connect_failure_aborts_before_any_store_interaction() {
        // A local path that cannot be created forces a connection error.
        let config = StoreConfig {
            data_dir: "/dev/null/not-a-directory".into(),
            ..Default::default()
        };

        let result = run(&config).await;
        assert!(matches!(result, Err(StoreError::Connection(_))));
    }
}
