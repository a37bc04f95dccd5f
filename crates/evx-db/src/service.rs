//! Service layer wrapping the store handle.
//!
//! `EvidenceStore` owns an `EvidenceDb` for the duration of one workflow
//! invocation. All repository methods are implemented as `impl
//! EvidenceStore` blocks in `repos/`, the link resolver in `resolver`.
//! This layer returns typed errors and never prints or logs.

use evx_config::StoreConfig;
use evx_core::enums::EntityType;
use evx_core::reports::EntityCounts;

use crate::EvidenceDb;
use crate::error::StoreError;
use crate::helpers::entity_type_to_table;

/// Store service scoped to one logical database.
pub struct EvidenceStore {
    db: EvidenceDb,
}

impl EvidenceStore {
    /// Connect to the configured store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connection` if the store is unreachable or the
    /// credentials are rejected; `StoreError::Migration` if the schema
    /// cannot be prepared.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let db = EvidenceDb::connect(config).await?;
        Ok(Self { db })
    }

    /// Create from an existing handle (for testing).
    #[must_use]
    pub const fn from_db(db: EvidenceDb) -> Self {
        Self { db }
    }

    /// Access the underlying store handle.
    #[must_use]
    pub const fn db(&self) -> &EvidenceDb {
        &self.db
    }

    /// Explicit teardown. Dropping the service has the same effect.
    pub fn close(self) {
        self.db.close();
    }

    /// Remove every entity from every table in the logical database.
    ///
    /// Idempotent: wiping an empty or freshly created database succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the store rejects a delete.
    pub async fn wipe(&self) -> Result<(), StoreError> {
        for entity in EntityType::all() {
            let table = entity_type_to_table(*entity);
            self.db
                .conn()
                .execute(&format!("DELETE FROM {table}"), ())
                .await?;
        }
        Ok(())
    }

    /// Row count for one entity type.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    pub async fn count(&self, entity: EntityType) -> Result<u64, StoreError> {
        let table = entity_type_to_table(entity);
        let mut rows = self
            .db
            .conn()
            .query(&format!("SELECT COUNT(*) FROM {table}"), ())
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        Ok(u64::try_from(row.get::<i64>(0)?).unwrap_or(0))
    }

    /// Row counts for every entity type.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if any count query fails.
    pub async fn counts(&self) -> Result<EntityCounts, StoreError> {
        Ok(EntityCounts {
            articles: self.count(EntityType::Article).await?,
            authors: self.count(EntityType::Author).await?,
            tags: self.count(EntityType::Tag).await?,
            systematic_reviews: self.count(EntityType::SystematicReview).await?,
            clinical_trials: self.count(EntityType::ClinicalTrial).await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use evx_core::entities::{NewAuthor, NewTag};

    use crate::test_support::helpers::test_store;

    use super::*;

    #[tokio::test]
    async fn wipe_on_fresh_database_is_not_an_error() {
        let store = test_store().await;
        store.wipe().await.unwrap();
        store.wipe().await.unwrap();
    }

    #[tokio::test]
    async fn wipe_empties_every_table() {
        let store = test_store().await;
        store
            .create_author(&NewAuthor::new("Dr. John Smith").unwrap())
            .await
            .unwrap();
        store
            .create_tag(&NewTag::new("Research").unwrap())
            .await
            .unwrap();
        assert_eq!(store.counts().await.unwrap().total(), 2);

        store.wipe().await.unwrap();

        assert_eq!(store.counts().await.unwrap().total(), 0);
        assert!(store.list_authors().await.unwrap().is_empty());
        assert!(store.list_tags().await.unwrap().is_empty());
        assert!(store.list_articles().await.unwrap().is_empty());
        assert!(store.list_reviews().await.unwrap().is_empty());
        assert!(store.list_trials().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn counts_track_inserts() {
        let store = test_store().await;
        store
            .create_author(&NewAuthor::new("Dr. Jane Doe").unwrap())
            .await
            .unwrap();

        let counts = store.counts().await.unwrap();
        assert_eq!(counts.authors, 1);
        assert_eq!(counts.articles, 0);
        assert_eq!(counts.total(), 1);
    }
}
