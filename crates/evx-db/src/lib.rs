//! # evx-db
//!
//! libSQL store operations for Evidex.
//!
//! Handles the document entities (articles, authors, tags, systematic
//! reviews, clinical trials), the link resolver that joins article
//! references back into populated child records, and the seeding/query
//! workflows. Local file databases are used for development and tests;
//! a remote `libsql://` URL plus auth token selects a hosted store.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod resolver;
pub mod service;
pub mod workflow;

#[cfg(test)]
mod test_support;

use error::StoreError;
use evx_config::StoreConfig;
use libsql::Builder;
use std::time::Duration;

/// Store handle for one logical database.
///
/// Owned exclusively by a single workflow invocation for its lifetime; no
/// global or shared client instance exists. Dropping the handle releases
/// the connection, which is what makes teardown hold on panic and
/// cancellation paths as well.
pub struct EvidenceDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl EvidenceDb {
    /// Connect to the store described by `config` and prepare the schema.
    ///
    /// Remote mode (URL + auth token) is used when fully configured,
    /// otherwise the logical database maps to a local file under
    /// `data_dir`. The connection is verified with a liveness ping before
    /// migrations run.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connection` if the store cannot be reached, the
    /// credentials are rejected, or the ping times out; failures are not
    /// retried. Returns `StoreError::Migration` if the schema cannot be
    /// prepared.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let db = if config.is_remote() {
            Builder::new_remote(config.url.clone(), config.auth_token.clone())
                .build()
                .await
                .map_err(|e| StoreError::Connection(e.to_string()))?
        } else {
            let path = config.local_db_path();
            if let Some(parent) = std::path::Path::new(&path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .map_err(|e| StoreError::Connection(format!("{path}: {e}")))?;
                }
            }
            Builder::new_local(&path)
                .build()
                .await
                .map_err(|e| StoreError::Connection(e.to_string()))?
        };

        let conn = db
            .connect()
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        Self::ping(&conn, config.connect_timeout()).await?;

        let evidence_db = Self { db, conn };
        evidence_db.run_migrations().await?;
        Ok(evidence_db)
    }

    /// Verify liveness with `SELECT 1`, optionally bounded by a timeout.
    async fn ping(conn: &libsql::Connection, timeout: Option<Duration>) -> Result<(), StoreError> {
        let query = conn.query("SELECT 1", ());
        let result = match timeout {
            Some(limit) => tokio::time::timeout(limit, query)
                .await
                .map_err(|_| StoreError::Connection(format!("liveness ping timed out after {limit:?}")))?,
            None => query.await,
        };
        result.map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok(())
    }

    /// Explicit teardown. Dropping the handle has the same effect; this
    /// exists so workflows can name their disconnect step.
    pub fn close(self) {}

    /// The live libSQL connection, for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Ask the store for a fresh prefixed identifier, e.g. `"art-a3f8b2c1"`.
    ///
    /// The random half comes from `randomblob(4)` rendered as 8 hex chars,
    /// so identifiers are assigned by the store, never by application code.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, StoreError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use evx_config::StoreConfig;

    use super::*;

    async fn test_db() -> EvidenceDb {
        EvidenceDb::connect(&StoreConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn connect_creates_schema() {
        let db = test_db().await;

        let mut rows = db
            .conn()
            .query("SELECT name FROM sqlite_master WHERE type='table'", ())
            .await
            .unwrap();
        let mut tables = HashSet::new();
        while let Some(row) = rows.next().await.unwrap() {
            tables.insert(row.get::<String>(0).unwrap());
        }

        for expected in [
            "authors",
            "tags",
            "articles",
            "systematic_reviews",
            "clinical_trials",
        ] {
            assert!(tables.contains(expected), "table '{expected}' should exist");
        }
    }

    #[tokio::test]
    async fn connect_creates_local_file_under_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig {
            data_dir: dir.path().to_string_lossy().into_owned(),
            database: "evidence-db-test".into(),
            ..Default::default()
        };

        let db = EvidenceDb::connect(&config).await.unwrap();
        db.close();

        assert!(dir.path().join("evidence-db-test.db").exists());
    }

    #[tokio::test]
    async fn generated_ids_are_prefixed_hex() {
        let db = test_db().await;
        for prefix in evx_core::ids::ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            let (head, random) = id.split_once('-').expect("id should contain a dash");
            assert_eq!(&head, prefix);
            assert_eq!(random.len(), 8, "random half should be 8 hex chars: {id}");
            assert!(random.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[tokio::test]
    async fn generated_ids_do_not_repeat() {
        let db = test_db().await;
        let mut seen = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id("art").await.unwrap();
            assert!(seen.insert(id.clone()), "duplicate id generated: {id}");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }
}
