//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! connect. All statements use `IF NOT EXISTS` for idempotent re-running.

use crate::EvidenceDb;
use crate::error::StoreError;

/// Initial schema: five entity tables and their lookup indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl EvidenceDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), StoreError> {
        self.conn()
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| StoreError::Migration(format!("001_initial: {e}")))?;
        Ok(())
    }
}
