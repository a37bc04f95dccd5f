//! Shared test utilities for evx-db tests.

pub(crate) mod helpers {
    use evx_config::StoreConfig;

    use crate::service::EvidenceStore;

    /// Create an in-memory store (schema prepared, empty tables).
    pub async fn test_store() -> EvidenceStore {
        EvidenceStore::connect(&StoreConfig::in_memory())
            .await
            .unwrap()
    }
}
