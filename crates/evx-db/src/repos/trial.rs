//! Clinical trial repository.

use chrono::Utc;

use evx_core::entities::{ClinicalTrial, NewClinicalTrial};
use evx_core::ids::PREFIX_TRIAL;

use crate::error::StoreError;
use crate::helpers::{parse_datetime, parse_enum, parse_string_list};
use crate::service::EvidenceStore;

const TRIAL_COLUMNS: &str =
    "id, title, abstract, authors, number_of_participants, primary_outcome, created_at";

fn row_to_trial(row: &libsql::Row) -> Result<ClinicalTrial, StoreError> {
    Ok(ClinicalTrial {
        id: row.get::<String>(0)?,
        title: row.get::<String>(1)?,
        abstract_text: row.get::<String>(2)?,
        authors: parse_string_list(&row.get::<String>(3)?)?,
        number_of_participants: row.get::<Option<i64>>(4)?,
        primary_outcome: parse_enum(&row.get::<String>(5)?)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl EvidenceStore {
    pub async fn create_trial(&self, draft: &NewClinicalTrial) -> Result<ClinicalTrial, StoreError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_TRIAL).await?;
        let authors =
            serde_json::to_string(&draft.authors).map_err(|e| StoreError::Other(e.into()))?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO clinical_trials \
                 (id, title, abstract, authors, number_of_participants, primary_outcome, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params![
                    id.as_str(),
                    draft.title.as_str(),
                    draft.abstract_text.as_str(),
                    authors,
                    draft.number_of_participants,
                    draft.primary_outcome.as_str(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(ClinicalTrial {
            id,
            title: draft.title.clone(),
            abstract_text: draft.abstract_text.clone(),
            authors: draft.authors.clone(),
            number_of_participants: draft.number_of_participants,
            primary_outcome: draft.primary_outcome,
            created_at: now,
        })
    }

    pub async fn get_trial(&self, id: &str) -> Result<Option<ClinicalTrial>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {TRIAL_COLUMNS} FROM clinical_trials WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_trial(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn find_trials_by_title(&self, title: &str) -> Result<Vec<ClinicalTrial>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {TRIAL_COLUMNS} FROM clinical_trials WHERE title = ?1
                     ORDER BY created_at, id"
                ),
                [title],
            )
            .await?;

        let mut trials = Vec::new();
        while let Some(row) = rows.next().await? {
            trials.push(row_to_trial(&row)?);
        }
        Ok(trials)
    }

    pub async fn list_trials(&self) -> Result<Vec<ClinicalTrial>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {TRIAL_COLUMNS} FROM clinical_trials ORDER BY created_at, id"),
                (),
            )
            .await?;

        let mut trials = Vec::new();
        while let Some(row) = rows.next().await? {
            trials.push(row_to_trial(&row)?);
        }
        Ok(trials)
    }

    pub async fn delete_trial(&self, id: &str) -> Result<(), StoreError> {
        self.db()
            .conn()
            .execute("DELETE FROM clinical_trials WHERE id = ?1", [id])
            .await?;
        Ok(())
    }
}
