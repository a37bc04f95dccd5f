//! Systematic review repository.

use chrono::Utc;

use evx_core::entities::{NewSystematicReview, SystematicReview};
use evx_core::ids::PREFIX_REVIEW;

use crate::error::StoreError;
use crate::helpers::{parse_datetime, parse_enum, parse_string_list};
use crate::service::EvidenceStore;

const REVIEW_COLUMNS: &str =
    "id, title, abstract, authors, number_of_studies, primary_outcome, created_at";

fn row_to_review(row: &libsql::Row) -> Result<SystematicReview, StoreError> {
    Ok(SystematicReview {
        id: row.get::<String>(0)?,
        title: row.get::<String>(1)?,
        abstract_text: row.get::<String>(2)?,
        authors: parse_string_list(&row.get::<String>(3)?)?,
        number_of_studies: row.get::<Option<i64>>(4)?,
        primary_outcome: parse_enum(&row.get::<String>(5)?)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl EvidenceStore {
    pub async fn create_review(
        &self,
        draft: &NewSystematicReview,
    ) -> Result<SystematicReview, StoreError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_REVIEW).await?;
        let authors =
            serde_json::to_string(&draft.authors).map_err(|e| StoreError::Other(e.into()))?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO systematic_reviews \
                 (id, title, abstract, authors, number_of_studies, primary_outcome, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params![
                    id.as_str(),
                    draft.title.as_str(),
                    draft.abstract_text.as_str(),
                    authors,
                    draft.number_of_studies,
                    draft.primary_outcome.as_str(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(SystematicReview {
            id,
            title: draft.title.clone(),
            abstract_text: draft.abstract_text.clone(),
            authors: draft.authors.clone(),
            number_of_studies: draft.number_of_studies,
            primary_outcome: draft.primary_outcome,
            created_at: now,
        })
    }

    pub async fn get_review(&self, id: &str) -> Result<Option<SystematicReview>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {REVIEW_COLUMNS} FROM systematic_reviews WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_review(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn find_reviews_by_title(
        &self,
        title: &str,
    ) -> Result<Vec<SystematicReview>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {REVIEW_COLUMNS} FROM systematic_reviews WHERE title = ?1
                     ORDER BY created_at, id"
                ),
                [title],
            )
            .await?;

        let mut reviews = Vec::new();
        while let Some(row) = rows.next().await? {
            reviews.push(row_to_review(&row)?);
        }
        Ok(reviews)
    }

    pub async fn list_reviews(&self) -> Result<Vec<SystematicReview>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {REVIEW_COLUMNS} FROM systematic_reviews ORDER BY created_at, id"),
                (),
            )
            .await?;

        let mut reviews = Vec::new();
        while let Some(row) = rows.next().await? {
            reviews.push(row_to_review(&row)?);
        }
        Ok(reviews)
    }

    pub async fn delete_review(&self, id: &str) -> Result<(), StoreError> {
        self.db()
            .conn()
            .execute("DELETE FROM systematic_reviews WHERE id = ?1", [id])
            .await?;
        Ok(())
    }
}
