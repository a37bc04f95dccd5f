//! Author repository.

use chrono::Utc;

use evx_core::entities::{Author, NewAuthor};
use evx_core::ids::PREFIX_AUTHOR;

use crate::error::StoreError;
use crate::helpers::{get_opt_string, parse_datetime};
use crate::service::EvidenceStore;

const AUTHOR_COLUMNS: &str = "id, name, email, affiliation, created_at";

fn row_to_author(row: &libsql::Row) -> Result<Author, StoreError> {
    Ok(Author {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        email: get_opt_string(row, 2)?,
        affiliation: get_opt_string(row, 3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl EvidenceStore {
    pub async fn create_author(&self, draft: &NewAuthor) -> Result<Author, StoreError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_AUTHOR).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO authors (id, name, email, affiliation, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    id.as_str(),
                    draft.name.as_str(),
                    draft.email.as_deref(),
                    draft.affiliation.as_deref(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(Author {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            affiliation: draft.affiliation.clone(),
            created_at: now,
        })
    }

    pub async fn get_author(&self, id: &str) -> Result<Option<Author>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {AUTHOR_COLUMNS} FROM authors WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_author(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn find_authors_by_name(&self, name: &str) -> Result<Vec<Author>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {AUTHOR_COLUMNS} FROM authors WHERE name = ?1
                     ORDER BY created_at, id"
                ),
                [name],
            )
            .await?;

        let mut authors = Vec::new();
        while let Some(row) = rows.next().await? {
            authors.push(row_to_author(&row)?);
        }
        Ok(authors)
    }

    pub async fn list_authors(&self) -> Result<Vec<Author>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {AUTHOR_COLUMNS} FROM authors ORDER BY created_at, id"),
                (),
            )
            .await?;

        let mut authors = Vec::new();
        while let Some(row) = rows.next().await? {
            authors.push(row_to_author(&row)?);
        }
        Ok(authors)
    }

    /// Deleting an author never cascades into articles referencing it; the
    /// article keeps a dangling reference the resolver will report.
    pub async fn delete_author(&self, id: &str) -> Result<(), StoreError> {
        self.db()
            .conn()
            .execute("DELETE FROM authors WHERE id = ?1", [id])
            .await?;
        Ok(())
    }
}
