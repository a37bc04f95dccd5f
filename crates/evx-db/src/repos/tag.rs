//! Tag repository.

use chrono::Utc;

use evx_core::entities::{NewTag, Tag};
use evx_core::ids::PREFIX_TAG;

use crate::error::StoreError;
use crate::helpers::{get_opt_string, parse_datetime};
use crate::service::EvidenceStore;

const TAG_COLUMNS: &str = "id, name, color, description, created_at";

fn row_to_tag(row: &libsql::Row) -> Result<Tag, StoreError> {
    Ok(Tag {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        color: get_opt_string(row, 2)?,
        description: get_opt_string(row, 3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl EvidenceStore {
    pub async fn create_tag(&self, draft: &NewTag) -> Result<Tag, StoreError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_TAG).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO tags (id, name, color, description, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    id.as_str(),
                    draft.name.as_str(),
                    draft.color.as_deref(),
                    draft.description.as_deref(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(Tag {
            id,
            name: draft.name.clone(),
            color: draft.color.clone(),
            description: draft.description.clone(),
            created_at: now,
        })
    }

    pub async fn get_tag(&self, id: &str) -> Result<Option<Tag>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {TAG_COLUMNS} FROM tags WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_tag(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn find_tags_by_name(&self, name: &str) -> Result<Vec<Tag>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {TAG_COLUMNS} FROM tags WHERE name = ?1
                     ORDER BY created_at, id"
                ),
                [name],
            )
            .await?;

        let mut tags = Vec::new();
        while let Some(row) = rows.next().await? {
            tags.push(row_to_tag(&row)?);
        }
        Ok(tags)
    }

    pub async fn list_tags(&self) -> Result<Vec<Tag>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {TAG_COLUMNS} FROM tags ORDER BY created_at, id"),
                (),
            )
            .await?;

        let mut tags = Vec::new();
        while let Some(row) = rows.next().await? {
            tags.push(row_to_tag(&row)?);
        }
        Ok(tags)
    }

    pub async fn delete_tag(&self, id: &str) -> Result<(), StoreError> {
        self.db()
            .conn()
            .execute("DELETE FROM tags WHERE id = ?1", [id])
            .await?;
        Ok(())
    }
}
