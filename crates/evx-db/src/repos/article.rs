//! Article repository.
//!
//! Articles store their reference sequences (`author_ids`, `tag_ids`) as
//! JSON arrays in TEXT columns, preserving order. The repository never
//! resolves references; that is the resolver's job.

use chrono::Utc;

use evx_core::entities::{Article, NewArticle};
use evx_core::enums::ArticleField;
use evx_core::ids::PREFIX_ARTICLE;

use crate::error::StoreError;
use crate::helpers::{get_opt_string, parse_datetime, parse_optional_datetime, parse_string_list};
use crate::service::EvidenceStore;

const ARTICLE_COLUMNS: &str = "id, title, content, pmc_id, author_ids, tag_ids, published_at, \
                               created_at, updated_at, view_count, is_published";

fn row_to_article(row: &libsql::Row) -> Result<Article, StoreError> {
    Ok(Article {
        id: row.get::<String>(0)?,
        title: row.get::<String>(1)?,
        content: row.get::<String>(2)?,
        pmc_id: get_opt_string(row, 3)?,
        author_ids: parse_string_list(&row.get::<String>(4)?)?,
        tag_ids: parse_string_list(&row.get::<String>(5)?)?,
        published_at: parse_optional_datetime(row.get::<Option<String>>(6)?.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_optional_datetime(row.get::<Option<String>>(8)?.as_deref())?,
        view_count: row.get::<i64>(9)?,
        is_published: row.get::<i64>(10)? != 0,
    })
}

fn encode_id_list(ids: &[String]) -> Result<String, StoreError> {
    serde_json::to_string(ids).map_err(|e| StoreError::Other(e.into()))
}

impl EvidenceStore {
    pub async fn create_article(&self, draft: &NewArticle) -> Result<Article, StoreError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_ARTICLE).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO articles (id, title, content, pmc_id, author_ids, tag_ids, \
                 published_at, created_at, updated_at, view_count, is_published)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                libsql::params![
                    id.as_str(),
                    draft.title.as_str(),
                    draft.content.as_str(),
                    draft.pmc_id.as_deref(),
                    encode_id_list(&draft.author_ids)?,
                    encode_id_list(&draft.tag_ids)?,
                    draft.published_at.map(|dt| dt.to_rfc3339()),
                    now.to_rfc3339(),
                    Option::<String>::None,
                    draft.view_count,
                    i64::from(draft.is_published)
                ],
            )
            .await?;

        Ok(Article {
            id,
            title: draft.title.clone(),
            content: draft.content.clone(),
            pmc_id: draft.pmc_id.clone(),
            author_ids: draft.author_ids.clone(),
            tag_ids: draft.tag_ids.clone(),
            published_at: draft.published_at,
            created_at: now,
            updated_at: None,
            view_count: draft.view_count,
            is_published: draft.is_published,
        })
    }

    pub async fn get_article(&self, id: &str) -> Result<Option<Article>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_article(&row)?)),
            None => Ok(None),
        }
    }

    /// Find all articles whose `field` column equals `value`.
    ///
    /// The column name comes from the `ArticleField` whitelist, so the
    /// dynamically built WHERE clause can only reference known columns.
    pub async fn find_articles_by(
        &self,
        field: ArticleField,
        value: &str,
    ) -> Result<Vec<Article>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {ARTICLE_COLUMNS} FROM articles WHERE {} = ?1
                     ORDER BY created_at, id",
                    field.as_column()
                ),
                [value],
            )
            .await?;

        let mut articles = Vec::new();
        while let Some(row) = rows.next().await? {
            articles.push(row_to_article(&row)?);
        }
        Ok(articles)
    }

    /// An arbitrary article, used only as a diagnostic fallback when a
    /// query matched nothing.
    pub async fn find_one_article(&self) -> Result<Option<Article>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {ARTICLE_COLUMNS} FROM articles LIMIT 1"), ())
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_article(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn list_articles(&self) -> Result<Vec<Article>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY created_at, id"),
                (),
            )
            .await?;

        let mut articles = Vec::new();
        while let Some(row) = rows.next().await? {
            articles.push(row_to_article(&row)?);
        }
        Ok(articles)
    }

    pub async fn delete_article(&self, id: &str) -> Result<(), StoreError> {
        self.db()
            .conn()
            .execute("DELETE FROM articles WHERE id = ?1", [id])
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test_support::helpers::test_store;

    use super::*;

    fn sample_draft() -> NewArticle {
        NewArticle::new(
            "Sample Research Article",
            "This is a sample article for the store tests.",
        )
        .unwrap()
        .with_pmc_id("PMC10300813")
        .with_authors(vec!["aut-1".into(), "aut-2".into()])
        .with_tags(vec!["tag-1".into()])
        .with_view_count(42)
    }

    #[tokio::test]
    async fn create_then_find_by_pmc_id_round_trips() {
        let store = test_store().await;
        let created = store.create_article(&sample_draft()).await.unwrap();
        assert!(created.id.starts_with("art-"));

        let found = store
            .find_articles_by(ArticleField::PmcId, "PMC10300813")
            .await
            .unwrap();
        assert_eq!(found, vec![created]);
    }

    #[tokio::test]
    async fn reference_sequences_survive_storage_in_order() {
        let store = test_store().await;
        let created = store.create_article(&sample_draft()).await.unwrap();

        let fetched = store.get_article(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched.author_ids, ["aut-1", "aut-2"]);
        assert_eq!(fetched.tag_ids, ["tag-1"]);
    }

    #[tokio::test]
    async fn find_by_unmatched_value_is_empty() {
        let store = test_store().await;
        store.create_article(&sample_draft()).await.unwrap();

        let found = store
            .find_articles_by(ArticleField::PmcId, "PMC99999999")
            .await
            .unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn find_one_on_empty_store_is_none() {
        let store = test_store().await;
        assert!(store.find_one_article().await.unwrap().is_none());

        store.create_article(&sample_draft()).await.unwrap();
        assert!(store.find_one_article().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn find_by_title_matches_exactly() {
        let store = test_store().await;
        let created = store.create_article(&sample_draft()).await.unwrap();

        let found = store
            .find_articles_by(ArticleField::Title, "Sample Research Article")
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, created.id);
    }
}
