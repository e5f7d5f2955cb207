//! Repository for the `knowledge_items` table.

use sqlx::PgPool;
use showrunner_core::types::DbId;

use crate::models::knowledge_item::{CreateKnowledgeItem, KnowledgeItem, UpdateKnowledgeItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description_html, image_url, tags, is_deleted, created_by, \
    created_at, updated_at";

/// Provides CRUD operations for knowledge items. Deletes are soft.
pub struct KnowledgeItemRepo;

impl KnowledgeItemRepo {
    /// Insert a new knowledge item, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateKnowledgeItem,
        created_by: Option<DbId>,
    ) -> Result<KnowledgeItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO knowledge_items (title, description_html, image_url, tags, created_by) \
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, KnowledgeItem>(&query)
            .bind(&input.title)
            .bind(&input.description_html)
            .bind(&input.image_url)
            .bind(&input.tags)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a live knowledge item by ID. Soft-deleted rows are excluded.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<KnowledgeItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM knowledge_items WHERE id = $1 AND is_deleted = false");
        sqlx::query_as::<_, KnowledgeItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List live knowledge items, ordered case-insensitively by title.
    pub async fn list(pool: &PgPool) -> Result<Vec<KnowledgeItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM knowledge_items WHERE is_deleted = false ORDER BY lower(title), id"
        );
        sqlx::query_as::<_, KnowledgeItem>(&query).fetch_all(pool).await
    }

    /// Update a live knowledge item. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateKnowledgeItem,
    ) -> Result<Option<KnowledgeItem>, sqlx::Error> {
        let query = format!(
            "UPDATE knowledge_items SET \
                title = COALESCE($2, title), \
                description_html = COALESCE($3, description_html), \
                image_url = COALESCE($4, image_url), \
                tags = COALESCE($5, tags) \
             WHERE id = $1 AND is_deleted = false \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, KnowledgeItem>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description_html)
            .bind(&input.image_url)
            .bind(&input.tags)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a knowledge item. Returns `true` if a live row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE knowledge_items SET is_deleted = true WHERE id = $1 AND is_deleted = false")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Fetch several live items at once, preserving the order of `ids`.
    /// Unknown or deleted ids are skipped.
    pub async fn find_many(pool: &PgPool, ids: &[DbId]) -> Result<Vec<KnowledgeItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM knowledge_items \
             WHERE id = ANY($1) AND is_deleted = false \
             ORDER BY array_position($1, id)"
        );
        sqlx::query_as::<_, KnowledgeItem>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }
}
