//! Repository for the `media` table.

use sqlx::PgPool;
use showrunner_core::types::DbId;

use crate::models::media::{CreateMedia, Media, UpdateMedia};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, event_id, name, platform, notes, created_at, updated_at";

/// Provides CRUD operations for media items.
pub struct MediaRepo;

impl MediaRepo {
    /// Insert a new media item. Fails with a foreign key violation if the
    /// event does not exist.
    pub async fn create(pool: &PgPool, input: &CreateMedia) -> Result<Media, sqlx::Error> {
        let query = format!(
            "INSERT INTO media (event_id, name, platform, notes) \
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, '')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(input.event_id)
            .bind(&input.name)
            .bind(&input.platform)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Media>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media WHERE id = $1");
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List media items for an event in creation order.
    pub async fn list_by_event(pool: &PgPool, event_id: DbId) -> Result<Vec<Media>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media WHERE event_id = $1 ORDER BY id");
        sqlx::query_as::<_, Media>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Update a media item. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMedia,
    ) -> Result<Option<Media>, sqlx::Error> {
        let query = format!(
            "UPDATE media SET \
                name = COALESCE($2, name), \
                platform = COALESCE($3, platform), \
                notes = COALESCE($4, notes) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.platform)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a media item and its routes in one transaction.
    pub async fn delete_cascade(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM routes WHERE media_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM media WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }
}
