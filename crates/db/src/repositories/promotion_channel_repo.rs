//! Repository for the `promotion_channels` table.

use sqlx::PgPool;
use showrunner_core::types::DbId;

use crate::models::promotion_channel::{CreatePromotionChannel, PromotionChannel, UpdatePromotionChannel};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, channel_type, url, notes, is_deleted, created_by, created_at, \
    updated_at";

/// Provides CRUD operations for promotion channels. Deletes are soft.
pub struct PromotionChannelRepo;

impl PromotionChannelRepo {
    /// Insert a new promotion channel, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePromotionChannel,
        created_by: Option<DbId>,
    ) -> Result<PromotionChannel, sqlx::Error> {
        let query = format!(
            "INSERT INTO promotion_channels (name, channel_type, url, notes, created_by) \
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, ''), $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PromotionChannel>(&query)
            .bind(&input.name)
            .bind(&input.channel_type)
            .bind(&input.url)
            .bind(&input.notes)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a live promotion channel by ID. Soft-deleted rows are excluded.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PromotionChannel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM promotion_channels WHERE id = $1 AND is_deleted = false");
        sqlx::query_as::<_, PromotionChannel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a promotion channel by ID whether or not it has been soft-deleted.
    pub async fn find_by_id_including_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PromotionChannel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM promotion_channels WHERE id = $1");
        sqlx::query_as::<_, PromotionChannel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List live promotion channels, ordered case-insensitively by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<PromotionChannel>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM promotion_channels WHERE is_deleted = false ORDER BY lower(name), id"
        );
        sqlx::query_as::<_, PromotionChannel>(&query).fetch_all(pool).await
    }

    /// Update a live promotion channel. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePromotionChannel,
    ) -> Result<Option<PromotionChannel>, sqlx::Error> {
        let query = format!(
            "UPDATE promotion_channels SET \
                name = COALESCE($2, name), \
                channel_type = COALESCE($3, channel_type), \
                url = COALESCE($4, url), \
                notes = COALESCE($5, notes) \
             WHERE id = $1 AND is_deleted = false \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PromotionChannel>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.channel_type)
            .bind(&input.url)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a promotion channel. Returns `true` if a live row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE promotion_channels SET is_deleted = true WHERE id = $1 AND is_deleted = false")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
