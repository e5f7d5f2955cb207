//! Repository for the `ticketing_platforms` table.

use sqlx::PgPool;
use showrunner_core::types::DbId;

use crate::models::ticketing_platform::{CreateTicketingPlatform, TicketingPlatform, UpdateTicketingPlatform};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, website_url, notes, is_deleted, created_by, created_at, \
    updated_at";

/// Provides CRUD operations for ticketing platforms. Deletes are soft.
pub struct TicketingPlatformRepo;

impl TicketingPlatformRepo {
    /// Insert a new ticketing platform, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTicketingPlatform,
        created_by: Option<DbId>,
    ) -> Result<TicketingPlatform, sqlx::Error> {
        let query = format!(
            "INSERT INTO ticketing_platforms (name, website_url, notes, created_by) \
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TicketingPlatform>(&query)
            .bind(&input.name)
            .bind(&input.website_url)
            .bind(&input.notes)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a live ticketing platform by ID. Soft-deleted rows are excluded.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TicketingPlatform>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ticketing_platforms WHERE id = $1 AND is_deleted = false");
        sqlx::query_as::<_, TicketingPlatform>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List live ticketing platforms, ordered case-insensitively by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<TicketingPlatform>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ticketing_platforms WHERE is_deleted = false ORDER BY lower(name), id"
        );
        sqlx::query_as::<_, TicketingPlatform>(&query).fetch_all(pool).await
    }

    /// Update a live ticketing platform. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTicketingPlatform,
    ) -> Result<Option<TicketingPlatform>, sqlx::Error> {
        let query = format!(
            "UPDATE ticketing_platforms SET \
                name = COALESCE($2, name), \
                website_url = COALESCE($3, website_url), \
                notes = COALESCE($4, notes) \
             WHERE id = $1 AND is_deleted = false \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TicketingPlatform>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.website_url)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a ticketing platform. Returns `true` if a live row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE ticketing_platforms SET is_deleted = true WHERE id = $1 AND is_deleted = false")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
