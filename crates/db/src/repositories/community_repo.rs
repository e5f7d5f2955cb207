//! Repository for the `communities` table.

use sqlx::types::Json;
use sqlx::PgPool;
use showrunner_core::types::DbId;

use crate::models::community::{Community, CreateCommunity, UpdateCommunity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, description, file_links, image_urls, staff, is_deleted, \
    created_by, created_at, updated_at";

/// Provides CRUD operations for communities. Deletes are soft.
pub struct CommunityRepo;

impl CommunityRepo {
    /// Insert a new community, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCommunity,
        created_by: Option<DbId>,
    ) -> Result<Community, sqlx::Error> {
        let query = format!(
            "INSERT INTO communities (name, city, description, file_links, image_urls, staff, created_by) \
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Community>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.description)
            .bind(&input.file_links)
            .bind(&input.image_urls)
            .bind(Json(&input.staff))
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a live community by ID. Soft-deleted rows are excluded.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Community>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM communities WHERE id = $1 AND is_deleted = false");
        sqlx::query_as::<_, Community>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a community by ID whether or not it has been soft-deleted.
    pub async fn find_by_id_including_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Community>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM communities WHERE id = $1");
        sqlx::query_as::<_, Community>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List live communities, ordered case-insensitively by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Community>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM communities WHERE is_deleted = false ORDER BY lower(name), id"
        );
        sqlx::query_as::<_, Community>(&query).fetch_all(pool).await
    }

    /// Update a live community. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCommunity,
    ) -> Result<Option<Community>, sqlx::Error> {
        let query = format!(
            "UPDATE communities SET \
                name = COALESCE($2, name), \
                city = COALESCE($3, city), \
                description = COALESCE($4, description), \
                file_links = COALESCE($5, file_links), \
                image_urls = COALESCE($6, image_urls), \
                staff = COALESCE($7, staff) \
             WHERE id = $1 AND is_deleted = false \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Community>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.description)
            .bind(&input.file_links)
            .bind(&input.image_urls)
            .bind(input.staff.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a community. Returns `true` if a live row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE communities SET is_deleted = true WHERE id = $1 AND is_deleted = false")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
