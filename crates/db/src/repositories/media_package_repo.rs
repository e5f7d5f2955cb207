//! Repository for the `media_packages` table.

use sqlx::PgPool;
use showrunner_core::types::DbId;

use crate::models::media_package::{CreateMediaPackage, MediaPackage, UpdateMediaPackage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, links, is_deleted, created_by, created_at, \
    updated_at";

/// Provides CRUD operations for media packages. Deletes are soft.
pub struct MediaPackageRepo;

impl MediaPackageRepo {
    /// Insert a new media package, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMediaPackage,
        created_by: Option<DbId>,
    ) -> Result<MediaPackage, sqlx::Error> {
        let query = format!(
            "INSERT INTO media_packages (name, description, links, created_by) \
             VALUES ($1, COALESCE($2, ''), $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MediaPackage>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.links)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a live media package by ID. Soft-deleted rows are excluded.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MediaPackage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media_packages WHERE id = $1 AND is_deleted = false");
        sqlx::query_as::<_, MediaPackage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a media package by ID whether or not it has been soft-deleted.
    pub async fn find_by_id_including_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MediaPackage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media_packages WHERE id = $1");
        sqlx::query_as::<_, MediaPackage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List live media packages, ordered case-insensitively by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<MediaPackage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM media_packages WHERE is_deleted = false ORDER BY lower(name), id"
        );
        sqlx::query_as::<_, MediaPackage>(&query).fetch_all(pool).await
    }

    /// Update a live media package. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMediaPackage,
    ) -> Result<Option<MediaPackage>, sqlx::Error> {
        let query = format!(
            "UPDATE media_packages SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                links = COALESCE($4, links) \
             WHERE id = $1 AND is_deleted = false \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MediaPackage>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.links)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a media package. Returns `true` if a live row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE media_packages SET is_deleted = true WHERE id = $1 AND is_deleted = false")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
