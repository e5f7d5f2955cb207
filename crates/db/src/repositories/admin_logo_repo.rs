//! Repository for the `admin_logos` table.

use sqlx::PgPool;
use showrunner_core::types::DbId;

use crate::models::admin_logo::{AdminLogo, CreateAdminLogo, UpdateAdminLogo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, image_url, is_deleted, created_by, created_at, updated_at";

/// Provides CRUD operations for admin logos. Deletes are soft.
pub struct AdminLogoRepo;

impl AdminLogoRepo {
    /// Insert a new admin logo, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAdminLogo,
        created_by: Option<DbId>,
    ) -> Result<AdminLogo, sqlx::Error> {
        let query = format!(
            "INSERT INTO admin_logos (name, image_url, created_by) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminLogo>(&query)
            .bind(&input.name)
            .bind(&input.image_url)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a live admin logo by ID. Soft-deleted rows are excluded.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AdminLogo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admin_logos WHERE id = $1 AND is_deleted = false");
        sqlx::query_as::<_, AdminLogo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List live admin logos, ordered case-insensitively by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<AdminLogo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM admin_logos WHERE is_deleted = false ORDER BY lower(name), id"
        );
        sqlx::query_as::<_, AdminLogo>(&query).fetch_all(pool).await
    }

    /// Update a live admin logo. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAdminLogo,
    ) -> Result<Option<AdminLogo>, sqlx::Error> {
        let query = format!(
            "UPDATE admin_logos SET \
                name = COALESCE($2, name), \
                image_url = COALESCE($3, image_url) \
             WHERE id = $1 AND is_deleted = false \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminLogo>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a admin logo. Returns `true` if a live row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE admin_logos SET is_deleted = true WHERE id = $1 AND is_deleted = false")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
