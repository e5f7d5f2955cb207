//! Repository for the `qr_codes` table.

use sqlx::PgPool;
use showrunner_core::types::DbId;

use crate::models::qr_code::{CreateQrCode, QrCode, UpdateQrCode};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, image_url, target_url, notes, is_deleted, created_by, \
    created_at, updated_at";

/// Provides CRUD operations for QR codes. Deletes are soft.
pub struct QrCodeRepo;

impl QrCodeRepo {
    /// Insert a new QR code, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateQrCode,
        created_by: Option<DbId>,
    ) -> Result<QrCode, sqlx::Error> {
        let query = format!(
            "INSERT INTO qr_codes (name, image_url, target_url, notes, created_by) \
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, ''), $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QrCode>(&query)
            .bind(&input.name)
            .bind(&input.image_url)
            .bind(&input.target_url)
            .bind(&input.notes)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a live QR code by ID. Soft-deleted rows are excluded.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<QrCode>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM qr_codes WHERE id = $1 AND is_deleted = false");
        sqlx::query_as::<_, QrCode>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a QR code by ID whether or not it has been soft-deleted.
    pub async fn find_by_id_including_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<QrCode>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM qr_codes WHERE id = $1");
        sqlx::query_as::<_, QrCode>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List live QR codes, ordered case-insensitively by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<QrCode>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM qr_codes WHERE is_deleted = false ORDER BY lower(name), id"
        );
        sqlx::query_as::<_, QrCode>(&query).fetch_all(pool).await
    }

    /// Update a live QR code. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateQrCode,
    ) -> Result<Option<QrCode>, sqlx::Error> {
        let query = format!(
            "UPDATE qr_codes SET \
                name = COALESCE($2, name), \
                image_url = COALESCE($3, image_url), \
                target_url = COALESCE($4, target_url), \
                notes = COALESCE($5, notes) \
             WHERE id = $1 AND is_deleted = false \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QrCode>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.image_url)
            .bind(&input.target_url)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a QR code. Returns `true` if a live row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE qr_codes SET is_deleted = true WHERE id = $1 AND is_deleted = false")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
