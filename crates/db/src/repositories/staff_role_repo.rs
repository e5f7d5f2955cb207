//! Repository for the `staff_roles` table.

use sqlx::PgPool;
use showrunner_core::types::DbId;

use crate::models::staff_role::{CreateStaffRole, StaffRole, UpdateStaffRole};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, is_deleted, created_by, created_at, updated_at";

/// Provides CRUD operations for staff roles. Deletes are soft.
pub struct StaffRoleRepo;

impl StaffRoleRepo {
    /// Insert a new staff role, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateStaffRole,
        created_by: Option<DbId>,
    ) -> Result<StaffRole, sqlx::Error> {
        let query = format!(
            "INSERT INTO staff_roles (name, description, created_by) \
             VALUES ($1, COALESCE($2, ''), $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StaffRole>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a live staff role by ID. Soft-deleted rows are excluded.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<StaffRole>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff_roles WHERE id = $1 AND is_deleted = false");
        sqlx::query_as::<_, StaffRole>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List live staff roles, ordered case-insensitively by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<StaffRole>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM staff_roles WHERE is_deleted = false ORDER BY lower(name), id"
        );
        sqlx::query_as::<_, StaffRole>(&query).fetch_all(pool).await
    }

    /// Update a live staff role. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStaffRole,
    ) -> Result<Option<StaffRole>, sqlx::Error> {
        let query = format!(
            "UPDATE staff_roles SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description) \
             WHERE id = $1 AND is_deleted = false \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StaffRole>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a staff role. Returns `true` if a live row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE staff_roles SET is_deleted = true WHERE id = $1 AND is_deleted = false")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
