//! Repository for the `cities` table.

use sqlx::PgPool;
use showrunner_core::types::DbId;

use crate::models::city::{City, CreateCity, UpdateCity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, region, is_deleted, created_by, created_at, updated_at";

/// Provides CRUD operations for cities. Deletes are soft.
pub struct CityRepo;

impl CityRepo {
    /// Insert a new city, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCity,
        created_by: Option<DbId>,
    ) -> Result<City, sqlx::Error> {
        let query = format!(
            "INSERT INTO cities (name, region, created_by) \
             VALUES ($1, COALESCE($2, ''), $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, City>(&query)
            .bind(&input.name)
            .bind(&input.region)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a live city by ID. Soft-deleted rows are excluded.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<City>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cities WHERE id = $1 AND is_deleted = false");
        sqlx::query_as::<_, City>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List live cities, ordered case-insensitively by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<City>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cities WHERE is_deleted = false ORDER BY lower(name), id"
        );
        sqlx::query_as::<_, City>(&query).fetch_all(pool).await
    }

    /// Update a live city. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCity,
    ) -> Result<Option<City>, sqlx::Error> {
        let query = format!(
            "UPDATE cities SET \
                name = COALESCE($2, name), \
                region = COALESCE($3, region) \
             WHERE id = $1 AND is_deleted = false \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, City>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.region)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a city. Returns `true` if a live row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE cities SET is_deleted = true WHERE id = $1 AND is_deleted = false")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
