//! Repository for the `venues` table.

use sqlx::types::Json;
use sqlx::PgPool;
use showrunner_core::types::DbId;

use crate::models::venue::{CreateVenue, UpdateVenue, Venue};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, address, intro, file_links, image_urls, staff, \
    is_deleted, created_by, created_at, updated_at";

/// Provides CRUD operations for venues. Deletes are soft.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateVenue,
        created_by: Option<DbId>,
    ) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues (name, city, address, intro, file_links, image_urls, staff, created_by) \
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, ''), $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.address)
            .bind(&input.intro)
            .bind(&input.file_links)
            .bind(&input.image_urls)
            .bind(Json(&input.staff))
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a live venue by ID. Soft-deleted rows are excluded.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1 AND is_deleted = false");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List live venues, ordered case-insensitively by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Venue>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM venues WHERE is_deleted = false ORDER BY lower(name), id"
        );
        sqlx::query_as::<_, Venue>(&query).fetch_all(pool).await
    }

    /// Update a live venue. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVenue,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!(
            "UPDATE venues SET \
                name = COALESCE($2, name), \
                city = COALESCE($3, city), \
                address = COALESCE($4, address), \
                intro = COALESCE($5, intro), \
                file_links = COALESCE($6, file_links), \
                image_urls = COALESCE($7, image_urls), \
                staff = COALESCE($8, staff) \
             WHERE id = $1 AND is_deleted = false \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.address)
            .bind(&input.intro)
            .bind(&input.file_links)
            .bind(&input.image_urls)
            .bind(input.staff.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a venue. Returns `true` if a live row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE venues SET is_deleted = true WHERE id = $1 AND is_deleted = false")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
