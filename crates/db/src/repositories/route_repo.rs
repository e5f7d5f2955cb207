//! Repository for the `routes` table.

use sqlx::PgPool;
use showrunner_core::types::DbId;

use crate::models::route::{CreateRoute, Route};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, media_id, name, redirect_url, click_count, created_at, updated_at";

/// Provides CRUD and click-counter operations for tracked routes.
pub struct RouteRepo;

impl RouteRepo {
    /// Insert a new route with a zero click count.
    pub async fn create(pool: &PgPool, input: &CreateRoute) -> Result<Route, sqlx::Error> {
        let query = format!(
            "INSERT INTO routes (media_id, name, redirect_url) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Route>(&query)
            .bind(input.media_id)
            .bind(&input.name)
            .bind(&input.redirect_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Route>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM routes WHERE id = $1");
        sqlx::query_as::<_, Route>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List routes for a media item in creation order.
    pub async fn list_by_media(pool: &PgPool, media_id: DbId) -> Result<Vec<Route>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM routes WHERE media_id = $1 ORDER BY id");
        sqlx::query_as::<_, Route>(&query)
            .bind(media_id)
            .fetch_all(pool)
            .await
    }

    /// Update name, destination and click count in one statement.
    ///
    /// `adjustment` is added to the current count and clamped at zero.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        name: Option<&str>,
        redirect_url: Option<&str>,
        adjustment: Option<i64>,
    ) -> Result<Option<Route>, sqlx::Error> {
        let query = format!(
            "UPDATE routes SET \
                name = COALESCE($2, name), \
                redirect_url = COALESCE($3, redirect_url), \
                click_count = GREATEST(0, click_count + COALESCE($4, 0)) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Route>(&query)
            .bind(id)
            .bind(name)
            .bind(redirect_url)
            .bind(adjustment)
            .fetch_optional(pool)
            .await
    }

    /// Record one visit and return the destination.
    ///
    /// A single atomic increment, so concurrent visits are never lost.
    pub async fn track_click(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar(
            "UPDATE routes SET click_count = click_count + 1 WHERE id = $1 RETURNING redirect_url",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM routes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
