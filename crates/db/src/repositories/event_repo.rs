//! Repository for the `events` table.

use sqlx::PgPool;
use showrunner_core::types::DbId;

use crate::models::event::{CreateEvent, Event, EventStats, UpdateEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, event_date, description, created_by, created_at, updated_at";

/// Provides CRUD operations for events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEvent,
        created_by: Option<DbId>,
    ) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (name, event_date, description, created_by) \
             VALUES ($1, $2, COALESCE($3, ''), $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.name)
            .bind(input.event_date)
            .bind(&input.description)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find an event by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List events, most recent event date first. Undated events sort last.
    pub async fn list(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events ORDER BY event_date DESC NULLS LAST, id DESC"
        );
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// Update an event. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET \
                name = COALESCE($2, name), \
                event_date = COALESCE($3, event_date), \
                description = COALESCE($4, description) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.event_date)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event together with its media items and their routes.
    ///
    /// Runs in one transaction: either the whole tree goes or nothing does.
    /// Returns `false` if the event did not exist.
    pub async fn delete_cascade(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let routes = sqlx::query(
            "DELETE FROM routes WHERE media_id IN (SELECT id FROM media WHERE event_id = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let media = sqlx::query("DELETE FROM media WHERE event_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        tracing::debug!(event_id = id, media, routes, "Event cascade deleted");
        Ok(true)
    }

    /// Per-event media/route counts and click totals, aggregated in SQL.
    pub async fn stats(pool: &PgPool) -> Result<Vec<EventStats>, sqlx::Error> {
        sqlx::query_as::<_, EventStats>(
            "SELECT e.id AS event_id, \
                    e.name AS event_name, \
                    COUNT(DISTINCT m.id) AS media_count, \
                    COUNT(r.id) AS route_count, \
                    COALESCE(SUM(r.click_count), 0)::BIGINT AS total_clicks \
             FROM events e \
             LEFT JOIN media m ON m.event_id = e.id \
             LEFT JOIN routes r ON r.media_id = m.id \
             GROUP BY e.id, e.name \
             ORDER BY total_clicks DESC, e.id",
        )
        .fetch_all(pool)
        .await
    }
}
