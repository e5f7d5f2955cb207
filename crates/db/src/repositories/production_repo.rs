//! Repository for the `productions` table.

use serde_json::Value;
use sqlx::PgPool;
use showrunner_core::production::{self, ProductionPatch};
use showrunner_core::types::DbId;

use crate::models::production::{Production, ProductionSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, completion_percentage, steps, assignments, \
                       created_by, created_at, updated_at";

const SUMMARY_COLUMNS: &str = "id, title, completion_percentage, created_by, created_at, updated_at";

/// Provides CRUD operations for productions. Deletes are hard.
pub struct ProductionRepo;

impl ProductionRepo {
    /// Insert a production with every step sub-document at its zero value.
    pub async fn create(
        pool: &PgPool,
        title: &str,
        created_by: Option<DbId>,
    ) -> Result<Production, sqlx::Error> {
        let query = format!(
            "INSERT INTO productions (title, steps, assignments, created_by) \
             VALUES ($1, $2, '{{}}'::jsonb, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Production>(&query)
            .bind(title)
            .bind(production::initial_steps())
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a production by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Production>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM productions WHERE id = $1");
        sqlx::query_as::<_, Production>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List productions, newest first, without step documents.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProductionSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM productions ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ProductionSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// Apply a validated patch under a row lock.
    ///
    /// The current documents are read with `FOR UPDATE`, merged in memory and
    /// written back in the same transaction, so concurrent patches touching
    /// different fields both survive. Returns `None` if the production does
    /// not exist.
    pub async fn apply_patch(
        pool: &PgPool,
        id: DbId,
        patch: &ProductionPatch,
    ) -> Result<Option<Production>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let current: Option<(Value, Value)> =
            sqlx::query_as("SELECT steps, assignments FROM productions WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some((mut steps, mut assignments)) = current else {
            return Ok(None);
        };

        production::apply_patch(&mut steps, &mut assignments, patch);

        let query = format!(
            "UPDATE productions SET \
                title = COALESCE($2, title), \
                completion_percentage = COALESCE($3, completion_percentage), \
                steps = $4, \
                assignments = $5 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Production>(&query)
            .bind(id)
            .bind(&patch.title)
            .bind(patch.completion_percentage)
            .bind(&steps)
            .bind(&assignments)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Hard-delete a production. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM productions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
