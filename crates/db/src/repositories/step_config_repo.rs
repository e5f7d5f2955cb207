//! Repository for the `step_configs` singleton.
//!
//! The row is created lazily on first read from the compiled-in defaults.
//! Every read is reconciled against the current step definitions, so a
//! newly shipped definition shows up without a data migration.

use sqlx::types::Json;
use sqlx::PgPool;
use showrunner_core::steps::{self, StepConfigEntry, STEP_DEFINITIONS};
use showrunner_core::types::DbId;

use crate::models::step_config::StepConfig;

const COLUMNS: &str = "steps, updated_by, updated_at";

pub struct StepConfigRepo;

impl StepConfigRepo {
    /// Fetch the stored configuration, inserting the default row if absent.
    ///
    /// The returned row is raw storage; use [`StepConfigRepo::get_reconciled`]
    /// for the merged view.
    pub async fn get_or_create(pool: &PgPool) -> Result<StepConfig, sqlx::Error> {
        sqlx::query(
            "INSERT INTO step_configs (id, steps) VALUES (1, $1) ON CONFLICT (id) DO NOTHING",
        )
        .bind(Json(steps::default_config()))
        .execute(pool)
        .await?;

        let query = format!("SELECT {COLUMNS} FROM step_configs WHERE id = 1");
        sqlx::query_as::<_, StepConfig>(&query)
            .fetch_one(pool)
            .await
    }

    /// The stored configuration merged with the compiled-in definitions and
    /// sorted by order.
    pub async fn get_reconciled(pool: &PgPool) -> Result<StepConfig, sqlx::Error> {
        let mut config = Self::get_or_create(pool).await?;
        config.steps = Json(steps::reconcile(&config.steps, STEP_DEFINITIONS));
        Ok(config)
    }

    /// Replace the stored list wholesale. Callers validate the entries first.
    pub async fn replace(
        pool: &PgPool,
        entries: &[StepConfigEntry],
        updated_by: Option<DbId>,
    ) -> Result<StepConfig, sqlx::Error> {
        let query = format!(
            "INSERT INTO step_configs (id, steps, updated_by) \
             VALUES (1, $1, $2) \
             ON CONFLICT (id) DO UPDATE \
             SET steps = EXCLUDED.steps, \
                 updated_by = EXCLUDED.updated_by \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StepConfig>(&query)
            .bind(Json(entries))
            .bind(updated_by)
            .fetch_one(pool)
            .await
    }
}
