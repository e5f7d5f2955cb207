//! Repository for the `app_config` singleton.

use sqlx::PgPool;
use showrunner_core::types::DbId;

use crate::models::app_config::AppConfig;

const COLUMNS: &str = "base_url, updated_by, updated_at";

pub struct AppConfigRepo;

impl AppConfigRepo {
    /// Fetch the config row, creating an empty one on first read.
    pub async fn get_or_create(pool: &PgPool) -> Result<AppConfig, sqlx::Error> {
        sqlx::query("INSERT INTO app_config (id) VALUES (1) ON CONFLICT (id) DO NOTHING")
            .execute(pool)
            .await?;
        let query = format!("SELECT {COLUMNS} FROM app_config WHERE id = 1");
        sqlx::query_as::<_, AppConfig>(&query).fetch_one(pool).await
    }

    /// Set the public base URL used for tracking links.
    pub async fn set_base_url(
        pool: &PgPool,
        base_url: &str,
        updated_by: Option<DbId>,
    ) -> Result<AppConfig, sqlx::Error> {
        let query = format!(
            "INSERT INTO app_config (id, base_url, updated_by) \
             VALUES (1, $1, $2) \
             ON CONFLICT (id) DO UPDATE \
             SET base_url = EXCLUDED.base_url, \
                 updated_by = EXCLUDED.updated_by \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AppConfig>(&query)
            .bind(base_url)
            .bind(updated_by)
            .fetch_one(pool)
            .await
    }
}
