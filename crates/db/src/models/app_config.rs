//! Application configuration singleton.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use showrunner_core::types::{DbId, Timestamp};

/// The single row of the `app_config` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AppConfig {
    /// Public origin used to build tracking links. Empty when unset.
    pub base_url: String,
    pub updated_by: Option<DbId>,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAppConfig {
    pub base_url: String,
}
