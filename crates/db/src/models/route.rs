//! Tracked redirect route model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use showrunner_core::types::{DbId, Timestamp};

/// A row from the `routes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Route {
    pub id: DbId,
    pub media_id: DbId,
    pub name: String,
    pub redirect_url: String,
    pub click_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoute {
    pub media_id: DbId,
    pub name: String,
    pub redirect_url: String,
}

/// `adjustment` is added to the current count, clamped at zero.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRoute {
    pub name: Option<String>,
    pub redirect_url: Option<String>,
    pub adjustment: Option<i64>,
}
