//! Promotion channel reference list model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use showrunner_core::types::{DbId, Timestamp};

/// A row from the `promotion_channels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PromotionChannel {
    pub id: DbId,
    pub name: String,
    pub channel_type: String,
    pub url: String,
    pub notes: String,
    pub is_deleted: bool,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new promotion channel.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePromotionChannel {
    pub name: String,
    pub channel_type: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating an existing promotion channel. Only present fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePromotionChannel {
    pub name: Option<String>,
    pub channel_type: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
}
