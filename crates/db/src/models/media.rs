//! Media item model and DTOs. A media item belongs to exactly one event.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use showrunner_core::types::{DbId, Timestamp};

/// A row from the `media` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Media {
    pub id: DbId,
    pub event_id: DbId,
    pub name: String,
    pub platform: String,
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMedia {
    pub event_id: DbId,
    pub name: String,
    pub platform: Option<String>,
    pub notes: Option<String>,
}

/// The owning event is fixed at creation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMedia {
    pub name: Option<String>,
    pub platform: Option<String>,
    pub notes: Option<String>,
}
