//! Ticketing platform reference list model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use showrunner_core::types::{DbId, Timestamp};

/// A row from the `ticketing_platforms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TicketingPlatform {
    pub id: DbId,
    pub name: String,
    pub website_url: String,
    pub notes: String,
    pub is_deleted: bool,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new ticketing platform.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTicketingPlatform {
    pub name: String,
    pub website_url: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating an existing ticketing platform. Only present fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTicketingPlatform {
    pub name: Option<String>,
    pub website_url: Option<String>,
    pub notes: Option<String>,
}
