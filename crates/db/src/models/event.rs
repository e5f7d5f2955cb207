//! Tracked event model and DTOs.
//!
//! Events own media items, which in turn own redirect routes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use showrunner_core::types::{DbId, Timestamp};

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub name: String,
    pub event_date: Option<NaiveDate>,
    pub description: String,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub name: String,
    pub event_date: Option<NaiveDate>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEvent {
    pub name: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// Per-event rollup returned by the stats endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventStats {
    pub event_id: DbId,
    pub event_name: String,
    pub media_count: i64,
    pub route_count: i64,
    pub total_clicks: i64,
}
