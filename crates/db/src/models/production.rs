//! Production model and DTOs.
//!
//! `steps` and `assignments` are free-form JSONB documents. Their shape is
//! owned by `showrunner_core::production`; this layer only moves them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use showrunner_core::types::{DbId, Timestamp};

/// A row from the `productions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Production {
    pub id: DbId,
    pub title: String,
    /// Client-maintained completion figure. See the progress endpoint for the
    /// server-derived value.
    pub completion_percentage: i32,
    pub steps: Value,
    pub assignments: Value,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Lightweight listing row without the step documents.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductionSummary {
    pub id: DbId,
    pub title: String,
    pub completion_percentage: i32,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a production. Everything else starts at zero values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProduction {
    pub title: Option<String>,
}
