//! City reference list model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use showrunner_core::types::{DbId, Timestamp};

/// A row from the `cities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct City {
    pub id: DbId,
    pub name: String,
    pub region: String,
    pub is_deleted: bool,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new city.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCity {
    pub name: String,
    pub region: Option<String>,
}

/// DTO for updating an existing city. Only present fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCity {
    pub name: Option<String>,
    pub region: Option<String>,
}
