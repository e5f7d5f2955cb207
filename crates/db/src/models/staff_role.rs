//! Staff role reference list model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use showrunner_core::types::{DbId, Timestamp};

/// A row from the `staff_roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StaffRole {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub is_deleted: bool,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new staff role.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStaffRole {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for updating an existing staff role. Only present fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStaffRole {
    pub name: Option<String>,
    pub description: Option<String>,
}
