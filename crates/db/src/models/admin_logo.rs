//! Admin-managed logo library model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use showrunner_core::types::{DbId, Timestamp};

/// A row from the `admin_logos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdminLogo {
    pub id: DbId,
    pub name: String,
    pub image_url: String,
    pub is_deleted: bool,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new admin logo.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdminLogo {
    pub name: String,
    pub image_url: String,
}

/// DTO for updating an existing admin logo. Only present fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAdminLogo {
    pub name: Option<String>,
    pub image_url: Option<String>,
}
