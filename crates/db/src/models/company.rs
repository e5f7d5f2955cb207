//! Company directory entry model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use showrunner_core::staff::StaffMember;
use showrunner_core::types::{DbId, Timestamp};

/// A row from the `companies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Company {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub description: String,
    pub file_links: Vec<String>,
    pub image_urls: Vec<String>,
    pub staff: Json<Vec<StaffMember>>,
    pub is_deleted: bool,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new company.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCompany {
    pub name: String,
    pub city: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub file_links: Vec<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub staff: Vec<StaffMember>,
}

/// DTO for updating an existing company. Lists and staff are replaced wholesale
/// when present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCompany {
    pub name: Option<String>,
    pub city: Option<String>,
    pub description: Option<String>,
    pub file_links: Option<Vec<String>>,
    pub image_urls: Option<Vec<String>>,
    pub staff: Option<Vec<StaffMember>>,
}
