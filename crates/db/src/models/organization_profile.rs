//! Organization profile singleton.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use showrunner_core::types::{DbId, Timestamp};

/// The single row of the `organization_profile` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrganizationProfile {
    pub name: String,
    pub description: String,
    pub logo_url: String,
    pub website: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub updated_by: Option<DbId>,
    pub updated_at: Timestamp,
}

/// Partial update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOrganizationProfile {
    pub name: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}
