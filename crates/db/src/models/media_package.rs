//! Media package model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use showrunner_core::types::{DbId, Timestamp};

/// A row from the `media_packages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MediaPackage {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub links: Vec<String>,
    pub is_deleted: bool,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new media package.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMediaPackage {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub links: Vec<String>,
}

/// DTO for updating an existing media package. Only present fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMediaPackage {
    pub name: Option<String>,
    pub description: Option<String>,
    pub links: Option<Vec<String>>,
}
