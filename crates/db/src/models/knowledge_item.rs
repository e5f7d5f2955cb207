//! Knowledge base article model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use showrunner_core::types::{DbId, Timestamp};

/// A row from the `knowledge_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct KnowledgeItem {
    pub id: DbId,
    pub title: String,
    /// Rich-text body as HTML.
    pub description_html: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub is_deleted: bool,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new knowledge item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateKnowledgeItem {
    pub title: String,
    pub description_html: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// DTO for updating an existing knowledge item. Only present fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateKnowledgeItem {
    pub title: Option<String>,
    pub description_html: Option<String>,
    pub image_url: Option<String>,
    pub tags: Option<Vec<String>>,
}
