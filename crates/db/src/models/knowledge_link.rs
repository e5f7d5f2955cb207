//! Global section -> knowledge item link model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use showrunner_core::types::{DbId, Timestamp};

/// A row from the `knowledge_links` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct KnowledgeLink {
    pub id: DbId,
    pub section: String,
    pub knowledge_item_id: DbId,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for linking a knowledge item to a section.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateKnowledgeLink {
    pub section: String,
    pub knowledge_item_id: DbId,
}
