//! Shared query parameter types for API handlers.

use serde::Deserialize;
use showrunner_core::types::DbId;

/// `?id=` for endpoints that address a record through the query string.
#[derive(Debug, Deserialize)]
pub struct IdParam {
    pub id: DbId,
}

/// `?event_id=` filter for media listings.
#[derive(Debug, Deserialize)]
pub struct EventIdParam {
    pub event_id: DbId,
}

/// `?media_id=` filter for route listings.
#[derive(Debug, Deserialize)]
pub struct MediaIdParam {
    pub media_id: DbId,
}

/// `?section=&knowledge_item_id=` identifying a single knowledge link.
#[derive(Debug, Deserialize)]
pub struct KnowledgeLinkParams {
    pub section: String,
    pub knowledge_item_id: DbId,
}

/// `?ids=1,2,3` for batch lookups.
#[derive(Debug, Deserialize)]
pub struct IdListParam {
    #[serde(default)]
    pub ids: String,
}

impl IdListParam {
    /// Parse the comma-separated list, skipping blanks. Any other token that
    /// is not an integer yields `Err` with that token.
    pub fn parse(&self) -> Result<Vec<DbId>, String> {
        self.ids
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<DbId>().map_err(|_| s.to_string()))
            .collect()
    }
}

/// `?key=` naming a stored object.
#[derive(Debug, Deserialize)]
pub struct ObjectKeyParam {
    pub key: String,
}
