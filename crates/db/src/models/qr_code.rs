//! QR code model and DTOs.
//!
//! A QR code record stores the rendered image and the URL it encodes.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use showrunner_core::types::{DbId, Timestamp};

/// A row from the `qr_codes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QrCode {
    pub id: DbId,
    pub name: String,
    pub image_url: String,
    pub target_url: String,
    pub notes: String,
    pub is_deleted: bool,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new qr code.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQrCode {
    pub name: String,
    pub image_url: Option<String>,
    pub target_url: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating an existing qr code. Only present fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateQrCode {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub target_url: Option<String>,
    pub notes: Option<String>,
}
