//! Step configuration singleton model.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use showrunner_core::steps::StepConfigEntry;
use showrunner_core::types::{DbId, Timestamp};

/// The single row of the `step_configs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StepConfig {
    pub steps: Json<Vec<StepConfigEntry>>,
    pub updated_by: Option<DbId>,
    pub updated_at: Timestamp,
}

/// Full replacement body for the step configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStepConfig {
    pub steps: Vec<StepConfigEntry>,
}
