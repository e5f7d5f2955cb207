//! Handlers for the `/production-step-config` singleton.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use showrunner_core::steps::{self, StepConfigEntry, StepDefinition, STEP_DEFINITIONS};
use showrunner_core::types::{DbId, Timestamp};
use showrunner_db::models::step_config::{StepConfig, UpdateStepConfig};
use showrunner_db::repositories::StepConfigRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// The reconciled configuration alongside the compiled-in definitions, so
/// clients can render labels and field schemas.
#[derive(Debug, Serialize)]
pub struct StepConfigResponse {
    pub steps: Vec<StepConfigEntry>,
    pub definitions: &'static [StepDefinition],
    pub updated_by: Option<DbId>,
    pub updated_at: Timestamp,
}

impl From<StepConfig> for StepConfigResponse {
    fn from(config: StepConfig) -> Self {
        Self {
            steps: config.steps.0,
            definitions: STEP_DEFINITIONS,
            updated_by: config.updated_by,
            updated_at: config.updated_at,
        }
    }
}

/// GET /api/production-step-config
pub async fn get(_auth: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let config = StepConfigRepo::get_reconciled(&state.pool).await?;
    Ok(Json(DataResponse {
        data: StepConfigResponse::from(config),
    }))
}

/// PUT /api/production-step-config
///
/// Replaces the stored list wholesale. The response is the reconciled view,
/// the same shape `GET` returns.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpdateStepConfig>,
) -> AppResult<impl IntoResponse> {
    steps::validate_config(&input.steps)?;

    StepConfigRepo::replace(&state.pool, &input.steps, Some(admin.user_id)).await?;
    let config = StepConfigRepo::get_reconciled(&state.pool).await?;

    tracing::info!(
        user_id = admin.user_id,
        step_count = input.steps.len(),
        "Production step config replaced",
    );

    Ok(Json(DataResponse {
        data: StepConfigResponse::from(config),
    }))
}
