//! Handlers for the `/config` singleton.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use showrunner_core::records::validate_optional_url;
use showrunner_db::models::app_config::UpdateAppConfig;
use showrunner_db::repositories::AppConfigRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/config
pub async fn get(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let config = AppConfigRepo::get_or_create(&state.pool).await?;
    Ok(Json(DataResponse { data: config }))
}

/// PUT /api/config
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpdateAppConfig>,
) -> AppResult<impl IntoResponse> {
    let base_url = input.base_url.trim().trim_end_matches('/');
    validate_optional_url("Base URL", base_url)?;

    let config = AppConfigRepo::set_base_url(&state.pool, base_url, Some(admin.user_id)).await?;

    tracing::info!(user_id = admin.user_id, base_url = %config.base_url, "App config updated");

    Ok(Json(DataResponse { data: config }))
}
