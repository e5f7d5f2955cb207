//! Handlers for the `/qr-codes` library.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use showrunner_core::error::CoreError;
use showrunner_core::records::{require_text, require_text_opt, trim_opt, trim_url_opt};
use showrunner_core::types::DbId;
use showrunner_db::models::qr_code::{CreateQrCode, UpdateQrCode};
use showrunner_db::repositories::QrCodeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "QR code";

/// GET /api/qr-codes
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = QrCodeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/qr-codes/{id}
///
/// Soft-deleted rows are still returned, flagged `is_deleted`.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = QrCodeRepo::find_by_id_including_deleted(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: item }))
}

/// POST /api/qr-codes
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateQrCode>,
) -> AppResult<impl IntoResponse> {
    let input = normalize_create(&input)?;
    let item = QrCodeRepo::create(&state.pool, &input, Some(admin.user_id)).await?;

    tracing::info!(user_id = admin.user_id, qr_code_id = item.id, "QR code created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT|PATCH /api/qr-codes/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateQrCode>,
) -> AppResult<impl IntoResponse> {
    let input = normalize_update(&input)?;
    let item = QrCodeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(user_id = admin.user_id, qr_code_id = id, "QR code updated");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/qr-codes/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !QrCodeRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(user_id = admin.user_id, qr_code_id = id, "QR code deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn normalize_create(input: &CreateQrCode) -> Result<CreateQrCode, CoreError> {
    Ok(CreateQrCode {
        name: require_text("Name", &input.name)?,
        image_url: trim_opt(input.image_url.as_deref()),
        target_url: trim_url_opt("Target URL", input.target_url.as_deref())?,
        notes: trim_opt(input.notes.as_deref()),
    })
}

fn normalize_update(input: &UpdateQrCode) -> Result<UpdateQrCode, CoreError> {
    Ok(UpdateQrCode {
        name: require_text_opt("Name", input.name.as_deref())?,
        image_url: trim_opt(input.image_url.as_deref()),
        target_url: trim_url_opt("Target URL", input.target_url.as_deref())?,
        notes: trim_opt(input.notes.as_deref()),
    })
}
