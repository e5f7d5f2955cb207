//! Handlers for the `/promotion-channels` reference list.
//!
//! Deleted channels stay addressable by id for audit.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use showrunner_core::error::CoreError;
use showrunner_core::records::{require_text, require_text_opt, trim_opt, trim_url_opt};
use showrunner_core::types::DbId;
use showrunner_db::models::promotion_channel::{CreatePromotionChannel, UpdatePromotionChannel};
use showrunner_db::repositories::PromotionChannelRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Promotion channel";

/// GET /api/promotion-channels
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = PromotionChannelRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/promotion-channels/{id}
///
/// Soft-deleted rows are still returned, flagged `is_deleted`.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = PromotionChannelRepo::find_by_id_including_deleted(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: item }))
}

/// POST /api/promotion-channels
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreatePromotionChannel>,
) -> AppResult<impl IntoResponse> {
    let input = normalize_create(&input)?;
    let item = PromotionChannelRepo::create(&state.pool, &input, Some(admin.user_id)).await?;

    tracing::info!(user_id = admin.user_id, promotion_channel_id = item.id, "Promotion channel created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT|PATCH /api/promotion-channels/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePromotionChannel>,
) -> AppResult<impl IntoResponse> {
    let input = normalize_update(&input)?;
    let item = PromotionChannelRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(user_id = admin.user_id, promotion_channel_id = id, "Promotion channel updated");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/promotion-channels/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !PromotionChannelRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(user_id = admin.user_id, promotion_channel_id = id, "Promotion channel deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn normalize_create(input: &CreatePromotionChannel) -> Result<CreatePromotionChannel, CoreError> {
    Ok(CreatePromotionChannel {
        name: require_text("Name", &input.name)?,
        channel_type: trim_opt(input.channel_type.as_deref()),
        url: trim_url_opt("URL", input.url.as_deref())?,
        notes: trim_opt(input.notes.as_deref()),
    })
}

fn normalize_update(input: &UpdatePromotionChannel) -> Result<UpdatePromotionChannel, CoreError> {
    Ok(UpdatePromotionChannel {
        name: require_text_opt("Name", input.name.as_deref())?,
        channel_type: trim_opt(input.channel_type.as_deref()),
        url: trim_url_opt("URL", input.url.as_deref())?,
        notes: trim_opt(input.notes.as_deref()),
    })
}
