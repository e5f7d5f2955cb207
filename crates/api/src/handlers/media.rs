//! Handlers for the `/media` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use showrunner_core::records::{require_text, require_text_opt, trim_opt};
use showrunner_core::types::DbId;
use showrunner_db::models::media::{CreateMedia, UpdateMedia};
use showrunner_db::repositories::{EventRepo, MediaRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::EventIdParam;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Media";

/// GET /api/media?event_id=
pub async fn list_by_event(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<EventIdParam>,
) -> AppResult<impl IntoResponse> {
    let media = MediaRepo::list_by_event(&state.pool, params.event_id).await?;
    Ok(Json(DataResponse { data: media }))
}

/// POST /api/media
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateMedia>,
) -> AppResult<impl IntoResponse> {
    EventRepo::find_by_id(&state.pool, input.event_id)
        .await?
        .ok_or(AppError::not_found("Event", input.event_id))?;

    let input = CreateMedia {
        event_id: input.event_id,
        name: require_text("Name", &input.name)?,
        platform: trim_opt(input.platform.as_deref()),
        notes: trim_opt(input.notes.as_deref()),
    };
    let media = MediaRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = admin.user_id,
        event_id = media.event_id,
        media_id = media.id,
        "Media created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: media })))
}

/// PATCH /api/media/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMedia>,
) -> AppResult<impl IntoResponse> {
    let input = UpdateMedia {
        name: require_text_opt("Name", input.name.as_deref())?,
        platform: trim_opt(input.platform.as_deref()),
        notes: trim_opt(input.notes.as_deref()),
    };
    let media = MediaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(user_id = admin.user_id, media_id = id, "Media updated");

    Ok(Json(DataResponse { data: media }))
}

/// DELETE /api/media/{id}
///
/// Removes the media item and all of its routes.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !MediaRepo::delete_cascade(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(user_id = admin.user_id, media_id = id, "Media deleted with routes");

    Ok(StatusCode::NO_CONTENT)
}
