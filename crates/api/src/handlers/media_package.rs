//! Handlers for the `/media-packages` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use showrunner_core::error::CoreError;
use showrunner_core::records::{require_text, require_text_opt, trim_list, trim_opt};
use showrunner_core::types::DbId;
use showrunner_db::models::media_package::{CreateMediaPackage, UpdateMediaPackage};
use showrunner_db::repositories::MediaPackageRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Media package";

/// GET /api/media-packages
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = MediaPackageRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/media-packages/{id}
///
/// Soft-deleted rows are still returned, flagged `is_deleted`.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = MediaPackageRepo::find_by_id_including_deleted(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: item }))
}

/// POST /api/media-packages
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateMediaPackage>,
) -> AppResult<impl IntoResponse> {
    let input = normalize_create(&input)?;
    let item = MediaPackageRepo::create(&state.pool, &input, Some(admin.user_id)).await?;

    tracing::info!(user_id = admin.user_id, media_package_id = item.id, "Media package created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT|PATCH /api/media-packages/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMediaPackage>,
) -> AppResult<impl IntoResponse> {
    let input = normalize_update(&input)?;
    let item = MediaPackageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(user_id = admin.user_id, media_package_id = id, "Media package updated");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/media-packages/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !MediaPackageRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(user_id = admin.user_id, media_package_id = id, "Media package deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn normalize_create(input: &CreateMediaPackage) -> Result<CreateMediaPackage, CoreError> {
    Ok(CreateMediaPackage {
        name: require_text("Name", &input.name)?,
        description: trim_opt(input.description.as_deref()),
        links: trim_list(&input.links),
    })
}

fn normalize_update(input: &UpdateMediaPackage) -> Result<UpdateMediaPackage, CoreError> {
    Ok(UpdateMediaPackage {
        name: require_text_opt("Name", input.name.as_deref())?,
        description: trim_opt(input.description.as_deref()),
        links: input.links.as_deref().map(trim_list),
    })
}
