//! Handlers for the `/communities` directory.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use showrunner_core::error::CoreError;
use showrunner_core::records::{require_text, require_text_opt, trim_list, trim_opt};
use showrunner_core::staff::normalize_staff;
use showrunner_core::types::DbId;
use showrunner_db::models::community::{CreateCommunity, UpdateCommunity};
use showrunner_db::repositories::CommunityRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Community";

/// GET /api/communities
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = CommunityRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/communities/{id}
///
/// Soft-deleted rows are still returned, flagged `is_deleted`.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = CommunityRepo::find_by_id_including_deleted(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: item }))
}

/// POST /api/communities
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCommunity>,
) -> AppResult<impl IntoResponse> {
    let input = normalize_create(&input)?;
    let item = CommunityRepo::create(&state.pool, &input, Some(admin.user_id)).await?;

    tracing::info!(user_id = admin.user_id, community_id = item.id, "Community created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT|PATCH /api/communities/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCommunity>,
) -> AppResult<impl IntoResponse> {
    let input = normalize_update(&input)?;
    let item = CommunityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(user_id = admin.user_id, community_id = id, "Community updated");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/communities/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !CommunityRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(user_id = admin.user_id, community_id = id, "Community deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn normalize_create(input: &CreateCommunity) -> Result<CreateCommunity, CoreError> {
    Ok(CreateCommunity {
        name: require_text("Name", &input.name)?,
        city: trim_opt(input.city.as_deref()),
        description: trim_opt(input.description.as_deref()),
        file_links: trim_list(&input.file_links),
        image_urls: trim_list(&input.image_urls),
        staff: normalize_staff(&input.staff)?,
    })
}

fn normalize_update(input: &UpdateCommunity) -> Result<UpdateCommunity, CoreError> {
    Ok(UpdateCommunity {
        name: require_text_opt("Name", input.name.as_deref())?,
        city: trim_opt(input.city.as_deref()),
        description: trim_opt(input.description.as_deref()),
        file_links: input.file_links.as_deref().map(trim_list),
        image_urls: input.image_urls.as_deref().map(trim_list),
        staff: input.staff.as_deref().map(normalize_staff).transpose()?,
    })
}
