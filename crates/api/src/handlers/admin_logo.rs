//! Handlers for the `/admin-logos` library.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use showrunner_core::error::CoreError;
use showrunner_core::records::{require_nonempty, require_text, require_text_opt};
use showrunner_core::types::DbId;
use showrunner_db::models::admin_logo::{CreateAdminLogo, UpdateAdminLogo};
use showrunner_db::repositories::AdminLogoRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Admin logo";

/// GET /api/admin-logos
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = AdminLogoRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/admin-logos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = AdminLogoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: item }))
}

/// POST /api/admin-logos
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateAdminLogo>,
) -> AppResult<impl IntoResponse> {
    let input = normalize_create(&input)?;
    let item = AdminLogoRepo::create(&state.pool, &input, Some(admin.user_id)).await?;

    tracing::info!(user_id = admin.user_id, admin_logo_id = item.id, "Admin logo created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT|PATCH /api/admin-logos/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAdminLogo>,
) -> AppResult<impl IntoResponse> {
    let input = normalize_update(&input)?;
    let item = AdminLogoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(user_id = admin.user_id, admin_logo_id = id, "Admin logo updated");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/admin-logos/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !AdminLogoRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(user_id = admin.user_id, admin_logo_id = id, "Admin logo deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn normalize_create(input: &CreateAdminLogo) -> Result<CreateAdminLogo, CoreError> {
    Ok(CreateAdminLogo {
        name: require_text("Name", &input.name)?,
        image_url: require_nonempty("Image URL", &input.image_url)?,
    })
}

fn normalize_update(input: &UpdateAdminLogo) -> Result<UpdateAdminLogo, CoreError> {
    Ok(UpdateAdminLogo {
        name: require_text_opt("Name", input.name.as_deref())?,
        image_url: input
            .image_url
            .as_deref()
            .map(|v| require_nonempty("Image URL", v))
            .transpose()?,
    })
}
