//! Handlers for the `/staff-roles` reference list.
//!
//! Role names are referenced by text from embedded staff lists, so renaming
//! a role does not rewrite existing entries.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use showrunner_core::error::CoreError;
use showrunner_core::records::{require_text, require_text_opt, trim_opt};
use showrunner_core::types::DbId;
use showrunner_db::models::staff_role::{CreateStaffRole, UpdateStaffRole};
use showrunner_db::repositories::StaffRoleRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Staff role";

/// GET /api/staff-roles
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = StaffRoleRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/staff-roles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = StaffRoleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: item }))
}

/// POST /api/staff-roles
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateStaffRole>,
) -> AppResult<impl IntoResponse> {
    let input = normalize_create(&input)?;
    let item = StaffRoleRepo::create(&state.pool, &input, Some(admin.user_id)).await?;

    tracing::info!(user_id = admin.user_id, staff_role_id = item.id, "Staff role created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT|PATCH /api/staff-roles/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStaffRole>,
) -> AppResult<impl IntoResponse> {
    let input = normalize_update(&input)?;
    let item = StaffRoleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(user_id = admin.user_id, staff_role_id = id, "Staff role updated");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/staff-roles/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !StaffRoleRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(user_id = admin.user_id, staff_role_id = id, "Staff role deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn normalize_create(input: &CreateStaffRole) -> Result<CreateStaffRole, CoreError> {
    Ok(CreateStaffRole {
        name: require_text("Name", &input.name)?,
        description: trim_opt(input.description.as_deref()),
    })
}

fn normalize_update(input: &UpdateStaffRole) -> Result<UpdateStaffRole, CoreError> {
    Ok(UpdateStaffRole {
        name: require_text_opt("Name", input.name.as_deref())?,
        description: trim_opt(input.description.as_deref()),
    })
}
