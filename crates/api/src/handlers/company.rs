//! Handlers for the `/companies` directory.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use showrunner_core::error::CoreError;
use showrunner_core::records::{require_text, require_text_opt, trim_list, trim_opt};
use showrunner_core::staff::normalize_staff;
use showrunner_core::types::DbId;
use showrunner_db::models::company::{CreateCompany, UpdateCompany};
use showrunner_db::repositories::CompanyRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Company";

/// GET /api/companies
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = CompanyRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/companies/{id}
///
/// Soft-deleted rows are still returned, flagged `is_deleted`.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = CompanyRepo::find_by_id_including_deleted(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: item }))
}

/// POST /api/companies
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCompany>,
) -> AppResult<impl IntoResponse> {
    let input = normalize_create(&input)?;
    let item = CompanyRepo::create(&state.pool, &input, Some(admin.user_id)).await?;

    tracing::info!(user_id = admin.user_id, company_id = item.id, "Company created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT|PATCH /api/companies/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCompany>,
) -> AppResult<impl IntoResponse> {
    let input = normalize_update(&input)?;
    let item = CompanyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(user_id = admin.user_id, company_id = id, "Company updated");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/companies/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !CompanyRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(user_id = admin.user_id, company_id = id, "Company deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn normalize_create(input: &CreateCompany) -> Result<CreateCompany, CoreError> {
    Ok(CreateCompany {
        name: require_text("Name", &input.name)?,
        city: trim_opt(input.city.as_deref()),
        description: trim_opt(input.description.as_deref()),
        file_links: trim_list(&input.file_links),
        image_urls: trim_list(&input.image_urls),
        staff: normalize_staff(&input.staff)?,
    })
}

fn normalize_update(input: &UpdateCompany) -> Result<UpdateCompany, CoreError> {
    Ok(UpdateCompany {
        name: require_text_opt("Name", input.name.as_deref())?,
        city: trim_opt(input.city.as_deref()),
        description: trim_opt(input.description.as_deref()),
        file_links: input.file_links.as_deref().map(trim_list),
        image_urls: input.image_urls.as_deref().map(trim_list),
        staff: input.staff.as_deref().map(normalize_staff).transpose()?,
    })
}
