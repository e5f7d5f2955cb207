//! Handlers for the `/cities` reference list.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use showrunner_core::error::CoreError;
use showrunner_core::records::{require_text, require_text_opt, trim_opt};
use showrunner_core::types::DbId;
use showrunner_db::models::city::{CreateCity, UpdateCity};
use showrunner_db::repositories::CityRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "City";

/// GET /api/cities
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = CityRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/cities/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = CityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: item }))
}

/// POST /api/cities
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCity>,
) -> AppResult<impl IntoResponse> {
    let input = normalize_create(&input)?;
    let item = CityRepo::create(&state.pool, &input, Some(admin.user_id)).await?;

    tracing::info!(user_id = admin.user_id, city_id = item.id, "City created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT|PATCH /api/cities/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCity>,
) -> AppResult<impl IntoResponse> {
    let input = normalize_update(&input)?;
    let item = CityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(user_id = admin.user_id, city_id = id, "City updated");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/cities/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !CityRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(user_id = admin.user_id, city_id = id, "City deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn normalize_create(input: &CreateCity) -> Result<CreateCity, CoreError> {
    Ok(CreateCity {
        name: require_text("Name", &input.name)?,
        region: trim_opt(input.region.as_deref()),
    })
}

fn normalize_update(input: &UpdateCity) -> Result<UpdateCity, CoreError> {
    Ok(UpdateCity {
        name: require_text_opt("Name", input.name.as_deref())?,
        region: trim_opt(input.region.as_deref()),
    })
}
