//! Handlers for the `/events` resource.
//!
//! Deleting an event removes its media and their routes in one transaction.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use showrunner_core::records::{require_text, require_text_opt, trim_opt};
use showrunner_core::types::DbId;
use showrunner_db::models::event::{CreateEvent, UpdateEvent};
use showrunner_db::repositories::EventRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::IdParam;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Event";

/// GET /api/events
pub async fn list(_auth: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let events = EventRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: events }))
}

/// GET /api/events/stats
///
/// Per-event media count, route count and total clicks.
pub async fn stats(_auth: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = EventRepo::stats(&state.pool).await?;
    Ok(Json(DataResponse { data: stats }))
}

/// GET /api/events/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: event }))
}

/// POST /api/events
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateEvent>,
) -> AppResult<impl IntoResponse> {
    let input = CreateEvent {
        name: require_text("Name", &input.name)?,
        event_date: input.event_date,
        description: trim_opt(input.description.as_deref()),
    };
    let event = EventRepo::create(&state.pool, &input, Some(admin.user_id)).await?;

    tracing::info!(user_id = admin.user_id, event_id = event.id, "Event created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: event })))
}

/// PATCH /api/events/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<impl IntoResponse> {
    let input = UpdateEvent {
        name: require_text_opt("Name", input.name.as_deref())?,
        event_date: input.event_date,
        description: trim_opt(input.description.as_deref()),
    };
    let event = EventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(user_id = admin.user_id, event_id = id, "Event updated");

    Ok(Json(DataResponse { data: event }))
}

/// DELETE /api/events/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    delete_cascade(&state, admin.user_id, id).await
}

/// DELETE /api/events?id=
pub async fn delete_by_query(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<IdParam>,
) -> AppResult<StatusCode> {
    delete_cascade(&state, admin.user_id, params.id).await
}

async fn delete_cascade(state: &AppState, user_id: DbId, id: DbId) -> AppResult<StatusCode> {
    if !EventRepo::delete_cascade(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(user_id, event_id = id, "Event deleted with media and routes");

    Ok(StatusCode::NO_CONTENT)
}
