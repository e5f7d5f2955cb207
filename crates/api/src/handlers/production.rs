//! Handlers for the `/productions` resource.
//!
//! A production carries one sub-document per workflow step plus a map of
//! section assignments. Edits arrive as flat path/value PATCH bodies and are
//! checked against the step schemas before they reach the database.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{Map, Value};
use showrunner_core::production::{self, compute_progress, normalize_steps, plan_patch};
use showrunner_core::types::DbId;
use showrunner_db::models::production::{CreateProduction, Production};
use showrunner_db::repositories::{ProductionRepo, StepConfigRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Production";

/// GET /api/productions
pub async fn list(_auth: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let productions = ProductionRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: productions }))
}

/// POST /api/productions
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateProduction>,
) -> AppResult<impl IntoResponse> {
    let title = production::resolve_title(input.title.as_deref())?;
    let created = ProductionRepo::create(&state.pool, &title, Some(admin.user_id)).await?;

    tracing::info!(
        user_id = admin.user_id,
        production_id = created.id,
        "Production created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/productions/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = find(&state, id).await?;
    Ok(Json(DataResponse {
        data: normalized(found),
    }))
}

/// PATCH /api/productions/{id}
///
/// Any signed-in user may edit step content and assignments. Keys of the
/// body are mutable paths such as `step1_contract.link` or
/// `assignments.step11`; anything outside the allow-list is a 400.
pub async fn patch(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<Map<String, Value>>,
) -> AppResult<impl IntoResponse> {
    let patch = plan_patch(&body)?;

    if patch.is_empty() {
        let found = find(&state, id).await?;
        return Ok(Json(DataResponse {
            data: normalized(found),
        }));
    }

    let assignees = patch.assigned_user_ids();
    if !UserRepo::all_exist(&state.pool, &assignees).await? {
        return Err(AppError::BadRequest(
            "Assigned user does not exist".into(),
        ));
    }

    let updated = ProductionRepo::apply_patch(&state.pool, id, &patch)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(
        user_id = auth.user_id,
        production_id = id,
        paths = body.len(),
        "Production updated",
    );

    Ok(Json(DataResponse {
        data: normalized(updated),
    }))
}

/// DELETE /api/productions/{id}
///
/// Hard delete. Knowledge links are global and are left alone.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ProductionRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(user_id = admin.user_id, production_id = id, "Production deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/productions/{id}/progress
///
/// Server-derived completion over the enabled steps of the current step
/// configuration. The stored `completion_percentage` is not modified.
pub async fn progress(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = normalized(find(&state, id).await?);
    let config = StepConfigRepo::get_reconciled(&state.pool).await?;

    let report = compute_progress(&found.steps, &config.steps);
    Ok(Json(DataResponse { data: report }))
}

async fn find(state: &AppState, id: DbId) -> AppResult<Production> {
    ProductionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))
}

fn normalized(mut production: Production) -> Production {
    normalize_steps(&mut production.steps);
    production
}
