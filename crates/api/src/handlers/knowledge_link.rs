//! Handlers for the global `/knowledge-links` map.
//!
//! Links attach knowledge articles to a workflow section for every
//! production at once. Item bodies are fetched separately through
//! `/knowledge-base/batch`.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use showrunner_core::knowledge::validate_section;
use showrunner_db::models::knowledge_link::CreateKnowledgeLink;
use showrunner_db::repositories::{KnowledgeItemRepo, KnowledgeLinkRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::KnowledgeLinkParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/knowledge-links
///
/// Returns `{section: [item ids]}` with ids in link order.
pub async fn list(_auth: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let grouped = KnowledgeLinkRepo::list_grouped(&state.pool).await?;
    Ok(Json(DataResponse { data: grouped }))
}

/// POST /api/knowledge-links
pub async fn add(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateKnowledgeLink>,
) -> AppResult<impl IntoResponse> {
    validate_section(&input.section)?;

    KnowledgeItemRepo::find_by_id(&state.pool, input.knowledge_item_id)
        .await?
        .ok_or(AppError::not_found("Knowledge item", input.knowledge_item_id))?;

    let link = KnowledgeLinkRepo::add(
        &state.pool,
        &input.section,
        input.knowledge_item_id,
        Some(admin.user_id),
    )
    .await?
    .ok_or_else(|| {
        AppError::BadRequest(format!(
            "Knowledge item {} is already linked to {}",
            input.knowledge_item_id, input.section
        ))
    })?;

    tracing::info!(
        user_id = admin.user_id,
        section = %link.section,
        knowledge_item_id = link.knowledge_item_id,
        "Knowledge item linked",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: link })))
}

/// DELETE /api/knowledge-links?section=&knowledge_item_id=
///
/// Idempotent: removing an absent link still succeeds.
pub async fn remove(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<KnowledgeLinkParams>,
) -> AppResult<StatusCode> {
    validate_section(&params.section)?;

    let removed =
        KnowledgeLinkRepo::remove(&state.pool, &params.section, params.knowledge_item_id).await?;

    tracing::info!(
        user_id = admin.user_id,
        section = %params.section,
        knowledge_item_id = params.knowledge_item_id,
        removed,
        "Knowledge link removed",
    );

    Ok(StatusCode::NO_CONTENT)
}
