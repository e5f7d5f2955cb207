//! Handlers for the `/knowledge-base` resource.
//!
//! Articles are plain records; their attachment to workflow sections lives
//! in [`crate::handlers::knowledge_link`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use showrunner_core::error::CoreError;
use showrunner_core::records::{normalize_tags, require_text, require_text_opt, trim_opt};
use showrunner_core::types::DbId;
use showrunner_db::models::knowledge_item::{CreateKnowledgeItem, UpdateKnowledgeItem};
use showrunner_db::repositories::KnowledgeItemRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::IdListParam;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Knowledge item";

/// GET /api/knowledge-base
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = KnowledgeItemRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/knowledge-base/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = KnowledgeItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: item }))
}

/// GET /api/knowledge-base/batch?ids=1,2,3
///
/// Resolve live articles in the requested order. Unknown or deleted ids are
/// skipped.
pub async fn batch(
    State(state): State<AppState>,
    Query(params): Query<IdListParam>,
) -> AppResult<impl IntoResponse> {
    let ids = params
        .parse()
        .map_err(|bad| AppError::BadRequest(format!("Invalid id '{bad}' in ids")))?;
    let items = KnowledgeItemRepo::find_many(&state.pool, &ids).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /api/knowledge-base
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateKnowledgeItem>,
) -> AppResult<impl IntoResponse> {
    let input = normalize_create(&input)?;
    let item = KnowledgeItemRepo::create(&state.pool, &input, Some(admin.user_id)).await?;

    tracing::info!(user_id = admin.user_id, knowledge_item_id = item.id, "Knowledge item created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT|PATCH /api/knowledge-base/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateKnowledgeItem>,
) -> AppResult<impl IntoResponse> {
    let input = normalize_update(&input)?;
    let item = KnowledgeItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(user_id = admin.user_id, knowledge_item_id = id, "Knowledge item updated");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/knowledge-base/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !KnowledgeItemRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(user_id = admin.user_id, knowledge_item_id = id, "Knowledge item deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn normalize_create(input: &CreateKnowledgeItem) -> Result<CreateKnowledgeItem, CoreError> {
    Ok(CreateKnowledgeItem {
        title: require_text("Title", &input.title)?,
        description_html: trim_opt(input.description_html.as_deref()),
        image_url: trim_opt(input.image_url.as_deref()),
        tags: normalize_tags(&input.tags),
    })
}

fn normalize_update(input: &UpdateKnowledgeItem) -> Result<UpdateKnowledgeItem, CoreError> {
    Ok(UpdateKnowledgeItem {
        title: require_text_opt("Title", input.title.as_deref())?,
        description_html: trim_opt(input.description_html.as_deref()),
        image_url: trim_opt(input.image_url.as_deref()),
        tags: input.tags.as_deref().map(normalize_tags),
    })
}
