//! Handlers for the `/ticketing-platforms` reference list.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use showrunner_core::error::CoreError;
use showrunner_core::records::{require_text, require_text_opt, trim_opt, trim_url_opt};
use showrunner_core::types::DbId;
use showrunner_db::models::ticketing_platform::{CreateTicketingPlatform, UpdateTicketingPlatform};
use showrunner_db::repositories::TicketingPlatformRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Ticketing platform";

/// GET /api/ticketing-platforms
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = TicketingPlatformRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/ticketing-platforms/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = TicketingPlatformRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: item }))
}

/// POST /api/ticketing-platforms
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateTicketingPlatform>,
) -> AppResult<impl IntoResponse> {
    let input = normalize_create(&input)?;
    let item = TicketingPlatformRepo::create(&state.pool, &input, Some(admin.user_id)).await?;

    tracing::info!(user_id = admin.user_id, ticketing_platform_id = item.id, "Ticketing platform created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT|PATCH /api/ticketing-platforms/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTicketingPlatform>,
) -> AppResult<impl IntoResponse> {
    let input = normalize_update(&input)?;
    let item = TicketingPlatformRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(user_id = admin.user_id, ticketing_platform_id = id, "Ticketing platform updated");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/ticketing-platforms/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !TicketingPlatformRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(user_id = admin.user_id, ticketing_platform_id = id, "Ticketing platform deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn normalize_create(input: &CreateTicketingPlatform) -> Result<CreateTicketingPlatform, CoreError> {
    Ok(CreateTicketingPlatform {
        name: require_text("Name", &input.name)?,
        website_url: trim_url_opt("Website URL", input.website_url.as_deref())?,
        notes: trim_opt(input.notes.as_deref()),
    })
}

fn normalize_update(input: &UpdateTicketingPlatform) -> Result<UpdateTicketingPlatform, CoreError> {
    Ok(UpdateTicketingPlatform {
        name: require_text_opt("Name", input.name.as_deref())?,
        website_url: trim_url_opt("Website URL", input.website_url.as_deref())?,
        notes: trim_opt(input.notes.as_deref()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn website_must_be_http() {
        let input = CreateTicketingPlatform {
            name: " KKTIX ".to_string(),
            website_url: Some("kktix.com".to_string()),
            notes: None,
        };
        assert!(normalize_create(&input).is_err());

        let input = CreateTicketingPlatform {
            website_url: Some(" https://kktix.com ".to_string()),
            ..input
        };
        let normalized = normalize_create(&input).unwrap();
        assert_eq!(normalized.name, "KKTIX");
        assert_eq!(normalized.website_url.as_deref(), Some("https://kktix.com"));
    }
}
