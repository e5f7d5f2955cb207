//! Handlers for the `/venues` directory.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use showrunner_core::error::CoreError;
use showrunner_core::records::{require_text, require_text_opt, trim_list, trim_opt};
use showrunner_core::staff::normalize_staff;
use showrunner_core::types::DbId;
use showrunner_db::models::venue::{CreateVenue, UpdateVenue};
use showrunner_db::repositories::VenueRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Venue";

/// GET /api/venues
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = VenueRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/venues/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: item }))
}

/// POST /api/venues
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateVenue>,
) -> AppResult<impl IntoResponse> {
    let input = normalize_create(&input)?;
    let item = VenueRepo::create(&state.pool, &input, Some(admin.user_id)).await?;

    tracing::info!(user_id = admin.user_id, venue_id = item.id, "Venue created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT|PATCH /api/venues/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVenue>,
) -> AppResult<impl IntoResponse> {
    let input = normalize_update(&input)?;
    let item = VenueRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(user_id = admin.user_id, venue_id = id, "Venue updated");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/venues/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !VenueRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(user_id = admin.user_id, venue_id = id, "Venue deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn normalize_create(input: &CreateVenue) -> Result<CreateVenue, CoreError> {
    Ok(CreateVenue {
        name: require_text("Name", &input.name)?,
        city: trim_opt(input.city.as_deref()),
        address: trim_opt(input.address.as_deref()),
        intro: trim_opt(input.intro.as_deref()),
        file_links: trim_list(&input.file_links),
        image_urls: trim_list(&input.image_urls),
        staff: normalize_staff(&input.staff)?,
    })
}

fn normalize_update(input: &UpdateVenue) -> Result<UpdateVenue, CoreError> {
    Ok(UpdateVenue {
        name: require_text_opt("Name", input.name.as_deref())?,
        city: trim_opt(input.city.as_deref()),
        address: trim_opt(input.address.as_deref()),
        intro: trim_opt(input.intro.as_deref()),
        file_links: input.file_links.as_deref().map(trim_list),
        image_urls: input.image_urls.as_deref().map(trim_list),
        staff: input.staff.as_deref().map(normalize_staff).transpose()?,
    })
}

#[cfg(test)]
mod tests {
    use showrunner_core::staff::StaffMember;

    use super::*;

    #[test]
    fn create_trims_everything() {
        let input = CreateVenue {
            name: "  Legacy Taipei ".to_string(),
            city: Some(" Taipei ".to_string()),
            address: None,
            intro: None,
            file_links: vec![" https://a ".to_string(), "".to_string()],
            image_urls: vec![],
            staff: vec![StaffMember {
                name: " Chen ".to_string(),
                ..Default::default()
            }],
        };
        let out = normalize_create(&input).unwrap();
        assert_eq!(out.name, "Legacy Taipei");
        assert_eq!(out.city.as_deref(), Some("Taipei"));
        assert_eq!(out.file_links, vec!["https://a"]);
        assert_eq!(out.staff[0].name, "Chen");
    }

    #[test]
    fn update_rejects_blank_name() {
        let input = UpdateVenue {
            name: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(normalize_update(&input).is_err());
    }
}
