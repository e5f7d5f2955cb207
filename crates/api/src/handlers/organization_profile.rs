//! Handlers for the `/organization-profile` singleton (admin only).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use showrunner_core::records::{trim_opt, trim_url_opt};
use showrunner_db::models::organization_profile::UpdateOrganizationProfile;
use showrunner_db::repositories::OrganizationProfileRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/organization-profile
///
/// `data` is `null` until the profile is first saved.
pub async fn get(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let profile = OrganizationProfileRepo::get(&state.pool).await?;
    Ok(Json(DataResponse { data: profile }))
}

/// PUT /api/organization-profile
pub async fn upsert(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpdateOrganizationProfile>,
) -> AppResult<impl IntoResponse> {
    let input = UpdateOrganizationProfile {
        name: trim_opt(input.name.as_deref()),
        description: trim_opt(input.description.as_deref()),
        logo_url: trim_opt(input.logo_url.as_deref()),
        website: trim_url_opt("Website", input.website.as_deref())?,
        email: trim_opt(input.email.as_deref()),
        phone: trim_opt(input.phone.as_deref()),
        address: trim_opt(input.address.as_deref()),
    };
    let profile = OrganizationProfileRepo::upsert(&state.pool, &input, Some(admin.user_id)).await?;

    tracing::info!(user_id = admin.user_id, "Organization profile saved");

    Ok(Json(DataResponse { data: profile }))
}
