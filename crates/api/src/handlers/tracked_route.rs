//! Handlers for tracked redirect routes and the public click tracker.

use axum::extract::{Path, Query, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use showrunner_core::records::{require_text, require_text_opt};
use showrunner_core::tracking::{tracking_url, validate_adjustment, validate_redirect_url};
use showrunner_core::types::DbId;
use showrunner_db::models::route::{CreateRoute, Route, UpdateRoute};
use showrunner_db::repositories::{AppConfigRepo, MediaRepo, RouteRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::MediaIdParam;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Route";

/// A route together with the public link that counts clicks on it.
#[derive(Debug, Serialize)]
pub struct RouteView {
    #[serde(flatten)]
    pub route: Route,
    pub tracking_url: String,
}

/// GET /api/routes?media_id=
pub async fn list_by_media(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<MediaIdParam>,
) -> AppResult<impl IntoResponse> {
    let routes = RouteRepo::list_by_media(&state.pool, params.media_id).await?;
    let base_url = AppConfigRepo::get_or_create(&state.pool).await?.base_url;

    let data: Vec<RouteView> = routes
        .into_iter()
        .map(|route| view(&base_url, route))
        .collect();
    Ok(Json(DataResponse { data }))
}

/// GET /api/routes/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let route = RouteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    let base_url = AppConfigRepo::get_or_create(&state.pool).await?.base_url;
    Ok(Json(DataResponse {
        data: view(&base_url, route),
    }))
}

/// POST /api/routes
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateRoute>,
) -> AppResult<impl IntoResponse> {
    MediaRepo::find_by_id(&state.pool, input.media_id)
        .await?
        .ok_or(AppError::not_found("Media", input.media_id))?;

    let input = CreateRoute {
        media_id: input.media_id,
        name: require_text("Name", &input.name)?,
        redirect_url: validate_redirect_url(&input.redirect_url)?,
    };
    let route = RouteRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = admin.user_id,
        media_id = route.media_id,
        route_id = route.id,
        "Route created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: route })))
}

/// PATCH /api/routes/{id}
///
/// `adjustment` is a signed correction to the click count; the result never
/// drops below zero.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRoute>,
) -> AppResult<impl IntoResponse> {
    let name = require_text_opt("Name", input.name.as_deref())?;
    let redirect_url = input
        .redirect_url
        .as_deref()
        .map(validate_redirect_url)
        .transpose()?;
    let adjustment = input.adjustment.map(validate_adjustment).transpose()?;

    let route = RouteRepo::update(
        &state.pool,
        id,
        name.as_deref(),
        redirect_url.as_deref(),
        adjustment,
    )
    .await?
    .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(
        user_id = admin.user_id,
        route_id = id,
        adjustment = ?adjustment,
        click_count = route.click_count,
        "Route updated",
    );

    Ok(Json(DataResponse { data: route }))
}

/// DELETE /api/routes/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !RouteRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(user_id = admin.user_id, route_id = id, "Route deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/track/{route_id}
///
/// Public. Counts the visit and answers 302 to the stored destination.
pub async fn track(
    State(state): State<AppState>,
    Path(route_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let destination = RouteRepo::track_click(&state.pool, route_id)
        .await?
        .ok_or(AppError::not_found(ENTITY, route_id))?;

    tracing::debug!(route_id, "Tracked click");

    Ok((StatusCode::FOUND, [(LOCATION, destination)]))
}

fn view(base_url: &str, route: Route) -> RouteView {
    RouteView {
        tracking_url: tracking_url(base_url, route.id),
        route,
    }
}
