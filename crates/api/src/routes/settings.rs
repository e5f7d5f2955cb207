//! Route definitions for the organization profile and app config singletons.

use axum::routing::get;
use axum::Router;

use crate::handlers::{app_config, organization_profile};
use crate::state::AppState;

/// Routes mounted at `/organization-profile`. Admin only.
///
/// ```text
/// GET /   -> get
/// PUT /   -> upsert
/// ```
pub fn organization_profile_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(organization_profile::get).put(organization_profile::upsert),
    )
}

/// Routes mounted at `/config`.
///
/// ```text
/// GET /   -> get (public)
/// PUT /   -> update (admin)
/// ```
pub fn app_config_router() -> Router<AppState> {
    Router::new().route("/", get(app_config::get).put(app_config::update))
}
