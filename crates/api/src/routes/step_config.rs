use axum::routing::get;
use axum::Router;

use crate::handlers::step_config;
use crate::state::AppState;

/// Routes mounted at `/production-step-config`.
///
/// ```text
/// GET /   -> get
/// PUT /   -> update (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(step_config::get).put(step_config::update))
}
