//! Route definitions for the `/venues` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::venue;
use crate::state::AppState;

/// Routes mounted at `/venues`.
///
/// ```text
/// GET    /             -> list
/// POST   /             -> create (admin)
/// GET    /{id}         -> get_by_id
/// PUT    /{id}         -> update (admin)
/// PATCH  /{id}         -> update (admin)
/// DELETE /{id}         -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(venue::list).post(venue::create))
        .route(
            "/{id}",
            get(venue::get_by_id)
                .put(venue::update)
                .patch(venue::update)
                .delete(venue::delete),
        )
}
