//! Route definitions for the `/communities` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::community;
use crate::state::AppState;

/// Routes mounted at `/communities`.
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
        .route("/", get(community::list).post(community::create))
        .route(
            "/{id}",
            get(community::get_by_id)
                .put(community::update)
                .patch(community::update)
                .delete(community::delete),
        )
}
