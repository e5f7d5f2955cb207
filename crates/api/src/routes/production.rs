//! Route definitions for the `/productions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::production;
use crate::state::AppState;

/// Routes mounted at `/productions`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create (admin)
/// GET    /{id}            -> get_by_id
/// PATCH  /{id}            -> patch
/// DELETE /{id}            -> delete (admin)
/// GET    /{id}/progress   -> progress
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(production::list).post(production::create))
        .route(
            "/{id}",
            get(production::get_by_id)
                .patch(production::patch)
                .delete(production::delete),
        )
        .route("/{id}/progress", get(production::progress))
}
