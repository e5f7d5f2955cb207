//! Route definitions for the `/media-packages` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::media_package;
use crate::state::AppState;

/// Routes mounted at `/media-packages`.
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
        .route("/", get(media_package::list).post(media_package::create))
        .route(
            "/{id}",
            get(media_package::get_by_id)
                .put(media_package::update)
                .patch(media_package::update)
                .delete(media_package::delete),
        )
}
