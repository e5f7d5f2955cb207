//! Route definitions for the `/ticketing-platforms` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::ticketing_platform;
use crate::state::AppState;

/// Routes mounted at `/ticketing-platforms`.
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
        .route("/", get(ticketing_platform::list).post(ticketing_platform::create))
        .route(
            "/{id}",
            get(ticketing_platform::get_by_id)
                .put(ticketing_platform::update)
                .patch(ticketing_platform::update)
                .delete(ticketing_platform::delete),
        )
}
