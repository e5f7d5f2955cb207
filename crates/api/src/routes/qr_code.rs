//! Route definitions for the `/qr-codes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::qr_code;
use crate::state::AppState;

/// Routes mounted at `/qr-codes`.
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
        .route("/", get(qr_code::list).post(qr_code::create))
        .route(
            "/{id}",
            get(qr_code::get_by_id)
                .put(qr_code::update)
                .patch(qr_code::update)
                .delete(qr_code::delete),
        )
}
