//! Route definitions for the `/admin-logos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin_logo;
use crate::state::AppState;

/// Routes mounted at `/admin-logos`.
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
        .route("/", get(admin_logo::list).post(admin_logo::create))
        .route(
            "/{id}",
            get(admin_logo::get_by_id)
                .put(admin_logo::update)
                .patch(admin_logo::update)
                .delete(admin_logo::delete),
        )
}
