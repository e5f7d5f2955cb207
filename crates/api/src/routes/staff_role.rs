//! Route definitions for the `/staff-roles` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::staff_role;
use crate::state::AppState;

/// Routes mounted at `/staff-roles`.
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
        .route("/", get(staff_role::list).post(staff_role::create))
        .route(
            "/{id}",
            get(staff_role::get_by_id)
                .put(staff_role::update)
                .patch(staff_role::update)
                .delete(staff_role::delete),
        )
}
