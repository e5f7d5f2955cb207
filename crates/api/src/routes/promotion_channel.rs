//! Route definitions for the `/promotion-channels` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::promotion_channel;
use crate::state::AppState;

/// Routes mounted at `/promotion-channels`.
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
        .route("/", get(promotion_channel::list).post(promotion_channel::create))
        .route(
            "/{id}",
            get(promotion_channel::get_by_id)
                .put(promotion_channel::update)
                .patch(promotion_channel::update)
                .delete(promotion_channel::delete),
        )
}
