//! Route definitions for events, their media, and tracked routes.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{event, media, tracked_route};
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create (admin)
/// DELETE /?id=      -> delete_by_query (admin)
/// GET    /stats     -> stats
/// GET    /{id}      -> get_by_id
/// PATCH  /{id}      -> update (admin)
/// DELETE /{id}      -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(event::list)
                .post(event::create)
                .delete(event::delete_by_query),
        )
        .route("/stats", get(event::stats))
        .route(
            "/{id}",
            get(event::get_by_id)
                .patch(event::update)
                .delete(event::delete),
        )
}

/// Routes mounted at `/media`.
///
/// ```text
/// GET    /?event_id=   -> list_by_event
/// POST   /             -> create (admin)
/// PATCH  /{id}         -> update (admin)
/// DELETE /{id}         -> delete (admin)
/// ```
pub fn media_router() -> Router<AppState> {
    Router::new()
        .route("/", get(media::list_by_event).post(media::create))
        .route("/{id}", patch(media::update).delete(media::delete))
}

/// Routes mounted at `/routes`.
///
/// ```text
/// GET    /?media_id=   -> list_by_media
/// POST   /             -> create (admin)
/// GET    /{id}         -> get_by_id
/// PATCH  /{id}         -> update (admin)
/// DELETE /{id}         -> delete (admin)
/// ```
pub fn tracked_route_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(tracked_route::list_by_media).post(tracked_route::create),
        )
        .route(
            "/{id}",
            get(tracked_route::get_by_id)
                .patch(tracked_route::update)
                .delete(tracked_route::delete),
        )
}

/// Routes mounted at `/track`. Public.
///
/// ```text
/// GET /{route_id}   -> track (302)
/// ```
pub fn track_router() -> Router<AppState> {
    Router::new().route("/{route_id}", get(tracked_route::track))
}
