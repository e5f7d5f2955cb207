//! Route definitions for the `/knowledge-links` map.

use axum::routing::get;
use axum::Router;

use crate::handlers::knowledge_link;
use crate::state::AppState;

/// Routes mounted at `/knowledge-links`.
///
/// ```text
/// GET    /                                    -> list
/// POST   /                                    -> add (admin)
/// DELETE /?section=&knowledge_item_id=        -> remove (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(knowledge_link::list)
            .post(knowledge_link::add)
            .delete(knowledge_link::remove),
    )
}
