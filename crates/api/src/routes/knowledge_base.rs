//! Route definitions for the `/knowledge-base` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::knowledge_base;
use crate::state::AppState;

/// Routes mounted at `/knowledge-base`.
///
/// ```text
/// GET    /             -> list
/// POST   /             -> create (admin)
/// GET    /batch?ids=   -> batch
/// GET    /{id}         -> get_by_id
/// PUT    /{id}         -> update (admin)
/// PATCH  /{id}         -> update (admin)
/// DELETE /{id}         -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(knowledge_base::list).post(knowledge_base::create))
        .route("/batch", get(knowledge_base::batch))
        .route(
            "/{id}",
            get(knowledge_base::get_by_id)
                .put(knowledge_base::update)
                .patch(knowledge_base::update)
                .delete(knowledge_base::delete),
        )
}
