//! Route definitions for `/upload`.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use showrunner_core::upload::MAX_UPLOAD_BYTES;

use crate::handlers::upload;
use crate::state::AppState;

/// Headroom for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Routes mounted at `/upload`.
///
/// ```text
/// POST   /         -> upload (multipart `file`)
/// DELETE /?key=    -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(upload::upload).delete(upload::delete))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD))
}
