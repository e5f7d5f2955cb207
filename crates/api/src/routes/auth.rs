//! Route definitions for the `/auth` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /login             -> login (public)
/// POST /logout            -> logout (public, clears cookie)
/// GET  /me                -> me
/// PUT  /me/language       -> update_language
/// POST /change-password   -> change_password
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
        .route("/me/language", put(auth::update_language))
        .route("/change-password", post(auth::change_password))
}
