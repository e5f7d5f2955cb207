//! Session extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use showrunner_core::error::CoreError;
use showrunner_core::types::DbId;

use crate::auth::cookie::session_token;
use crate::auth::jwt::{verify_session, SessionClaims};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caller, decoded from the `auth-token` cookie or an
/// `Authorization: Bearer` header.
///
/// Identity comes from the signed token alone; the users table is not
/// consulted per request.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub username: String,
    pub is_admin: bool,
    pub claims: SessionClaims,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = session_token(&parts.headers)
            .and_then(|token| verify_session(&token, &state.config.jwt))
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Unauthorized".into())))?;

        Ok(AuthUser {
            user_id: claims.sub,
            username: claims.username.clone(),
            is_admin: claims.is_admin,
            claims,
        })
    }
}
