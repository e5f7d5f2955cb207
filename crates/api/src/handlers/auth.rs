//! Handlers for the `/auth` resource (login, logout, session, own account).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use showrunner_core::error::CoreError;
use showrunner_core::users::validate_language;
use showrunner_db::models::user::{UpdateUser, User, UserResponse};
use showrunner_db::repositories::UserRepo;

use crate::auth::cookie::{clear_session_cookie, session_cookie};
use crate::auth::jwt::issue_session;
use crate::auth::password::{
    hash_password_blocking, validate_password_strength, verify_password_blocking,
};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `PUT /auth/me/language`.
#[derive(Debug, Deserialize)]
pub struct LanguageRequest {
    pub language: String,
}

/// Request body for `POST /auth/change-password`.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Unknown usernames and wrong passwords produce the same 401. A correct
/// password on a deactivated account is 403.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Response> {
    let username = input.username.trim().to_lowercase();

    let user = UserRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    let password_valid = verify_password_blocking(input.password, user.password_hash.clone())
        .await
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is disabled".into(),
        )));
    }

    UserRepo::record_login(&state.pool, user.id).await?;

    tracing::info!(user_id = user.id, username = %user.username, "User logged in");

    session_response(&state, &user)
}

/// POST /api/auth/logout
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [(SET_COOKIE, clear_session_cookie(state.config.cookie_secure))],
    )
}

/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse { data: auth.claims }))
}

/// PUT /api/auth/me/language
///
/// Persists the preference and re-issues the session so the new language
/// is carried in the token.
pub async fn update_language(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<LanguageRequest>,
) -> AppResult<Response> {
    let language = input.language.trim().to_string();
    validate_language(&language)?;

    let update = UpdateUser {
        language_preference: Some(language),
        ..Default::default()
    };
    let user = UserRepo::update(&state.pool, auth.user_id, &update)
        .await?
        .ok_or(AppError::not_found("User", auth.user_id))?;

    tracing::info!(
        user_id = user.id,
        language = %user.language_preference,
        "Language preference updated",
    );

    session_response(&state, &user)
}

/// POST /api/auth/change-password
pub async fn change_password(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<StatusCode> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::not_found("User", auth.user_id))?;

    let current_valid = verify_password_blocking(input.current_password, user.password_hash)
        .await
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !current_valid {
        return Err(AppError::BadRequest("Current password is incorrect".into()));
    }

    validate_password_strength(&input.new_password).map_err(AppError::BadRequest)?;

    let hash = hash_password_blocking(input.new_password)
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    UserRepo::update_password(&state.pool, user.id, &hash).await?;

    tracing::info!(user_id = user.id, "Password changed");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Sign a session for `user`, set it as the cookie and return the user.
fn session_response(state: &AppState, user: &User) -> AppResult<Response> {
    let token = issue_session(user, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let cookie: HeaderValue = session_cookie(
        &token,
        state.config.jwt.session_max_age_secs(),
        state.config.cookie_secure,
    );

    Ok((
        [(SET_COOKIE, cookie)],
        Json(DataResponse {
            data: UserResponse::from(user),
        }),
    )
        .into_response())
}
