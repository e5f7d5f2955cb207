//! Handlers for the `/users` resource (admin only).
//!
//! The bootstrap `admin` account is protected: nobody can delete it, and only
//! `admin` itself may deactivate or demote it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use showrunner_core::types::DbId;
use showrunner_core::users::{
    check_deletable, check_protected_update, normalize_username, validate_display_name,
    validate_language, LANGUAGE_EN,
};
use showrunner_db::models::user::{CreateUser, UpdateUser, UserResponse};
use showrunner_db::repositories::UserRepo;

use crate::auth::password::{hash_password_blocking, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub display_name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    pub language_preference: Option<String>,
}

/// Request body for `PATCH /users/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub display_name: Option<String>,
    pub is_admin: Option<bool>,
    pub is_active: Option<bool>,
    pub language_preference: Option<String>,
    pub password: Option<String>,
}

/// GET /api/users
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list(&state.pool).await?;
    let data: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
    Ok(Json(DataResponse { data }))
}

/// GET /api/users/{id}
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("User", id))?;
    Ok(Json(DataResponse {
        data: UserResponse::from(&user),
    }))
}

/// POST /api/users
///
/// A duplicate username surfaces as 409 through the unique constraint.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<impl IntoResponse> {
    let username = normalize_username(&input.username)?;
    validate_password_strength(&input.password).map_err(AppError::BadRequest)?;

    let display_name = match input.display_name.as_deref() {
        Some(name) => validate_display_name(name)?,
        None => username.clone(),
    };
    let language_preference = input
        .language_preference
        .map(|l| l.trim().to_string())
        .unwrap_or_else(|| LANGUAGE_EN.to_string());
    validate_language(&language_preference)?;

    let password_hash = hash_password_blocking(input.password)
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username,
            password_hash,
            display_name,
            is_admin: input.is_admin,
            language_preference,
        },
    )
    .await?;

    tracing::info!(
        user_id = admin.user_id,
        created_user_id = user.id,
        username = %user.username,
        "User created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse::from(&user),
        }),
    ))
}

/// PATCH /api/users/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUserRequest>,
) -> AppResult<impl IntoResponse> {
    let target = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("User", id))?;

    check_protected_update(
        &target.username,
        &admin.username,
        input.is_active == Some(false),
        input.is_admin == Some(false),
    )?;

    let display_name = input
        .display_name
        .as_deref()
        .map(validate_display_name)
        .transpose()?;
    let language_preference = input.language_preference.map(|l| l.trim().to_string());
    if let Some(lang) = &language_preference {
        validate_language(lang)?;
    }

    if let Some(password) = input.password {
        validate_password_strength(&password).map_err(AppError::BadRequest)?;
        let hash = hash_password_blocking(password)
            .await
            .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
        UserRepo::update_password(&state.pool, id, &hash).await?;
    }

    let update = UpdateUser {
        display_name,
        is_admin: input.is_admin,
        is_active: input.is_active,
        language_preference,
    };
    let user = UserRepo::update(&state.pool, id, &update)
        .await?
        .ok_or(AppError::not_found("User", id))?;

    tracing::info!(user_id = admin.user_id, target_user_id = id, "User updated");

    Ok(Json(DataResponse {
        data: UserResponse::from(&user),
    }))
}

/// DELETE /api/users/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let target = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("User", id))?;

    check_deletable(&target.username)?;

    if !UserRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("User", id));
    }

    tracing::info!(user_id = admin.user_id, target_user_id = id, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
