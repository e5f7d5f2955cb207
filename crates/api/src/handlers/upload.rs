//! Handlers for image uploads.

use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use showrunner_core::error::CoreError;
use showrunner_core::upload::{
    build_object_key, validate_content_type, validate_object_key, validate_size,
};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::ObjectKeyParam;
use crate::response::DataResponse;
use crate::state::AppState;

/// Multipart field carrying the file.
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
    pub key: String,
}

/// POST /api/upload
///
/// Accepts one image in the `file` field. The object key is namespaced by
/// uploader and upload time.
pub async fn upload(
    auth: AuthUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("file").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        validate_content_type(&content_type)?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        validate_size(bytes.len())?;

        let key = build_object_key(
            auth.user_id,
            chrono::Utc::now().timestamp_millis(),
            &file_name,
        );
        let size = bytes.len();
        state
            .storage
            .put(&key, bytes.to_vec(), &content_type)
            .await
            .map_err(|e| AppError::InternalError(format!("Upload failed: {e}")))?;

        tracing::info!(user_id = auth.user_id, key = %key, size, "File uploaded");

        let url = state.storage.url(&key);
        return Ok((
            StatusCode::CREATED,
            Json(DataResponse {
                data: UploadResponse { url, key },
            }),
        ));
    }

    Err(AppError::BadRequest(format!(
        "Missing '{FILE_FIELD}' field"
    )))
}

/// DELETE /api/upload?key=
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<ObjectKeyParam>,
) -> AppResult<StatusCode> {
    validate_object_key(&params.key)?;

    let removed = state
        .storage
        .delete(&params.key)
        .await
        .map_err(|e| AppError::InternalError(format!("Delete failed: {e}")))?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFoundByKey {
            entity: "Upload",
            key: params.key,
        }));
    }

    tracing::info!(user_id = admin.user_id, key = %params.key, "Upload deleted");

    Ok(StatusCode::NO_CONTENT)
}
