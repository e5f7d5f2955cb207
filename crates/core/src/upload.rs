//! Image upload policy: content-type allow-list, size ceiling, and object key
//! layout.

use crate::error::CoreError;
use crate::types::DbId;

/// Accepted image MIME types.
pub const ALLOWED_CONTENT_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Maximum accepted upload size (5 MiB).
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Every uploaded object lives under this prefix.
pub const KEY_PREFIX: &str = "uploads/";

pub fn validate_content_type(content_type: &str) -> Result<(), CoreError> {
    if ALLOWED_CONTENT_TYPES.contains(&content_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unsupported file type '{content_type}'. Allowed: {}",
            ALLOWED_CONTENT_TYPES.join(", ")
        )))
    }
}

pub fn validate_size(len: usize) -> Result<(), CoreError> {
    if len == 0 {
        return Err(CoreError::validation("Uploaded file is empty"));
    }
    if len > MAX_UPLOAD_BYTES {
        return Err(CoreError::validation("File exceeds the 5 MB size limit"));
    }
    Ok(())
}

/// Reduce a client-supplied file name to `[A-Za-z0-9._-]`, keeping only the
/// final path component.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned.to_string()
    }
}

/// Object key namespaced by uploader and upload time.
pub fn build_object_key(user_id: DbId, unix_millis: i64, file_name: &str) -> String {
    format!(
        "{KEY_PREFIX}{user_id}/{unix_millis}-{}",
        sanitize_file_name(file_name)
    )
}

/// Validate a key supplied for deletion.
pub fn validate_object_key(key: &str) -> Result<(), CoreError> {
    if !key.starts_with(KEY_PREFIX) || key.len() == KEY_PREFIX.len() {
        return Err(CoreError::Validation(format!(
            "Key must start with '{KEY_PREFIX}'"
        )));
    }
    if key.contains("..") || key.contains('\\') {
        return Err(CoreError::validation("Key must not contain path traversal"));
    }
    Ok(())
}
