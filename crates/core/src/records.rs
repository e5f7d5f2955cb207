//! Normalisation helpers shared by every admin-managed record.
//!
//! All free text is trimmed before it is persisted. Identity-bearing fields
//! (name/title) must be non-empty after trimming, both on create and when
//! present in an update.

use crate::error::CoreError;

/// Maximum length of a name or title.
pub const MAX_NAME_LEN: usize = 200;

/// Trim a required field, rejecting empty values.
pub fn require_text(field: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Apply [`require_text`] to a field that may be absent from an update.
pub fn require_text_opt(field: &str, value: Option<&str>) -> Result<Option<String>, CoreError> {
    value.map(|v| require_text(field, v)).transpose()
}

/// Trim a required value that has no length ceiling (URLs, HTML).
pub fn require_nonempty(field: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Trim optional free text for an update. Absent stays absent.
pub fn trim_opt(value: Option<&str>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

/// Trim every entry of a string list, dropping entries that end up empty.
pub fn trim_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// Like [`trim_list`] but also removes duplicates, keeping first occurrence.
pub fn normalize_tags(values: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tag in trim_list(values) {
        if !out.iter().any(|t| t.eq_ignore_ascii_case(&tag)) {
            out.push(tag);
        }
    }
    out
}

/// Validate an optional web link: empty is allowed, anything else must be an
/// absolute `http`/`https` URL.
pub fn validate_optional_url(field: &str, value: &str) -> Result<(), CoreError> {
    if value.is_empty() || is_http_url(value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{field} must be an http or https URL"
        )))
    }
}

/// Trim an optional link and validate it with [`validate_optional_url`].
pub fn trim_url_opt(field: &str, value: Option<&str>) -> Result<Option<String>, CoreError> {
    let trimmed = trim_opt(value);
    if let Some(url) = &trimmed {
        validate_optional_url(field, url)?;
    }
    Ok(trimmed)
}

/// Whether `value` parses as an absolute `http`/`https` URL. Control
/// characters are rejected outright since the parser strips them silently.
pub fn is_http_url(value: &str) -> bool {
    use validator::ValidateUrl;

    if value.chars().any(char::is_control) {
        return false;
    }
    let lower = value.to_ascii_lowercase();
    (lower.starts_with("http://") || lower.starts_with("https://"))
        && value.to_string().validate_url()
}
