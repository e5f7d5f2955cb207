//! User account rules: usernames, language preference, and the protected
//! bootstrap administrator.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Username of the bootstrap administrator account.
pub const BOOTSTRAP_ADMIN_USERNAME: &str = "admin";

/// Minimum password length for new and changed passwords.
pub const MIN_PASSWORD_LENGTH: usize = 8;

pub const LANGUAGE_EN: &str = "en";
pub const LANGUAGE_ZH: &str = "zh";

/// All supported interface languages.
pub const VALID_LANGUAGES: &[&str] = &[LANGUAGE_EN, LANGUAGE_ZH];

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_.-]{3,32}$").expect("valid username regex"));

/// Lowercase and trim a username, then check it against the allowed pattern.
pub fn normalize_username(raw: &str) -> Result<String, CoreError> {
    let username = raw.trim().to_lowercase();
    if !USERNAME_RE.is_match(&username) {
        return Err(CoreError::validation(
            "Username must be 3-32 characters of a-z, 0-9, '_', '.', or '-'",
        ));
    }
    Ok(username)
}

pub fn validate_language(lang: &str) -> Result<(), CoreError> {
    if VALID_LANGUAGES.contains(&lang) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid language '{lang}'. Valid languages: {}",
            VALID_LANGUAGES.join(", ")
        )))
    }
}

pub fn validate_display_name(name: &str) -> Result<String, CoreError> {
    crate::records::require_text("Display name", name)
}

/// The bootstrap administrator can never be deleted.
pub fn check_deletable(target_username: &str) -> Result<(), CoreError> {
    if target_username == BOOTSTRAP_ADMIN_USERNAME {
        return Err(CoreError::Forbidden(
            "The admin account cannot be deleted".into(),
        ));
    }
    Ok(())
}

/// Only the bootstrap administrator may deactivate or demote itself; every
/// other caller is refused.
pub fn check_protected_update(
    target_username: &str,
    actor_username: &str,
    deactivating: bool,
    demoting: bool,
) -> Result<(), CoreError> {
    if target_username == BOOTSTRAP_ADMIN_USERNAME
        && actor_username != BOOTSTRAP_ADMIN_USERNAME
        && (deactivating || demoting)
    {
        return Err(CoreError::Forbidden(
            "Only the admin account can deactivate or demote itself".into(),
        ));
    }
    Ok(())
}
