//! Click-tracking rules for redirect routes.

use crate::error::CoreError;
use crate::records::is_http_url;

/// Largest magnitude accepted for a manual click-count adjustment.
pub const MAX_ADJUSTMENT: i64 = 1_000_000_000;

/// Reject adjustments large enough to overflow the stored counter. The
/// clamp at zero happens in the database.
pub fn validate_adjustment(delta: i64) -> Result<i64, CoreError> {
    if delta.unsigned_abs() > MAX_ADJUSTMENT as u64 {
        return Err(CoreError::Validation(format!(
            "Adjustment must be between -{MAX_ADJUSTMENT} and {MAX_ADJUSTMENT}"
        )));
    }
    Ok(delta)
}

/// Trim and validate a redirect destination.
pub fn validate_redirect_url(url: &str) -> Result<String, CoreError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation("Redirect URL is required"));
    }
    if !is_http_url(trimmed) {
        return Err(CoreError::validation(
            "Redirect URL must be an http or https URL",
        ));
    }
    Ok(trimmed.to_string())
}

/// Public tracking URL for a route given the configured base URL.
pub fn tracking_url(base_url: &str, route_id: i64) -> String {
    format!("{}/api/track/{route_id}", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjustment_bounds() {
        assert_eq!(validate_adjustment(-10).unwrap(), -10);
        assert!(validate_adjustment(MAX_ADJUSTMENT).is_ok());
        assert!(validate_adjustment(MAX_ADJUSTMENT + 1).is_err());
        assert!(validate_adjustment(i64::MIN).is_err());
    }

    #[test]
    fn redirect_url_rules() {
        assert_eq!(
            validate_redirect_url(" https://tickets.example.com/a ").unwrap(),
            "https://tickets.example.com/a"
        );
        assert!(validate_redirect_url("").is_err());
        assert!(validate_redirect_url("javascript:alert(1)").is_err());
    }

    #[test]
    fn redirect_url_rejects_control_characters() {
        assert!(validate_redirect_url("https://example.com/a\nSet-Cookie: x=1").is_err());
        assert!(validate_redirect_url("https://example.com/\ta").is_err());
        assert!(validate_redirect_url("https://example.com/a\r").is_err());
    }

    #[test]
    fn tracking_url_strips_trailing_slash() {
        assert_eq!(
            tracking_url("https://go.example.com/", 12),
            "https://go.example.com/api/track/12"
        );
    }
}
