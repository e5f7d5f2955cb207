//! Signed session tokens.
//!
//! A session is an HS256 JWT carrying the user's identity and display
//! preferences, so most requests never touch the users table.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use showrunner_core::types::DbId;
use showrunner_db::models::user::User;

/// Claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SessionClaims {
    /// Subject: the user's internal database id.
    pub sub: DbId,
    pub username: String,
    pub display_name: String,
    pub is_admin: bool,
    pub language_preference: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Configuration for session token signing.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Session lifetime in days (default: 7).
    pub session_expiry_days: i64,
}

/// Default session lifetime in days.
const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var               | Required | Default |
    /// |-----------------------|----------|---------|
    /// | `JWT_SECRET`          | **yes**  | --      |
    /// | `SESSION_EXPIRY_DAYS` | no       | `7`     |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let session_expiry_days: i64 = std::env::var("SESSION_EXPIRY_DAYS")
            .unwrap_or_else(|_| DEFAULT_SESSION_EXPIRY_DAYS.to_string())
            .parse()
            .expect("SESSION_EXPIRY_DAYS must be a valid i64");

        Self {
            secret,
            session_expiry_days,
        }
    }

    /// Session lifetime in seconds, used for the cookie `Max-Age`.
    pub fn session_max_age_secs(&self) -> i64 {
        self.session_expiry_days * 24 * 60 * 60
    }
}

/// Sign a session token for `user`.
pub fn issue_session(user: &User, config: &JwtConfig) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = SessionClaims {
        sub: user.id,
        username: user.username.clone(),
        display_name: user.display_name.clone(),
        is_admin: user.is_admin,
        language_preference: user.language_preference.clone(),
        exp: now + config.session_max_age_secs(),
        iat: now,
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify a session token.
///
/// Fails closed: a bad signature, malformed token or expired session all
/// yield `None`.
pub fn verify_session(token: &str, config: &JwtConfig) -> Option<SessionClaims> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )
    .map(|data| data.claims)
    .ok()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            session_expiry_days: 7,
        }
    }

    fn user() -> User {
        User {
            id: 42,
            username: "mei".to_string(),
            password_hash: String::new(),
            display_name: "Mei".to_string(),
            is_admin: true,
            is_active: true,
            language_preference: "zh".to_string(),
            last_login_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn round_trip() {
        let token = issue_session(&user(), &config()).unwrap();
        let claims = verify_session(&token, &config()).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.username, "mei");
        assert!(claims.is_admin);
        assert_eq!(claims.language_preference, "zh");
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn wrong_secret_fails_closed() {
        let token = issue_session(&user(), &config()).unwrap();
        let other = JwtConfig {
            secret: "other".to_string(),
            session_expiry_days: 7,
        };
        assert!(verify_session(&token, &other).is_none());
    }

    #[test]
    fn garbage_fails_closed() {
        assert!(verify_session("not.a.token", &config()).is_none());
        assert!(verify_session("", &config()).is_none());
    }

    #[test]
    fn expired_fails_closed() {
        let expired = JwtConfig {
            secret: "test-secret".to_string(),
            session_expiry_days: -1,
        };
        let token = issue_session(&user(), &expired).unwrap();
        assert!(verify_session(&token, &config()).is_none());
    }
}
