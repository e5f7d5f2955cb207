//! Shared helpers for API integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use showrunner_api::auth::jwt::JwtConfig;
use showrunner_api::auth::password::hash_password;
use showrunner_api::config::{ServerConfig, StorageConfig};
use showrunner_api::router::build_app_router;
use showrunner_api::state::AppState;
use showrunner_api::storage::local::LocalStorage;
use showrunner_db::models::user::{CreateUser, User};
use showrunner_db::repositories::UserRepo;

/// Password given to every user created through [`create_user`].
pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` with safe defaults and local storage under
/// `upload_root`.
pub fn test_config(upload_root: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        cookie_secure: false,
        jwt: JwtConfig {
            secret: "test-secret-for-integration-tests".to_string(),
            session_expiry_days: 7,
        },
        storage: StorageConfig::Local {
            root: upload_root.to_path_buf(),
            public_base_url: "/files".to_string(),
        },
        admin_password: None,
    }
}

/// Build the full application router with the same middleware stack as
/// production. Uploads land in a shared scratch directory.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_uploads(pool, &scratch_upload_root())
}

/// Like [`build_test_app`] but with uploads written under `upload_root`.
pub fn build_test_app_with_uploads(pool: PgPool, upload_root: &Path) -> Router {
    let config = test_config(upload_root);
    let storage = Arc::new(LocalStorage::new(
        upload_root.to_path_buf(),
        "/files".to_string(),
    ));
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage,
    };
    build_app_router(state, &config)
}

fn scratch_upload_root() -> PathBuf {
    std::env::temp_dir().join("showrunner-api-tests")
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: Method, uri: &str, body: &Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn empty_request(method: Method, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, empty_request(Method::GET, uri, None)).await
}

pub async fn get_auth(app: Router, uri: &str, cookie: &str) -> Response {
    send(app, empty_request(Method::GET, uri, Some(cookie))).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, json_request(Method::POST, uri, &body, None)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, cookie: &str) -> Response {
    send(app, json_request(Method::POST, uri, &body, Some(cookie))).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, cookie: &str) -> Response {
    send(app, json_request(Method::PUT, uri, &body, Some(cookie))).await
}

pub async fn patch_json_auth(app: Router, uri: &str, body: Value, cookie: &str) -> Response {
    send(app, json_request(Method::PATCH, uri, &body, Some(cookie))).await
}

pub async fn delete_auth(app: Router, uri: &str, cookie: &str) -> Response {
    send(app, empty_request(Method::DELETE, uri, Some(cookie))).await
}

// ---------------------------------------------------------------------------
// Users and sessions
// ---------------------------------------------------------------------------

/// Insert a user directly through the repository with [`TEST_PASSWORD`].
pub async fn create_user(pool: &PgPool, username: &str, is_admin: bool) -> User {
    let input = CreateUser {
        username: username.to_string(),
        password_hash: hash_password(TEST_PASSWORD).unwrap(),
        display_name: format!("{username} (test)"),
        is_admin,
        language_preference: "en".to_string(),
    };
    UserRepo::create(pool, &input).await.unwrap()
}

/// Log in and return the `name=value` pair to send back in a `Cookie` header.
pub async fn login(app: Router, username: &str, password: &str) -> String {
    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({ "username": username, "password": password }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK, "login failed for {username}");
    session_pair(&response).expect("login response should set a session cookie")
}

/// Extract `auth-token=...` from a response's `Set-Cookie` header.
pub fn session_pair(response: &Response) -> Option<String> {
    let header = response.headers().get(SET_COOKIE)?.to_str().ok()?;
    header.split(';').next().map(|pair| pair.trim().to_string())
}

/// Create a user with the given role and return a session cookie for them.
pub async fn session_for(app: &Router, pool: &PgPool, username: &str, is_admin: bool) -> String {
    create_user(pool, username, is_admin).await;
    login(app.clone(), username, TEST_PASSWORD).await
}

pub async fn admin_session(app: &Router, pool: &PgPool) -> String {
    session_for(app, pool, "admin", true).await
}

pub async fn member_session(app: &Router, pool: &PgPool) -> String {
    session_for(app, pool, "member", false).await
}
