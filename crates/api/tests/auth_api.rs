//! Integration tests for login, logout, the session endpoint and own-account
//! changes.

mod common;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, SET_COOKIE};
use axum::http::{Request, StatusCode};
use serde_json::json;
use sqlx::PgPool;

use common::{
    body_json, build_test_app, create_user, get, get_auth, login, post_json, post_json_auth,
    put_json_auth, send, session_pair, TEST_PASSWORD,
};
use showrunner_db::models::user::UpdateUser;
use showrunner_db::repositories::UserRepo;

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_sets_http_only_cookie(pool: PgPool) {
    create_user(&pool, "lin", false).await;
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/auth/login",
        json!({ "username": "lin", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("auth-token="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Max-Age=604800"));
    assert!(!cookie.contains("Secure"));

    let body = body_json(response).await;
    assert_eq!(body["data"]["username"], "lin");
    assert!(body["data"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_username_is_case_insensitive(pool: PgPool) {
    create_user(&pool, "lin", false).await;
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/auth/login",
        json!({ "username": "  LIN ", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_failures_share_one_message(pool: PgPool) {
    create_user(&pool, "lin", false).await;
    let app = build_test_app(pool);

    let wrong_password = post_json(
        app.clone(),
        "/api/auth/login",
        json!({ "username": "lin", "password": "not-the-password" }),
    )
    .await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let wrong_password = body_json(wrong_password).await;

    let unknown_user = post_json(
        app,
        "/api/auth/login",
        json!({ "username": "nobody", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
    let unknown_user = body_json(unknown_user).await;

    assert_eq!(wrong_password["error"], "Invalid username or password");
    assert_eq!(wrong_password["error"], unknown_user["error"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_disabled_account_is_forbidden(pool: PgPool) {
    let user = create_user(&pool, "lin", false).await;
    let update = UpdateUser {
        is_active: Some(false),
        ..Default::default()
    };
    UserRepo::update(&pool, user.id, &update).await.unwrap();
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/auth/login",
        json!({ "username": "lin", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Account is disabled");
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_me_requires_session(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/api/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_me_returns_session_claims(pool: PgPool) {
    let user = create_user(&pool, "lin", true).await;
    let app = build_test_app(pool);
    let cookie = login(app.clone(), "lin", TEST_PASSWORD).await;

    let response = get_auth(app, "/api/auth/me", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["sub"], user.id);
    assert_eq!(body["data"]["username"], "lin");
    assert_eq!(body["data"]["is_admin"], true);
    assert_eq!(body["data"]["language_preference"], "en");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bearer_token_is_accepted(pool: PgPool) {
    create_user(&pool, "lin", false).await;
    let app = build_test_app(pool);
    let cookie = login(app.clone(), "lin", TEST_PASSWORD).await;
    let token = cookie.trim_start_matches("auth-token=");

    let request = Request::builder()
        .uri("/api/auth/me")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let response = send(app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tampered_token_is_rejected(pool: PgPool) {
    create_user(&pool, "lin", false).await;
    let app = build_test_app(pool);
    let cookie = login(app.clone(), "lin", TEST_PASSWORD).await;

    let tampered = format!("{cookie}x");
    let response = get_auth(app, "/api/auth/me", &tampered).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_logout_clears_cookie(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(app, "/api/auth/logout", json!({})).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let cookie = response
        .headers()
        .get(SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(cookie.starts_with("auth-token=;"));
    assert!(cookie.contains("Max-Age=0"));
}

// ---------------------------------------------------------------------------
// Own account
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_language_change_reissues_session(pool: PgPool) {
    create_user(&pool, "lin", false).await;
    let app = build_test_app(pool.clone());
    let cookie = login(app.clone(), "lin", TEST_PASSWORD).await;

    let response = put_json_auth(
        app.clone(),
        "/api/auth/me/language",
        json!({ "language": "zh" }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let fresh = session_pair(&response).expect("language change should set a cookie");

    let me = body_json(get_auth(app, "/api/auth/me", &fresh).await).await;
    assert_eq!(me["data"]["language_preference"], "zh");

    let stored = UserRepo::find_by_username(&pool, "lin").await.unwrap().unwrap();
    assert_eq!(stored.language_preference, "zh");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_language_change_rejects_unknown_language(pool: PgPool) {
    create_user(&pool, "lin", false).await;
    let app = build_test_app(pool);
    let cookie = login(app.clone(), "lin", TEST_PASSWORD).await;

    let response = put_json_auth(
        app,
        "/api/auth/me/language",
        json!({ "language": "fr" }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_change_password_flow(pool: PgPool) {
    create_user(&pool, "lin", false).await;
    let app = build_test_app(pool);
    let cookie = login(app.clone(), "lin", TEST_PASSWORD).await;

    let wrong_current = post_json_auth(
        app.clone(),
        "/api/auth/change-password",
        json!({ "current_password": "nope", "new_password": "a-new-password" }),
        &cookie,
    )
    .await;
    assert_eq!(wrong_current.status(), StatusCode::BAD_REQUEST);

    let too_short = post_json_auth(
        app.clone(),
        "/api/auth/change-password",
        json!({ "current_password": TEST_PASSWORD, "new_password": "short" }),
        &cookie,
    )
    .await;
    assert_eq!(too_short.status(), StatusCode::BAD_REQUEST);

    let changed = post_json_auth(
        app.clone(),
        "/api/auth/change-password",
        json!({ "current_password": TEST_PASSWORD, "new_password": "a-new-password" }),
        &cookie,
    )
    .await;
    assert_eq!(changed.status(), StatusCode::NO_CONTENT);

    let old = post_json(
        app.clone(),
        "/api/auth/login",
        json!({ "username": "lin", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(old.status(), StatusCode::UNAUTHORIZED);

    login(app, "lin", "a-new-password").await;
}
