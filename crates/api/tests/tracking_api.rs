//! Integration tests for events, media, tracked routes and the public click
//! tracker.

mod common;

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use serde_json::{json, Value};
use sqlx::PgPool;

use common::{
    admin_session, body_json, build_test_app, delete_auth, get, get_auth, member_session,
    patch_json_auth, post_json_auth, put_json_auth,
};

async fn create(app: &axum::Router, cookie: &str, uri: &str, body: Value) -> Value {
    let response = post_json_auth(app.clone(), uri, body, cookie).await;
    assert_eq!(response.status(), StatusCode::CREATED, "POST {uri}");
    body_json(response).await["data"].clone()
}

/// Event -> media -> route chain. Returns `(event_id, media_id, route_id)`.
async fn seed_route(app: &axum::Router, cookie: &str) -> (i64, i64, i64) {
    let event = create(
        app,
        cookie,
        "/api/events",
        json!({ "name": "Summer Gala", "event_date": "2026-07-01" }),
    )
    .await;
    let event_id = event["id"].as_i64().unwrap();

    let media = create(
        app,
        cookie,
        "/api/media",
        json!({ "event_id": event_id, "name": "Instagram", "platform": "social" }),
    )
    .await;
    let media_id = media["id"].as_i64().unwrap();

    let route = create(
        app,
        cookie,
        "/api/routes",
        json!({
            "media_id": media_id,
            "name": "Bio link",
            "redirect_url": " https://tickets.example.com/gala ",
        }),
    )
    .await;
    assert_eq!(route["redirect_url"], "https://tickets.example.com/gala");
    assert_eq!(route["click_count"], 0);

    (event_id, media_id, route["id"].as_i64().unwrap())
}

// ---------------------------------------------------------------------------
// Tracking
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_track_redirects_and_counts(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let cookie = admin_session(&app, &pool).await;
    let (_, _, route_id) = seed_route(&app, &cookie).await;

    for _ in 0..2 {
        let response = get(app.clone(), &format!("/api/track/{route_id}")).await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(LOCATION).unwrap(),
            "https://tickets.example.com/gala"
        );
    }

    let body = body_json(get_auth(app, &format!("/api/routes/{route_id}"), &cookie).await).await;
    assert_eq!(body["data"]["click_count"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_track_unknown_route_is_not_found(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/api/track/987654").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_adjustment_clamps_at_zero(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let cookie = admin_session(&app, &pool).await;
    let (_, _, route_id) = seed_route(&app, &cookie).await;
    let uri = format!("/api/routes/{route_id}");

    let body = body_json(
        patch_json_auth(app.clone(), &uri, json!({ "adjustment": 5 }), &cookie).await,
    )
    .await;
    assert_eq!(body["data"]["click_count"], 5);

    let response = get(app.clone(), &format!("/api/track/{route_id}")).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    let body = body_json(get_auth(app.clone(), &uri, &cookie).await).await;
    assert_eq!(body["data"]["click_count"], 6);

    let body = body_json(
        patch_json_auth(app.clone(), &uri, json!({ "adjustment": -10 }), &cookie).await,
    )
    .await;
    assert_eq!(body["data"]["click_count"], 0);

    let response = patch_json_auth(
        app,
        &uri,
        json!({ "redirect_url": "ftp://files.example.com" }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_redirect_url_with_line_break_is_rejected(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let cookie = admin_session(&app, &pool).await;
    let (_, media_id, route_id) = seed_route(&app, &cookie).await;
    let injected = "https://example.com/a\nSet-Cookie: x=1";

    let response = post_json_auth(
        app.clone(),
        "/api/routes",
        json!({ "media_id": media_id, "name": "Broken", "redirect_url": injected }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let uri = format!("/api/routes/{route_id}");
    let response = patch_json_auth(
        app.clone(),
        &uri,
        json!({ "redirect_url": injected }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(app.clone(), &format!("/api/track/{route_id}")).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(LOCATION).unwrap(),
        "https://tickets.example.com/gala"
    );

    let body = body_json(
        get_auth(app, &format!("/api/routes?media_id={media_id}"), &cookie).await,
    )
    .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tracking_url_uses_configured_base(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let cookie = admin_session(&app, &pool).await;
    let (_, media_id, route_id) = seed_route(&app, &cookie).await;

    let response = put_json_auth(
        app.clone(),
        "/api/config",
        json!({ "base_url": "https://go.example.com/" }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(
        get_auth(app, &format!("/api/routes?media_id={media_id}"), &cookie).await,
    )
    .await;
    assert_eq!(
        body["data"][0]["tracking_url"],
        format!("https://go.example.com/api/track/{route_id}")
    );
}

// ---------------------------------------------------------------------------
// Cascade and stats
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_event_delete_cascades(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let cookie = admin_session(&app, &pool).await;
    let (event_id, media_id, route_id) = seed_route(&app, &cookie).await;

    // A second media item with two more routes: two media, three routes.
    let extra_media = create(
        &app,
        &cookie,
        "/api/media",
        json!({ "event_id": event_id, "name": "Flyers" }),
    )
    .await;
    let extra_media_id = extra_media["id"].as_i64().unwrap();
    for name in ["QR front", "QR back"] {
        create(
            &app,
            &cookie,
            "/api/routes",
            json!({
                "media_id": extra_media_id,
                "name": name,
                "redirect_url": "https://tickets.example.com/gala",
            }),
        )
        .await;
    }

    let response = delete_auth(app.clone(), &format!("/api/events?id={event_id}"), &cookie).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app.clone(), &format!("/api/events/{event_id}"), &cookie).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(
        get_auth(app.clone(), &format!("/api/media?event_id={event_id}"), &cookie).await,
    )
    .await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let response = get_auth(app.clone(), &format!("/api/routes/{route_id}"), &cookie).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(app.clone(), &format!("/api/track/{route_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    for media in [media_id, extra_media_id] {
        let body = body_json(
            get_auth(app.clone(), &format!("/api/routes?media_id={media}"), &cookie).await,
        )
        .await;
        assert!(body["data"].as_array().unwrap().is_empty());
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_event_stats_sum_clicks(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let cookie = admin_session(&app, &pool).await;
    let (event_id, _, route_id) = seed_route(&app, &cookie).await;

    patch_json_auth(
        app.clone(),
        &format!("/api/routes/{route_id}"),
        json!({ "adjustment": 41 }),
        &cookie,
    )
    .await;
    get(app.clone(), &format!("/api/track/{route_id}")).await;

    let body = body_json(get_auth(app, "/api/events/stats", &cookie).await).await;
    let row = &body["data"][0];
    assert_eq!(row["event_id"], event_id);
    assert_eq!(row["media_count"], 1);
    assert_eq!(row["route_count"], 1);
    assert_eq!(row["total_clicks"], 42);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_media_requires_existing_event(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let cookie = admin_session(&app, &pool).await;

    let response = post_json_auth(
        app,
        "/api/media",
        json!({ "event_id": 123456, "name": "Flyers" }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_event_writes_require_admin(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let cookie = member_session(&app, &pool).await;

    let response = post_json_auth(app.clone(), "/api/events", json!({ "name": "Gala" }), &cookie).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get_auth(app, "/api/events", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
}
