//! Integration tests for admin-managed reference lists and directories.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{
    admin_session, body_json, build_test_app, delete_auth, get, member_session, patch_json_auth,
    post_json, post_json_auth, put_json_auth,
};

// ---------------------------------------------------------------------------
// Cities
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_city_lifecycle(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let cookie = admin_session(&app, &pool).await;

    let response = post_json_auth(
        app.clone(),
        "/api/cities",
        json!({ "name": "  Taipei ", "region": " North " }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();
    assert_eq!(created["data"]["name"], "Taipei");
    assert_eq!(created["data"]["region"], "North");

    // Lists are public.
    let list = body_json(get(app.clone(), "/api/cities").await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);

    let response = put_json_auth(
        app.clone(),
        &format!("/api/cities/{id}"),
        json!({ "region": "Northern Taiwan" }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["data"]["name"], "Taipei", "absent name is left alone");
    assert_eq!(updated["data"]["region"], "Northern Taiwan");

    let response = delete_auth(app.clone(), &format!("/api/cities/{id}"), &cookie).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.clone(), &format!("/api/cities/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let list = body_json(get(app.clone(), "/api/cities").await).await;
    assert!(list["data"].as_array().unwrap().is_empty());

    // A second delete finds nothing live to remove.
    let response = delete_auth(app, &format!("/api/cities/{id}"), &cookie).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_name_is_rejected(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let cookie = admin_session(&app, &pool).await;

    let response = post_json_auth(app.clone(), "/api/cities", json!({ "name": "   " }), &cookie).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let response = post_json_auth(
        app.clone(),
        "/api/staff-roles",
        json!({ "name": "Stage manager" }),
        &cookie,
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = patch_json_auth(
        app,
        &format!("/api/staff-roles/{id}"),
        json!({ "name": "" }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_writes_require_admin(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let cookie = member_session(&app, &pool).await;

    let anonymous = post_json(app.clone(), "/api/cities", json!({ "name": "Tainan" })).await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let member = post_json_auth(app, "/api/cities", json!({ "name": "Tainan" }), &cookie).await;
    assert_eq!(member.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Directories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_company_stays_readable_after_soft_delete(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let cookie = admin_session(&app, &pool).await;

    let response = post_json_auth(
        app.clone(),
        "/api/companies",
        json!({
            "name": "Lights & Co",
            "staff": [{ "name": " Wu ", "role": ["Rigger"], "email": "wu@example.com" }],
        }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();
    assert_eq!(created["data"]["staff"][0]["name"], "Wu");

    let response = delete_auth(app.clone(), &format!("/api/companies/{id}"), &cookie).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Existing productions may still reference it by id.
    let response = get(app.clone(), &format!("/api/companies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["is_deleted"], true);

    let list = body_json(get(app, "/api/companies").await).await;
    assert!(list["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_venue_rejects_invalid_staff_email(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let cookie = admin_session(&app, &pool).await;

    let response = post_json_auth(
        app,
        "/api/venues",
        json!({
            "name": "Legacy Hall",
            "staff": [{ "name": "Chen", "email": "not-an-email" }],
        }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Knowledge base
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_knowledge_batch_preserves_requested_order(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let cookie = admin_session(&app, &pool).await;

    let mut ids = Vec::new();
    for title in ["First", "Second", "Third"] {
        let response = post_json_auth(
            app.clone(),
            "/api/knowledge-base",
            json!({ "title": title, "tags": ["ops", " Ops "] }),
            &cookie,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["data"]["tags"], json!(["ops"]));
        ids.push(body["data"]["id"].as_i64().unwrap());
    }

    let response = delete_auth(
        app.clone(),
        &format!("/api/knowledge-base/{}", ids[1]),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let uri = format!(
        "/api/knowledge-base/batch?ids={},{},{},999999",
        ids[2], ids[1], ids[0]
    );
    let body = body_json(get(app.clone(), &uri).await).await;
    let titles: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Third", "First"]);

    let response = get(app, "/api/knowledge-base/batch?ids=1,abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Soft-deleted directory entries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_deleted_entries_are_hidden(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let cookie = admin_session(&app, &pool).await;

    let cases = [
        ("/api/venues", json!({ "name": "Legacy Hall", "city": "Taipei" })),
        ("/api/staff-roles", json!({ "name": "Stage manager" })),
        (
            "/api/ticketing-platforms",
            json!({ "name": "KKTIX", "website_url": "https://kktix.com" }),
        ),
        (
            "/api/admin-logos",
            json!({ "name": "Main", "image_url": "https://cdn.example.com/logo.png" }),
        ),
        ("/api/knowledge-base", json!({ "title": "Load-in checklist" })),
    ];

    for (base, payload) in cases {
        let response = post_json_auth(app.clone(), base, payload, &cookie).await;
        assert_eq!(response.status(), StatusCode::CREATED, "POST {base}");
        let id = body_json(response).await["data"]["id"].as_i64().unwrap();
        let uri = format!("{base}/{id}");

        let response = get(app.clone(), &uri).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");

        let response = delete_auth(app.clone(), &uri, &cookie).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT, "DELETE {uri}");

        let response = get(app.clone(), &uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {uri} after delete");

        let list = body_json(get(app.clone(), base).await).await;
        assert!(
            list["data"].as_array().unwrap().is_empty(),
            "{base} still lists the deleted entry"
        );
    }
}
