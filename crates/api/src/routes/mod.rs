pub mod admin_logo;
pub mod auth;
pub mod city;
pub mod community;
pub mod company;
pub mod event;
pub mod health;
pub mod knowledge_base;
pub mod knowledge_link;
pub mod media_package;
pub mod production;
pub mod promotion_channel;
pub mod qr_code;
pub mod settings;
pub mod staff_role;
pub mod step_config;
pub mod ticketing_platform;
pub mod upload;
pub mod users;
pub mod venue;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                  login (public)
/// /auth/logout                                 logout (public)
/// /auth/me                                     current session
/// /auth/me/language                            update language (PUT)
/// /auth/change-password                        change own password (POST)
///
/// /users                                       list, create (admin)
/// /users/{id}                                  get, update, delete (admin)
///
/// /cities, /staff-roles, /ticketing-platforms,
/// /promotion-channels, /qr-codes, /admin-logos,
/// /media-packages, /knowledge-base, /venues,
/// /companies, /communities                     list (public), create (admin)
/// /<resource>/{id}                             get (public), update, soft delete (admin)
/// /knowledge-base/batch?ids=                   resolve items by id list
///
/// /knowledge-links                             list, add, remove (?section=&knowledge_item_id=)
///
/// /productions                                 list, create (admin)
/// /productions/{id}                            get, patch, delete (admin)
/// /productions/{id}/progress                   derived progress
/// /production-step-config                      get, replace (admin)
///
/// /events                                      list, create, delete (?id=)
/// /events/stats                                click totals per event
/// /events/{id}                                 get, update, delete (cascade)
/// /media                                       list (?event_id=), create
/// /media/{id}                                  update, delete (cascade)
/// /routes                                      list (?media_id=), create
/// /routes/{id}                                 get, update (+adjustment), delete
/// /track/{route_id}                            count click, 302 (public)
///
/// /upload                                      upload (multipart), delete (?key=, admin)
/// /organization-profile                        get, upsert (admin)
/// /config                                      get (public), update (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        // Reference lists and directories.
        .nest("/cities", city::router())
        .nest("/staff-roles", staff_role::router())
        .nest("/ticketing-platforms", ticketing_platform::router())
        .nest("/promotion-channels", promotion_channel::router())
        .nest("/qr-codes", qr_code::router())
        .nest("/admin-logos", admin_logo::router())
        .nest("/media-packages", media_package::router())
        .nest("/knowledge-base", knowledge_base::router())
        .nest("/venues", venue::router())
        .nest("/companies", company::router())
        .nest("/communities", community::router())
        .nest("/knowledge-links", knowledge_link::router())
        // Production workflow.
        .nest("/productions", production::router())
        .nest("/production-step-config", step_config::router())
        // Click tracking.
        .nest("/events", event::router())
        .nest("/media", event::media_router())
        .nest("/routes", event::tracked_route_router())
        .nest("/track", event::track_router())
        .nest("/upload", upload::router())
        .nest("/organization-profile", settings::organization_profile_router())
        .nest("/config", settings::app_config_router())
}
