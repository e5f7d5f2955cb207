use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::ObjectStorage;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc` or already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: showrunner_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Backend for uploaded images.
    pub storage: Arc<dyn ObjectStorage>,
}
