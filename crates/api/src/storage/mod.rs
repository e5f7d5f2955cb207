//! Object storage for uploaded images.
//!
//! Handlers only see [`ObjectStorage`]; the backend is chosen once at startup
//! from [`StorageConfig`].

pub mod local;
pub mod s3;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::StorageConfig;

pub use local::LocalStorage;
pub use s3::S3Storage;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Object store error: {0}")]
    Backend(String),
}

/// Write, remove and address stored objects by key.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store `bytes` under `key`, replacing any existing object.
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str)
        -> Result<(), StorageError>;

    /// Remove the object at `key`. Returns `false` if nothing was there.
    async fn delete(&self, key: &str) -> Result<bool, StorageError>;

    /// Public URL a browser can load the object from.
    fn url(&self, key: &str) -> String;
}

/// Build the configured backend.
pub async fn from_config(config: &StorageConfig) -> Arc<dyn ObjectStorage> {
    match config {
        StorageConfig::Local {
            root,
            public_base_url,
        } => Arc::new(LocalStorage::new(root.clone(), public_base_url.clone())),
        StorageConfig::S3 {
            bucket,
            region,
            public_base_url,
        } => Arc::new(S3Storage::connect(bucket, region, public_base_url.clone()).await),
    }
}

/// Join a base URL and a key with exactly one slash.
pub(crate) fn join_url(base: &str, key: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        key.trim_start_matches('/')
    )
}
