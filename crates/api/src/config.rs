use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development except
/// `JWT_SECRET`, which must always be provided.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Grace period for in-flight requests after a shutdown signal.
    pub shutdown_timeout_secs: u64,
    /// Whether the session cookie carries the `Secure` attribute.
    pub cookie_secure: bool,
    /// Session token signing configuration.
    pub jwt: JwtConfig,
    /// Where uploaded images are written.
    pub storage: StorageConfig,
    /// Password for the bootstrap `admin` account, if it should be seeded.
    pub admin_password: Option<String>,
}

/// Upload storage backend selection.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// Files on local disk, served back under `public_base_url`.
    Local {
        root: PathBuf,
        public_base_url: String,
    },
    /// An S3 bucket. Credentials come from the standard AWS provider chain.
    S3 {
        bucket: String,
        region: String,
        public_base_url: Option<String>,
    },
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                  |
    /// |--------------------------|--------------------------|
    /// | `HOST`                   | `0.0.0.0`                |
    /// | `PORT`                   | `3000`                   |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                     |
    /// | `SHUTDOWN_TIMEOUT_SECS`  | `30`                     |
    /// | `COOKIE_SECURE`          | `false`                  |
    /// | `STORAGE_BACKEND`        | `local`                  |
    /// | `STORAGE_LOCAL_DIR`      | `./uploads`              |
    /// | `STORAGE_PUBLIC_BASE_URL`| `/files` (local only)    |
    /// | `S3_BUCKET`, `S3_REGION` | required for `s3`        |
    /// | `ADMIN_PASSWORD`         | unset                    |
    ///
    /// # Panics
    ///
    /// Panics on malformed values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let cookie_secure: bool = std::env::var("COOKIE_SECURE")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("COOKIE_SECURE must be true or false");

        let admin_password = std::env::var("ADMIN_PASSWORD")
            .ok()
            .filter(|p| !p.is_empty());

        Self {
            host,
            port,
            request_timeout_secs,
            shutdown_timeout_secs,
            cookie_secure,
            jwt: JwtConfig::from_env(),
            storage: StorageConfig::from_env(),
            admin_password,
        }
    }
}

impl StorageConfig {
    fn from_env() -> Self {
        let public_base_url = std::env::var("STORAGE_PUBLIC_BASE_URL")
            .ok()
            .filter(|v| !v.is_empty());

        match std::env::var("STORAGE_BACKEND").as_deref() {
            Ok("s3") => Self::S3 {
                bucket: std::env::var("S3_BUCKET").expect("S3_BUCKET must be set for s3 storage"),
                region: std::env::var("S3_REGION").expect("S3_REGION must be set for s3 storage"),
                public_base_url,
            },
            Ok("local") | Err(_) => Self::Local {
                root: std::env::var("STORAGE_LOCAL_DIR")
                    .unwrap_or_else(|_| "./uploads".into())
                    .into(),
                public_base_url: public_base_url.unwrap_or_else(|| "/files".into()),
            },
            Ok(other) => panic!("Unknown STORAGE_BACKEND '{other}'. Must be one of: local, s3"),
        }
    }
}
