//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- the caller's session, from cookie or Bearer token.
//! - [`rbac::RequireAdmin`] -- an authenticated caller with `is_admin`.

pub mod auth;
pub mod rbac;
