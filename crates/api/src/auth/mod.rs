//! Authentication primitives: password hashing, session tokens and the
//! session cookie.

pub mod cookie;
pub mod jwt;
pub mod password;
