//! Domain logic for the showrunner event-production tracker.
//!
//! This crate performs no I/O. It owns the error taxonomy, the compiled-in
//! workflow step definitions, the production document model and every
//! validation rule the HTTP layer applies before touching the database.

pub mod error;
pub mod knowledge;
pub mod production;
pub mod records;
pub mod staff;
pub mod steps;
pub mod tracking;
pub mod types;
pub mod upload;
pub mod users;
