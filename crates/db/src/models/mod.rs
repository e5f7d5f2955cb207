//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for partial updates

pub mod admin_logo;
pub mod app_config;
pub mod city;
pub mod community;
pub mod company;
pub mod event;
pub mod knowledge_item;
pub mod knowledge_link;
pub mod media;
pub mod media_package;
pub mod organization_profile;
pub mod production;
pub mod promotion_channel;
pub mod qr_code;
pub mod route;
pub mod staff_role;
pub mod step_config;
pub mod ticketing_platform;
pub mod user;
pub mod venue;
