pub mod admin_logo;
pub mod app_config;
pub mod auth;
pub mod city;
pub mod community;
pub mod company;
pub mod event;
pub mod health;
pub mod knowledge_base;
pub mod knowledge_link;
pub mod media;
pub mod media_package;
pub mod organization_profile;
pub mod production;
pub mod promotion_channel;
pub mod qr_code;
pub mod staff_role;
pub mod step_config;
pub mod ticketing_platform;
pub mod tracked_route;
pub mod upload;
pub mod users;
pub mod venue;
