//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_logo_repo;
pub mod app_config_repo;
pub mod city_repo;
pub mod community_repo;
pub mod company_repo;
pub mod event_repo;
pub mod knowledge_item_repo;
pub mod knowledge_link_repo;
pub mod media_package_repo;
pub mod media_repo;
pub mod organization_profile_repo;
pub mod production_repo;
pub mod promotion_channel_repo;
pub mod qr_code_repo;
pub mod route_repo;
pub mod staff_role_repo;
pub mod step_config_repo;
pub mod ticketing_platform_repo;
pub mod user_repo;
pub mod venue_repo;

pub use admin_logo_repo::AdminLogoRepo;
pub use app_config_repo::AppConfigRepo;
pub use city_repo::CityRepo;
pub use community_repo::CommunityRepo;
pub use company_repo::CompanyRepo;
pub use event_repo::EventRepo;
pub use knowledge_item_repo::KnowledgeItemRepo;
pub use knowledge_link_repo::KnowledgeLinkRepo;
pub use media_package_repo::MediaPackageRepo;
pub use media_repo::MediaRepo;
pub use organization_profile_repo::OrganizationProfileRepo;
pub use production_repo::ProductionRepo;
pub use promotion_channel_repo::PromotionChannelRepo;
pub use qr_code_repo::QrCodeRepo;
pub use route_repo::RouteRepo;
pub use staff_role_repo::StaffRoleRepo;
pub use step_config_repo::StepConfigRepo;
pub use ticketing_platform_repo::TicketingPlatformRepo;
pub use user_repo::UserRepo;
pub use venue_repo::VenueRepo;
