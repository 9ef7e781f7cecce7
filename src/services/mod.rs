pub mod auth_service;
pub mod feedback_service;
pub mod roadmap_service;
pub mod sub_roles_service;
pub mod timeline_service;

pub use auth_service::AuthGateway;
pub use feedback_service::FeedbackService;
pub use roadmap_service::{ResolvedRoadmap, RoadmapService};
pub use sub_roles_service::SubRolesService;
