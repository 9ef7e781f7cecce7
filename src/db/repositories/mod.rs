pub mod feedback;
pub mod roadmaps;
pub mod sub_roles;
pub mod users;

pub use feedback::FeedbackRepo;
pub use roadmaps::RoadmapRepo;
pub use sub_roles::SubRoleRepo;
pub use users::UserRepo;
