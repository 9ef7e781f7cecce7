// Sub-modules organized by functional domain
pub mod api;
pub mod auth;
pub mod feedback;
pub mod form_state;
pub mod roadmap;
pub mod sub_role;

pub use api::*;
pub use auth::*;
pub use feedback::*;
pub use form_state::*;
pub use roadmap::*;
pub use sub_role::*;
