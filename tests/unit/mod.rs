pub mod analytics;
pub mod auth;
pub mod catalog;
pub mod feedback;
pub mod form_state;
pub mod roadmap;
pub mod selection;
pub mod sub_roles;
pub mod timeline;
