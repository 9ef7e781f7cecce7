pub mod auth;
pub mod catalog;
pub mod feedback;
pub mod form_state;
pub mod roadmaps;
pub mod sub_roles;

use axum::{
    Router, async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::{
    AppState,
    error::AppError,
    middleware::auth::{auth_middleware, optional_auth_middleware},
};

/// Anonymous client identity from the `x-client-id` header. Form-state
/// slots, timeline state and the exit-intent flag are all keyed by it.
pub struct ClientId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ClientId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get("x-client-id")
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| ClientId(value.to_string()))
            .ok_or_else(|| AppError::validation("Missing x-client-id header"))
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let public_routes = Router::new()
        .route("/auth/otp/send", post(auth::send_otp))
        .route("/auth/otp/verify", post(auth::verify_otp))
        .route("/auth/oauth/:provider", get(auth::oauth_redirect))
        .route("/catalog", get(catalog::get_catalog))
        .with_state(state.clone());

    // Most of the app works without a session; handlers see Option<AuthUser>.
    let session_aware_routes = Router::new()
        .route("/auth/session", get(auth::get_session))
        .route("/form-state", get(form_state::get_form_state))
        .route("/form-state/navigation", put(form_state::save_navigation))
        .route("/form-state/field", post(form_state::field_changed))
        .route(
            "/form-state/custom-role",
            post(form_state::custom_role_toggled),
        )
        .route("/roadmap/generate", post(roadmaps::generate_roadmap))
        .route("/roadmap", get(roadmaps::get_roadmap))
        .route("/roadmap/steps/toggle", post(roadmaps::toggle_step))
        .route("/roadmap/sub-role/select", post(roadmaps::select_sub_role))
        .route("/roadmap/resource-click", post(roadmaps::resource_clicked))
        .route("/roadmap/skill-view", post(roadmaps::skill_viewed))
        .route("/roadmap/link-click", post(roadmaps::link_clicked))
        .route("/roles/:role/sub-roles", get(sub_roles::get_sub_roles))
        .route("/feedback", post(feedback::submit_feedback))
        .route("/feedback/exit-intent", post(feedback::exit_intent))
        .route_layer(from_fn_with_state(state.clone(), optional_auth_middleware))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/auth/logout", post(auth::logout))
        .route_layer(from_fn_with_state(state.clone(), auth_middleware))
        .with_state(state);

    public_routes
        .merge(session_aware_routes)
        .merge(protected_routes)
}
