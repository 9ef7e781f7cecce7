use axum::{Extension, Json, extract::State};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::{
    AppState,
    db::models::auth::AuthUser,
    db::models::{api::ApiResponse, form_state::SavedFormData, form_state::Selection},
    error::AppError,
    routes::ClientId,
};

/// Restores the saved selection for the form. A payload flagged as coming
/// from the roadmap view is cleared by this read.
pub async fn get_form_state(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
) -> Result<Json<ApiResponse<Option<SavedFormData>>>, AppError> {
    let saved = state.form_state.restore_saved(&client_id).await?;
    Ok(Json(ApiResponse::success(saved, "Form state")))
}

/// Roadmap -> form back navigation: persists the selection one-shot and
/// records the reset.
pub async fn save_navigation(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    Extension(user): Extension<Option<AuthUser>>,
    Json(selection): Json<Selection>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let tracker = state
        .tracker
        .with_identity(user.as_ref().map(|u| u.email.as_str()));
    tracker.event(
        "reset_roadmap",
        json!({
            "fromRole": selection.resolved_current_role(),
            "toRole": selection.resolved_future_role(),
            "timeframe": selection.timeframe,
        }),
    );

    state
        .form_state
        .save_navigation(&client_id, selection)
        .await?;

    Ok(Json(ApiResponse::ok("Selection saved")))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldChange {
    pub field: String,
    pub value: serde_json::Value,
    #[serde(flatten)]
    pub selection: Selection,
}

/// Per-field change telemetry from the form.
pub async fn field_changed(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<Option<AuthUser>>,
    Json(change): Json<FieldChange>,
) -> Json<ApiResponse<()>> {
    let tracker = state
        .tracker
        .with_identity(user.as_ref().map(|u| u.email.as_str()));
    tracker.event(
        "form_field_changed",
        json!({
            "field": change.field,
            "value": change.value,
            "currentRole": change.selection.resolved_current_role(),
            "futureRole": change.selection.resolved_future_role(),
        }),
    );

    Json(ApiResponse::ok("Recorded"))
}

#[derive(Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum RoleField {
    Current,
    Future,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomRoleToggle {
    pub which: RoleField,
    pub is_custom: bool,
    #[serde(flatten)]
    pub selection: Selection,
}

/// Switching a role field between dropdown and free text.
pub async fn custom_role_toggled(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<Option<AuthUser>>,
    Json(toggle): Json<CustomRoleToggle>,
) -> Json<ApiResponse<()>> {
    let tracker = state
        .tracker
        .with_identity(user.as_ref().map(|u| u.email.as_str()));
    match toggle.which {
        RoleField::Current => tracker.event(
            "toggle_custom_current_role",
            json!({
                "isCustom": toggle.is_custom,
                "currentRole": toggle.selection.current_role,
            }),
        ),
        RoleField::Future => tracker.event(
            "toggle_custom_future_role",
            json!({
                "isCustom": toggle.is_custom,
                "futureRole": toggle.selection.future_role,
            }),
        ),
    }

    Json(ApiResponse::ok("Recorded"))
}
