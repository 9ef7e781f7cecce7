use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use crate::{
    AppState,
    db::models::{api::ApiResponse, sub_role::SubRole},
    error::AppError,
    services::SubRolesService,
};

/// Specializations for a role, always ending with the synthetic "Custom"
/// and "I don't know" entries.
pub async fn get_sub_roles(
    State(state): State<Arc<AppState>>,
    Path(role): Path<String>,
) -> Result<Json<ApiResponse<Vec<SubRole>>>, AppError> {
    let mut conn = state.db.get()?;
    let sub_roles = SubRolesService::consultant_types(&mut conn, &role);
    Ok(Json(ApiResponse::success(sub_roles, "Specializations")))
}
