use axum::{Extension, Json, extract::State};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    AppState,
    db::models::{
        api::ApiResponse,
        auth::AuthUser,
        feedback::{Feedback, FeedbackRequest},
    },
    error::AppError,
    routes::ClientId,
    services::FeedbackService,
    validation::ValidatedJson,
};

pub async fn submit_feedback(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<Option<AuthUser>>,
    ValidatedJson(payload): ValidatedJson<FeedbackRequest>,
) -> Result<Json<ApiResponse<Feedback>>, AppError> {
    let tracker = state
        .tracker
        .with_identity(user.as_ref().map(|u| u.email.as_str()));
    let mut conn = state.db.get()?;
    let feedback = FeedbackService::submit(
        &mut conn,
        &tracker,
        &payload,
        user.map(|user| user.id),
    )?;
    Ok(Json(ApiResponse::created(feedback, "Feedback recorded")))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitIntentResponse {
    pub should_prompt: bool,
}

/// Claims the once-per-client exit-intent flag. The prompt is shown only
/// when this returns true.
pub async fn exit_intent(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
) -> Result<Json<ApiResponse<ExitIntentResponse>>, AppError> {
    let should_prompt = FeedbackService::claim_exit_intent(&state.redis, &client_id).await?;
    Ok(Json(ApiResponse::success(
        ExitIntentResponse { should_prompt },
        "Exit intent",
    )))
}
