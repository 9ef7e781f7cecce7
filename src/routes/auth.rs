use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;

use crate::{
    AppState,
    db::models::{
        api::ApiResponse,
        auth::{AuthUser, OAuthQuery, SendOtpRequest, SessionResponse, VerifyOtpRequest},
    },
    error::AppError,
    routes::ClientId,
    services::AuthGateway,
    validation::ValidatedJson,
};

pub async fn send_otp(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<SendOtpRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    AuthGateway::send_otp(&state, &payload.email).await?;
    Ok(Json(ApiResponse::ok("Verification code sent")))
}

pub async fn verify_otp(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    ValidatedJson(payload): ValidatedJson<VerifyOtpRequest>,
) -> Result<Json<ApiResponse<SessionResponse>>, AppError> {
    let session =
        AuthGateway::verify_otp(&state, &client_id, &payload.email, &payload.code).await?;
    Ok(Json(ApiResponse::success(session, "Signed in")))
}

pub async fn oauth_redirect(
    State(state): State<Arc<AppState>>,
    Path(provider): Path<String>,
    Query(query): Query<OAuthQuery>,
) -> Result<Redirect, AppError> {
    let authorize_url = AuthGateway::oauth_redirect(&state, &provider, &query.redirect_to)?;
    Ok(Redirect::temporary(&authorize_url))
}

pub async fn get_session(Extension(user): Extension<Option<AuthUser>>) -> Response {
    match user {
        Some(user) => Json(ApiResponse::success(user, "Session active")).into_response(),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<()>::unauthorized("No active session")),
        )
            .into_response(),
    }
}

pub async fn logout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Json<ApiResponse<()>> {
    AuthGateway::logout(&state, &user);
    Json(ApiResponse::ok("Signed out"))
}
