//! Passcode and OAuth sign-in flows. Code delivery is owned by the mail
//! provider consuming the issuance log; this service only mints, verifies
//! and turns a verified passcode into a token pair.

use serde_json::json;
use url::Url;

use crate::{
    AppState,
    db::models::auth::{AuthUser, SessionResponse},
    db::repositories::UserRepo,
    error::{AppError, AppResult},
    validation::auth::{normalize_email, validate_email, validate_otp_code},
};

pub struct AuthGateway;

impl AuthGateway {
    pub async fn send_otp(state: &AppState, email: &str) -> AppResult<()> {
        let email = normalize_email(email);
        let email = email.as_str();
        validate_email(email)?;
        state
            .tracker
            .event("login_otp_requested", json!({ "email": email }));

        match state.otp.issue(email).await {
            Ok(code) => {
                // The mail worker owns delivery; the code stays out of info logs.
                tracing::debug!("Passcode for {}: {}", email, code);
                tracing::info!("Passcode issued for {}", email);
                state
                    .tracker
                    .event("login_otp_sent", json!({ "email": email }));
                Ok(())
            }
            Err(e) => {
                state.tracker.event(
                    "login_otp_error",
                    json!({ "email": email, "error": e.to_string() }),
                );
                Err(e)
            }
        }
    }

    pub async fn verify_otp(
        state: &AppState,
        client_id: &str,
        email: &str,
        code: &str,
    ) -> AppResult<SessionResponse> {
        let email = normalize_email(email);
        let email = email.as_str();
        validate_email(email)?;
        validate_otp_code(code)?;
        state
            .tracker
            .event("login_otp_verification_attempted", json!({ "email": email }));

        if !state.otp.verify(email, code).await? {
            state.tracker.event(
                "login_otp_verification_error",
                json!({ "email": email, "error": "Invalid or expired code" }),
            );
            return Err(AppError::auth("Invalid or expired verification code"));
        }

        let mut conn = state.db.get()?;
        let user = UserRepo::upsert_by_email(&mut conn, email)?;
        let auth_user = AuthUser {
            id: user.id,
            email: user.email,
        };

        let access_token = state.auth_service.generate_access_token(&auth_user)?;
        let refresh_token = state.auth_service.generate_refresh_token(auth_user.id)?;

        state
            .tracker
            .with_identity(Some(&auth_user.email))
            .event("login_successful", json!({ "email": auth_user.email }));

        // The selection stashed before the login dialog travels back with
        // the session so the form picks up where the user left off.
        let restored_form = state.form_state.take_temp(client_id).await?;

        Ok(SessionResponse {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: state.auth_service.access_token_expires_in(),
            user: auth_user,
            restored_form,
        })
    }

    /// Builds the provider authorization URL the client is redirected to.
    pub fn oauth_redirect(state: &AppState, provider: &str, redirect_to: &str) -> AppResult<String> {
        state
            .tracker
            .event(&format!("{}_login_attempted", provider), json!({}));

        let mut authorize_url = Url::parse(&state.config.oauth_authorize_url).map_err(|e| {
            state.tracker.event(
                &format!("{}_login_error", provider),
                json!({ "error": e.to_string() }),
            );
            AppError::Config(format!("Invalid OAuth authorize URL: {}", e))
        })?;
        authorize_url
            .query_pairs_mut()
            .append_pair("client_id", &state.config.oauth_client_id)
            .append_pair("redirect_uri", redirect_to)
            .append_pair("response_type", "code")
            .append_pair("scope", "openid email");

        state
            .tracker
            .event(&format!("{}_login_redirect", provider), json!({}));

        Ok(authorize_url.into())
    }

    pub fn logout(state: &AppState, user: &AuthUser) {
        state
            .tracker
            .with_identity(Some(&user.email))
            .event("logout", json!({ "email": user.email }));
    }
}
