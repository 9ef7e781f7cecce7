use crate::{AppState, db::models::AuthUser, db::repositories::UserRepo};
use axum::{
    extract::State,
    http::{Request, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: uuid::Uuid, // user_id
    pub email: String,
    pub exp: u64,    // expiration time
    pub iat: u64,    // issued at
    pub jti: String, // JWT ID
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub sub: uuid::Uuid, // user_id
    pub exp: u64,        // expiration time
    pub iat: u64,        // issued at
    pub jti: String,     // JWT ID
}

#[derive(Clone)]
pub struct AuthService {
    config: config::AuthConfig,
}

impl AuthService {
    pub fn new(config: config::AuthConfig) -> Self {
        Self { config }
    }

    pub fn access_token_expires_in(&self) -> u64 {
        self.config.access_token_expires_in
    }

    pub fn generate_access_token(
        &self,
        user: &AuthUser,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            exp: now + self.config.access_token_expires_in,
            iat: now,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_ref()),
        )
    }

    pub fn generate_refresh_token(
        &self,
        user_id: uuid::Uuid,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let claims = RefreshClaims {
            sub: user_id,
            exp: now + self.config.refresh_token_expires_in,
            iat: now,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_ref()),
        )
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_ref()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}

fn bearer_token<B>(request: &Request<B>) -> Option<String> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|auth_header| auth_header.to_str().ok())
        .and_then(|auth_str| {
            auth_str
                .strip_prefix("Bearer ")
                .map(|token| token.to_string())
        })
}

pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request<axum::body::Body>,
    next: Next<axum::body::Body>,
) -> Result<Response, StatusCode> {
    let token = bearer_token(&request).ok_or(StatusCode::UNAUTHORIZED)?;

    let claims = state
        .auth_service
        .verify_token(&token)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    let user = load_user(&state, claims.sub)
        .await
        .ok_or(StatusCode::UNAUTHORIZED)?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Like `auth_middleware` but never rejects; handlers see `Option<AuthUser>`.
/// A malformed or stale token is treated as no session, logged at warn.
pub async fn optional_auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request<axum::body::Body>,
    next: Next<axum::body::Body>,
) -> Result<Response, StatusCode> {
    let user = match bearer_token(&request) {
        Some(token) => match state.auth_service.verify_token(&token) {
            Ok(claims) => {
                let user = load_user(&state, claims.sub).await;
                if user.is_none() {
                    tracing::warn!("Valid token for unknown user {}", claims.sub);
                }
                user
            }
            Err(e) => {
                tracing::warn!("Ignoring unverifiable bearer token: {}", e);
                None
            }
        },
        None => None,
    };

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

async fn load_user(state: &AppState, user_id: uuid::Uuid) -> Option<AuthUser> {
    let mut conn = state.db.get().ok()?;
    let user = UserRepo::find_by_id(&mut conn, user_id).ok()??;

    Some(AuthUser {
        id: user.id,
        email: user.email,
    })
}
