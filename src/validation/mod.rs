pub mod auth;
pub mod feedback;
pub mod selection;

use axum::{
    Json, async_trait,
    extract::FromRequest,
    http::Request,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON extractor that runs `validator` rules before the handler sees the
/// payload.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S, axum::body::Body> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(
        req: Request<axum::body::Body>,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| AppError::validation("Invalid JSON format"))?;

        value.validate().map_err(|errors| {
            let detail = errors
                .field_errors()
                .iter()
                .map(|(field, _)| field.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            AppError::validation(format!("Invalid fields: {}", detail))
        })?;

        Ok(ValidatedJson(value))
    }
}
