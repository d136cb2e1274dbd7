//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON body whose rejections become 422 validation errors with a JSON body.
///
/// A request without a `Content-Type` header is still decoded as JSON. An
/// explicit non-JSON content type, missing or mistyped fields and syntax
/// errors are all rejected.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(header::CONTENT_TYPE) {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::Validation {
                    message: rejection.body_text(),
                })?;
            return Ok(Self(value));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation {
                message: rejection.body_text(),
            })?;
        let value = serde_json::from_slice(&bytes).map_err(|e| ApiError::Validation {
            message: format!("Failed to deserialize the JSON body: {}", e),
        })?;

        Ok(Self(value))
    }
}
