use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::store::parse_id;

/// The `:id` path segment, parsed as a whisky id.
#[derive(Debug, Clone, Copy)]
pub struct IdParam(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InvalidIdentifier(e.body_text()))?;
        parse_id(&raw).map(IdParam)
    }
}

/// JSON request body decoded with `serde_json`.
///
/// Unlike `axum::Json` this ignores `Content-Type`, and every failure
/// (empty body, bad JSON, wrong shape) is a [`AppError::MalformedPayload`].
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::MalformedPayload(e.body_text()))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::MalformedPayload("empty body".to_string()));
        }
        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| AppError::MalformedPayload(e.to_string()))
    }
}
