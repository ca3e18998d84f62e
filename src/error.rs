use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::warn;

/// Failures the whisky store can report. None of them carry detail to the
/// client: every variant renders as a bare status code with an empty body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    /// The `:id` path segment is not an integer.
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("whisky {0} not found")]
    NotFound(i32),

    /// The request body could not be decoded into the expected shape.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidIdentifier(_) | AppError::MalformedPayload(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = status.as_u16(), error = %self, "Request rejected");
        status.into_response()
    }
}
