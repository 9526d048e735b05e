//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::error::PeriodError;

/// API error response body: `{ "message": ..., "code": <http status> }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message
    pub message: String,
    /// HTTP status code
    pub code: u16,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: status.as_u16(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Unknown route
    NotFound(String),
    /// Request body could not be read
    BadRequest(String),
    /// Period generation failed
    Period(PeriodError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Period(PeriodError::InvalidRange(_)) => StatusCode::BAD_REQUEST,
            AppError::Period(PeriodError::UnsupportedRequest(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Period(PeriodError::InternalComputation(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (kind, message) = match self {
            AppError::NotFound(msg) => ("NotFound", msg),
            AppError::BadRequest(msg) => ("BadRequest", msg),
            AppError::Period(e) => (e.kind(), e.to_string()),
        };

        if status.is_server_error() {
            error!(code = status.as_u16(), kind, %message, "request failed");
        } else {
            warn!(code = status.as_u16(), kind, %message, "request rejected");
        }

        (status, Json(ApiError::new(status, message))).into_response()
    }
}

impl From<PeriodError> for AppError {
    fn from(err: PeriodError) -> Self {
        AppError::Period(err)
    }
}
