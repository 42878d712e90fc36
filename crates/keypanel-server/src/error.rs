//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use keypanel_engine::EngineError;

use crate::metrics::{self, ERROR_CONFLICT, ERROR_INPUT, ERROR_NOT_FOUND, ERROR_STORE, ERROR_UNAUTHORIZED};

/// Error surface for admin and transport failures.
///
/// Domain denials (wrong password, expired, device conflict) are not
/// errors; handlers report those as `fail` payloads with HTTP 200 so
/// clients can tell them apart from transport problems.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    BadRequest(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("account not found")]
    NotFound,
    #[error("account already exists")]
    Conflict,
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the error type string for metrics.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => ERROR_INPUT,
            ApiError::Unauthorized => ERROR_UNAUTHORIZED,
            ApiError::NotFound => ERROR_NOT_FOUND,
            ApiError::Conflict => ERROR_CONFLICT,
            ApiError::Internal(_) => ERROR_STORE,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::InvalidInput(msg) => ApiError::BadRequest(msg),
            EngineError::NotFound => ApiError::NotFound,
            EngineError::AlreadyExists => ApiError::Conflict,
            EngineError::Store(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        metrics::record_error(self.error_type());
        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));
        (self.status(), body).into_response()
    }
}
