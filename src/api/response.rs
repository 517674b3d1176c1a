//! Response types for the shift payroll API.
//!
//! This module defines the success envelope, the error body, and the mapping
//! from engine errors to HTTP responses.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::ReportRow;

/// Successful response body: the weekly summary rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessShiftsResponse {
    /// One row per employee and week.
    pub result: Vec<ReportRow>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub error: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            error: error.into(),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response for a request body that could not be decoded.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        json_response(self.status, &self.error)
    }
}

/// Every engine failure is a server error; the code reflects the root cause.
impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let code = match error.root_cause() {
            EngineError::SourceNotFound { .. } => "SOURCE_NOT_FOUND",
            EngineError::SourceParseError { .. } => "SOURCE_PARSE_ERROR",
            EngineError::Parse { .. } => "PARSE_ERROR",
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::UnknownTimezone { .. } => "CONFIG_ERROR",
            EngineError::Processing { .. } => "PROCESSING_ERROR",
        };

        ApiErrorResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: ApiError::new(code, error.to_string()),
        }
    }
}

/// Builds a JSON response with an explicit content type.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
