//! Response types for the employee service API.
//!
//! This module defines the error response body and the mapping from
//! service errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::error::ServiceError;

/// Message returned for every internal failure. Details stay in the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message.
    pub error: String,
    /// Error code for programmatic handling.
    pub code: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: code.into(),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a not found error response.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    /// Creates the generic internal error response.
    pub fn internal() -> Self {
        Self::new("INTERNAL_ERROR", INTERNAL_ERROR_MESSAGE)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Builds a 400 response with the given message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::validation_error(message),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ServiceError> for ApiErrorResponse {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation { message } => {
                warn!(error = %message, "Request rejected");
                ApiErrorResponse::bad_request(message)
            }
            ServiceError::EmployeeNotFound { id } => {
                warn!(employee_id = id, "Employee not found");
                ApiErrorResponse {
                    status: StatusCode::NOT_FOUND,
                    error: ApiError::not_found(err.to_string()),
                }
            }
            ServiceError::NoEmployeesForCountry { ref country } => {
                warn!(country = %country, "No employees for country");
                ApiErrorResponse {
                    status: StatusCode::NOT_FOUND,
                    error: ApiError::not_found(err.to_string()),
                }
            }
            ServiceError::NoEmployeesForJobTitle { ref job_title } => {
                warn!(job_title = %job_title, "No employees for job title");
                ApiErrorResponse {
                    status: StatusCode::NOT_FOUND,
                    error: ApiError::not_found(err.to_string()),
                }
            }
            ServiceError::Store(_)
            | ServiceError::ConfigNotFound { .. }
            | ServiceError::ConfigParseError { .. } => {
                error!(error = %err, "Request failed");
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::internal(),
                }
            }
        }
    }
}
