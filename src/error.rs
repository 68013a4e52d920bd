//! Error types for the employee service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the service layer can report.

use thiserror::Error;

use crate::models::EmployeeId;
use crate::store::StoreError;

/// The main error type for the employee service.
///
/// Validation and lookup failures carry enough context to build a client
/// facing message; store failures are opaque to the caller.
///
/// # Example
///
/// ```
/// use employee_service::error::ServiceError;
///
/// let error = ServiceError::EmployeeNotFound { id: 7 };
/// assert_eq!(error.to_string(), "Employee not found");
/// ```
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Client input was missing or malformed.
    #[error("{message}")]
    Validation {
        /// A human-readable description of the problem.
        message: String,
    },

    /// No employee exists with the requested id.
    #[error("Employee not found")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: EmployeeId,
    },

    /// No employee records exist for the requested country.
    #[error("No employees found for this country")]
    NoEmployeesForCountry {
        /// The grouping key that matched nothing.
        country: String,
    },

    /// No employee records exist for the requested job title.
    #[error("No employees found for this job title")]
    NoEmployeesForJobTitle {
        /// The grouping key that matched nothing.
        job_title: String,
    },

    /// The persistence collaborator failed.
    #[error("Record store failure: {0}")]
    Store(#[from] StoreError),

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl ServiceError {
    /// Creates a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Returns true for errors that mean "nothing matched".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::EmployeeNotFound { .. }
                | Self::NoEmployeesForCountry { .. }
                | Self::NoEmployeesForJobTitle { .. }
        )
    }
}

/// A type alias for Results that return ServiceError.
pub type ServiceResult<T> = Result<T, ServiceError>;
