//! HTTP API module for the employee service.
//!
//! This module provides the REST endpoints for employee records,
//! salary deductions, and salary reports.

mod handlers;
mod request;
mod response;
mod state;
mod validation;

pub use handlers::{CORRELATION_ID_HEADER, create_router};
pub use request::{EmployeePayload, SalaryQuery};
pub use response::{ApiError, ApiErrorResponse, INTERNAL_ERROR_MESSAGE};
pub use state::AppState;
pub use validation::{
    CreateEmployee, Gross, UpdateEmployee, ValidId, parse_gross, parse_id, validate_create,
    validate_update,
};
