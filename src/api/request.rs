//! Request types for the employee service API.
//!
//! Bodies are accepted loosely so the validation guards can report which
//! field is wrong instead of a generic deserialization failure.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /employees` and `PUT /employees/:id`.
///
/// Every field is optional at this stage; JSON `null` reads as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeePayload {
    /// The employee's full name.
    pub full_name: Option<Value>,
    /// The employee's job title.
    pub job_title: Option<Value>,
    /// The employee's country.
    pub country: Option<Value>,
    /// Salary as a JSON number or numeric string.
    pub salary: Option<Value>,
}

/// Query string of `GET /employees/:id/salary`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SalaryQuery {
    /// Gross amount to calculate deductions on.
    pub gross: Option<String>,
}
