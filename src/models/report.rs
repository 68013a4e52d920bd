//! Response records for salary calculations and reports.
//!
//! The metrics and report shapes cover the same statistics but are kept
//! as separate contracts because their callers expect different fields.

use serde::{Deserialize, Serialize};

use super::EmployeeId;

/// Result of a deduction calculation for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryCalculation {
    /// The employee the calculation was made for.
    pub employee_id: EmployeeId,
    /// The employee's country, which selected the deduction rate.
    pub country: String,
    /// The gross amount supplied by the caller.
    pub gross: f64,
    /// Tax deducted at source.
    pub tds: f64,
    /// Gross minus TDS.
    pub net: f64,
}

/// Salary metrics for one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryMetrics {
    /// The grouping key, as requested.
    pub country: String,
    /// Lowest salary.
    pub min: f64,
    /// Highest salary.
    pub max: f64,
    /// Mean salary.
    pub avg: f64,
}

/// Average salary for one job title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobTitleMetrics {
    /// The grouping key, as requested.
    pub job_title: String,
    /// Mean salary.
    pub avg: f64,
}

/// Salary report for one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySalaryReport {
    /// The grouping key, as requested.
    pub country: String,
    /// Lowest salary.
    pub min_salary: f64,
    /// Highest salary.
    pub max_salary: f64,
    /// Mean salary.
    pub avg_salary: f64,
}

/// Salary report for one job title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobTitleSalaryReport {
    /// The grouping key, as requested.
    pub job_title: String,
    /// Number of employees holding the title.
    pub employee_count: usize,
    /// Mean salary.
    pub average_salary: f64,
}
