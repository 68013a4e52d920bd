//! Calculation logic for the employee service.
//!
//! This module contains the pure computations behind the salary endpoints:
//! country-based tax deducted at source, and min/max/average aggregation
//! over the salaries of a country or job title.

mod aggregation;
mod deductions;

pub use aggregation::{
    SalaryStats, country_metrics, country_report, job_title_metrics, job_title_report, summarize,
};
pub use deductions::{
    Deductions, INDIA_TDS_RATE, UNITED_STATES_TDS_RATE, calculate_deductions, tds_rate,
};
