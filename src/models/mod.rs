//! Core data models for the employee service.
//!
//! This module contains the employee record and the report shapes
//! returned by the salary endpoints.

mod employee;
mod report;

pub use employee::{Employee, EmployeeChanges, EmployeeFilter, EmployeeId, NewEmployee};
pub use report::{
    CountryMetrics, CountrySalaryReport, JobTitleMetrics, JobTitleSalaryReport, SalaryCalculation,
};
