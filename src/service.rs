//! Employee record service.
//!
//! Orchestrates record CRUD against the injected [`EmployeeStore`],
//! turns missing records into domain errors, and feeds fetched salaries
//! into the deduction and aggregation calculations.

use std::sync::Arc;

use tracing::debug;

use crate::calculation::{
    calculate_deductions, country_metrics, country_report, job_title_metrics, job_title_report,
};
use crate::error::{ServiceError, ServiceResult};
use crate::models::{
    CountryMetrics, CountrySalaryReport, Employee, EmployeeChanges, EmployeeFilter, EmployeeId,
    JobTitleMetrics, JobTitleSalaryReport, NewEmployee, SalaryCalculation,
};
use crate::store::EmployeeStore;

/// Business operations over employee records.
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    /// Creates a service backed by the given store.
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Trims text fields and persists a new employee.
    pub async fn create(&self, employee: NewEmployee) -> ServiceResult<Employee> {
        let created = self.store.insert(employee.trimmed()).await?;
        debug!(employee_id = created.id, "Employee stored");
        Ok(created)
    }

    /// Returns every employee in storage order.
    pub async fn get_all(&self) -> ServiceResult<Vec<Employee>> {
        Ok(self.store.list().await?)
    }

    /// Fetches one employee.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::EmployeeNotFound`] if no record has this id.
    pub async fn get_by_id(&self, id: EmployeeId) -> ServiceResult<Employee> {
        self.store
            .get(id)
            .await?
            .ok_or(ServiceError::EmployeeNotFound { id })
    }

    /// Applies only the supplied fields of `changes` to an employee.
    ///
    /// An update with no fields is a read and never reaches the store's
    /// write path.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::EmployeeNotFound`] if no record has this id.
    pub async fn update(
        &self,
        id: EmployeeId,
        changes: EmployeeChanges,
    ) -> ServiceResult<Employee> {
        if changes.is_empty() {
            return self.get_by_id(id).await;
        }
        self.store
            .update(id, changes.trimmed())
            .await?
            .ok_or(ServiceError::EmployeeNotFound { id })
    }

    /// Removes an employee.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::EmployeeNotFound`] if no record has this id.
    pub async fn delete(&self, id: EmployeeId) -> ServiceResult<()> {
        if self.store.delete(id).await? {
            Ok(())
        } else {
            Err(ServiceError::EmployeeNotFound { id })
        }
    }

    /// Calculates deductions on `gross` using the employee's country.
    pub async fn calculate_salary(
        &self,
        id: EmployeeId,
        gross: f64,
    ) -> ServiceResult<SalaryCalculation> {
        let employee = self.get_by_id(id).await?;
        let deductions = calculate_deductions(gross, &employee.country);

        Ok(SalaryCalculation {
            employee_id: id,
            country: employee.country,
            gross,
            tds: deductions.tds,
            net: deductions.net,
        })
    }

    /// Min, max and average salary for a country.
    pub async fn get_metrics_by_country(&self, country: &str) -> ServiceResult<CountryMetrics> {
        let employees = self
            .store
            .find(&EmployeeFilter::Country(country.to_string()))
            .await?;
        country_metrics(country, &salaries_of(&employees))
    }

    /// Average salary for a job title.
    pub async fn get_average_by_job_title(
        &self,
        job_title: &str,
    ) -> ServiceResult<JobTitleMetrics> {
        let employees = self
            .store
            .find(&EmployeeFilter::JobTitle(job_title.to_string()))
            .await?;
        job_title_metrics(job_title, &salaries_of(&employees))
    }

    /// Salary report for a country, using the salary projection only.
    pub async fn get_salary_report_by_country(
        &self,
        country: &str,
    ) -> ServiceResult<CountrySalaryReport> {
        let salaries = self
            .store
            .salaries(&EmployeeFilter::Country(country.to_string()))
            .await?;
        country_report(country, &salaries)
    }

    /// Salary report for a job title, using the salary projection only.
    pub async fn get_salary_report_by_job_title(
        &self,
        job_title: &str,
    ) -> ServiceResult<JobTitleSalaryReport> {
        let salaries = self
            .store
            .salaries(&EmployeeFilter::JobTitle(job_title.to_string()))
            .await?;
        job_title_report(job_title, &salaries)
    }
}

fn salaries_of(employees: &[Employee]) -> Vec<f64> {
    employees.iter().map(|e| e.salary).collect()
}
