//! Salary aggregation by grouping key.
//!
//! Produces the metrics and report shapes from a set of salaries. An empty
//! set is never summarized to zeros; it is reported as "no employees found"
//! for the grouping key instead.

use crate::error::{ServiceError, ServiceResult};
use crate::models::{CountryMetrics, CountrySalaryReport, JobTitleMetrics, JobTitleSalaryReport};

/// Summary statistics over a non-empty set of salaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryStats {
    /// Number of salaries summarized.
    pub count: usize,
    /// Lowest salary.
    pub min: f64,
    /// Highest salary.
    pub max: f64,
    /// Arithmetic mean, held inside `[min, max]`.
    pub avg: f64,
}

/// Summarizes a set of salaries, or returns `None` when the set is empty.
///
/// The reduction is order independent. If the plain sum overflows, the mean
/// is taken over pre-scaled salaries instead. The result is then clamped into
/// `[min, max]` to absorb rounding only.
///
/// # Examples
///
/// ```
/// use employee_service::calculation::summarize;
///
/// let stats = summarize(&[40000.0, 60000.0, 50000.0]).unwrap();
/// assert_eq!(stats.count, 3);
/// assert_eq!(stats.min, 40000.0);
/// assert_eq!(stats.max, 60000.0);
/// assert_eq!(stats.avg, 50000.0);
///
/// assert!(summarize(&[]).is_none());
/// ```
pub fn summarize(salaries: &[f64]) -> Option<SalaryStats> {
    if salaries.is_empty() {
        return None;
    }

    let (min, max, sum) = salaries.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, 0.0),
        |(min, max, sum), &salary| (min.min(salary), max.max(salary), sum + salary),
    );
    let count = salaries.len();

    Some(SalaryStats {
        count,
        min,
        max,
        avg: mean(salaries, sum).clamp(min, max),
    })
}

fn mean(salaries: &[f64], sum: f64) -> f64 {
    let count = salaries.len() as f64;
    if sum.is_finite() {
        sum / count
    } else {
        salaries.iter().map(|salary| salary / count).sum()
    }
}

fn country_stats(country: &str, salaries: &[f64]) -> ServiceResult<SalaryStats> {
    summarize(salaries).ok_or_else(|| ServiceError::NoEmployeesForCountry {
        country: country.to_string(),
    })
}

fn job_title_stats(job_title: &str, salaries: &[f64]) -> ServiceResult<SalaryStats> {
    summarize(salaries).ok_or_else(|| ServiceError::NoEmployeesForJobTitle {
        job_title: job_title.to_string(),
    })
}

/// Builds `{country, min, max, avg}` for a country's salaries.
pub fn country_metrics(country: &str, salaries: &[f64]) -> ServiceResult<CountryMetrics> {
    let stats = country_stats(country, salaries)?;
    Ok(CountryMetrics {
        country: country.to_string(),
        min: stats.min,
        max: stats.max,
        avg: stats.avg,
    })
}

/// Builds `{jobTitle, avg}` for a job title's salaries.
pub fn job_title_metrics(job_title: &str, salaries: &[f64]) -> ServiceResult<JobTitleMetrics> {
    let stats = job_title_stats(job_title, salaries)?;
    Ok(JobTitleMetrics {
        job_title: job_title.to_string(),
        avg: stats.avg,
    })
}

/// Builds `{country, minSalary, maxSalary, avgSalary}` for a country's salaries.
pub fn country_report(country: &str, salaries: &[f64]) -> ServiceResult<CountrySalaryReport> {
    let stats = country_stats(country, salaries)?;
    Ok(CountrySalaryReport {
        country: country.to_string(),
        min_salary: stats.min,
        max_salary: stats.max,
        avg_salary: stats.avg,
    })
}

/// Builds `{jobTitle, employeeCount, averageSalary}` for a job title's salaries.
pub fn job_title_report(
    job_title: &str,
    salaries: &[f64],
) -> ServiceResult<JobTitleSalaryReport> {
    let stats = job_title_stats(job_title, salaries)?;
    Ok(JobTitleSalaryReport {
        job_title: job_title.to_string(),
        employee_count: stats.count,
        average_salary: stats.avg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_salary() {
        let stats = summarize(&[50000.0]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.min, 50000.0);
        assert_eq!(stats.max, 50000.0);
        assert_eq!(stats.avg, 50000.0);
    }

    #[test]
    fn test_order_does_not_matter() {
        let a = summarize(&[10.0, 30.0, 20.0]).unwrap();
        let b = summarize(&[30.0, 20.0, 10.0]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.avg, 20.0);
    }

    #[test]
    fn test_zero_salaries_are_counted() {
        let stats = summarize(&[0.0, 0.0, 90.0]).unwrap();
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.avg, 30.0);
    }

    #[test]
    fn test_country_metrics() {
        let metrics = country_metrics("India", &[50000.0, 70000.0]).unwrap();
        assert_eq!(
            metrics,
            CountryMetrics {
                country: "India".to_string(),
                min: 50000.0,
                max: 70000.0,
                avg: 60000.0,
            }
        );
    }

    #[test]
    fn test_job_title_report_counts_employees() {
        let report = job_title_report("Engineer", &[100.0, 200.0, 300.0]).unwrap();
        assert_eq!(report.employee_count, 3);
        assert_eq!(report.average_salary, 200.0);
    }

    #[test]
    fn test_country_report_shape() {
        let report = country_report("USA", &[5.0, 15.0]).unwrap();
        assert_eq!(report.min_salary, 5.0);
        assert_eq!(report.max_salary, 15.0);
        assert_eq!(report.avg_salary, 10.0);
    }

    #[test]
    fn test_empty_country_is_not_found() {
        let err = country_metrics("Atlantis", &[]).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::NoEmployeesForCountry { ref country } if country == "Atlantis"
        ));

        let err = country_report("Atlantis", &[]).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_empty_job_title_is_not_found() {
        let err = job_title_metrics("Wizard", &[]).unwrap_err();
        assert!(matches!(err, ServiceError::NoEmployeesForJobTitle { .. }));

        let err = job_title_report("Wizard", &[]).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_repeated_fraction_stays_in_range() {
        let stats = summarize(&[0.1, 0.1, 0.1]).unwrap();
        assert!(stats.avg <= stats.max);
        assert!(stats.avg >= stats.min);
    }

    #[test]
    fn test_mean_near_f64_max_does_not_overflow() {
        let stats = summarize(&[1.0e308, 1.7e308]).unwrap();
        assert!(stats.avg.is_finite());
        assert!(stats.avg < stats.max);
        assert!((stats.avg - 1.35e308).abs() <= 1.0e294);
    }

    #[test]
    fn test_mean_of_max_values_stays_finite() {
        let stats = summarize(&[f64::MAX, f64::MAX, f64::MAX]).unwrap();
        assert!(stats.avg.is_finite());
        assert!(stats.avg >= f64::MAX * (1.0 - 1e-12));
    }

    proptest! {
        #[test]
        fn prop_avg_between_min_and_max(salaries in prop::collection::vec(0.0f64..1.0e9, 1..64)) {
            let stats = summarize(&salaries).unwrap();
            prop_assert!(stats.min <= stats.avg);
            prop_assert!(stats.avg <= stats.max);
            prop_assert_eq!(stats.count, salaries.len());
        }

        #[test]
        fn prop_avg_is_sum_over_count(salaries in prop::collection::vec(0.0f64..1.0e9, 1..64)) {
            let stats = summarize(&salaries).unwrap();
            let expected = salaries.iter().sum::<f64>() / salaries.len() as f64;
            prop_assert!((stats.avg - expected).abs() <= 1e-6 * expected.max(1.0));
        }

        #[test]
        fn prop_avg_of_huge_salaries_stays_finite(
            salaries in prop::collection::vec(1.0e306f64..f64::MAX, 1..64)
        ) {
            let stats = summarize(&salaries).unwrap();
            let expected = salaries.iter().map(|s| s / salaries.len() as f64).sum::<f64>();
            prop_assert!(stats.avg.is_finite());
            prop_assert!((stats.avg - expected).abs() <= 1e-9 * expected);
        }

        #[test]
        fn prop_min_and_max_are_members(salaries in prop::collection::vec(0.0f64..1.0e9, 1..64)) {
            let stats = summarize(&salaries).unwrap();
            prop_assert!(salaries.contains(&stats.min));
            prop_assert!(salaries.contains(&stats.max));
        }
    }
}
