//! Employee model and related types.
//!
//! This module defines the persisted Employee record along with the
//! shapes used to create it, change it, and select it by grouping key.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the record store on creation.
pub type EmployeeId = u64;

/// Represents a persisted employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier, assigned once by the store.
    pub id: EmployeeId,
    /// The employee's full name, trimmed.
    pub full_name: String,
    /// The employee's job title, trimmed. Used as a grouping key.
    pub job_title: String,
    /// The employee's country, trimmed. Used as a grouping key and for
    /// deduction rule lookup.
    pub country: String,
    /// Annual salary, never negative.
    pub salary: f64,
}

/// A validated employee that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    /// The employee's full name.
    pub full_name: String,
    /// The employee's job title.
    pub job_title: String,
    /// The employee's country.
    pub country: String,
    /// Annual salary.
    pub salary: f64,
}

impl NewEmployee {
    /// Returns a copy with surrounding whitespace removed from every text field.
    pub fn trimmed(self) -> Self {
        Self {
            full_name: self.full_name.trim().to_string(),
            job_title: self.job_title.trim().to_string(),
            country: self.country.trim().to_string(),
            salary: self.salary,
        }
    }

    /// Builds the stored record once the store has picked an id.
    pub fn into_employee(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            full_name: self.full_name,
            job_title: self.job_title,
            country: self.country,
            salary: self.salary,
        }
    }
}

/// A sparse set of field changes for a partial update.
///
/// `None` means "leave the stored value alone".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeChanges {
    /// New full name, if supplied.
    pub full_name: Option<String>,
    /// New job title, if supplied.
    pub job_title: Option<String>,
    /// New country, if supplied.
    pub country: Option<String>,
    /// New salary, if supplied.
    pub salary: Option<f64>,
}

impl EmployeeChanges {
    /// Returns a copy with surrounding whitespace removed from supplied text fields.
    pub fn trimmed(self) -> Self {
        fn trim(value: Option<String>) -> Option<String> {
            value.map(|v| v.trim().to_string())
        }

        Self {
            full_name: trim(self.full_name),
            job_title: trim(self.job_title),
            country: trim(self.country),
            salary: self.salary,
        }
    }

    /// Returns true if no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.job_title.is_none()
            && self.country.is_none()
            && self.salary.is_none()
    }

    /// Applies the supplied fields to `employee`, leaving the rest untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_service::models::{Employee, EmployeeChanges};
    ///
    /// let mut employee = Employee {
    ///     id: 1,
    ///     full_name: "John Doe".to_string(),
    ///     job_title: "Software Engineer".to_string(),
    ///     country: "India".to_string(),
    ///     salary: 50000.0,
    /// };
    /// let changes = EmployeeChanges {
    ///     full_name: Some("Jane Doe".to_string()),
    ///     ..Default::default()
    /// };
    /// changes.apply_to(&mut employee);
    /// assert_eq!(employee.full_name, "Jane Doe");
    /// assert_eq!(employee.salary, 50000.0);
    /// ```
    pub fn apply_to(self, employee: &mut Employee) {
        if let Some(full_name) = self.full_name {
            employee.full_name = full_name;
        }
        if let Some(job_title) = self.job_title {
            employee.job_title = job_title;
        }
        if let Some(country) = self.country {
            employee.country = country;
        }
        if let Some(salary) = self.salary {
            employee.salary = salary;
        }
    }
}

/// Selects employees by one grouping key. Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeFilter {
    /// Employees whose country equals the value.
    Country(String),
    /// Employees whose job title equals the value.
    JobTitle(String),
}

impl EmployeeFilter {
    /// Returns true if `employee` falls under this filter.
    pub fn matches(&self, employee: &Employee) -> bool {
        match self {
            Self::Country(country) => employee.country == *country,
            Self::JobTitle(job_title) => employee.job_title == *job_title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee() -> Employee {
        Employee {
            id: 1,
            full_name: "John Doe".to_string(),
            job_title: "Software Engineer".to_string(),
            country: "India".to_string(),
            salary: 50000.0,
        }
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let json = serde_json::to_value(create_test_employee()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["fullName"], "John Doe");
        assert_eq!(json["jobTitle"], "Software Engineer");
        assert_eq!(json["country"], "India");
        assert_eq!(json["salary"], 50000.0);
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": 9,
            "fullName": "Ana Silva",
            "jobTitle": "Designer",
            "country": "Brazil",
            "salary": 4200.5
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, 9);
        assert_eq!(employee.full_name, "Ana Silva");
        assert_eq!(employee.salary, 4200.5);
    }

    #[test]
    fn test_new_employee_trimmed() {
        let new = NewEmployee {
            full_name: "  John Doe ".to_string(),
            job_title: "\tEngineer".to_string(),
            country: "India\n".to_string(),
            salary: 10.0,
        }
        .trimmed();

        assert_eq!(new.full_name, "John Doe");
        assert_eq!(new.job_title, "Engineer");
        assert_eq!(new.country, "India");
    }

    #[test]
    fn test_changes_only_touch_supplied_fields() {
        let mut employee = create_test_employee();
        EmployeeChanges {
            salary: Some(75000.0),
            ..Default::default()
        }
        .apply_to(&mut employee);

        assert_eq!(employee.salary, 75000.0);
        assert_eq!(employee.full_name, "John Doe");
        assert_eq!(employee.job_title, "Software Engineer");
        assert_eq!(employee.country, "India");
    }

    #[test]
    fn test_changes_is_empty() {
        assert!(EmployeeChanges::default().is_empty());
        let changes = EmployeeChanges {
            country: Some(" USA ".to_string()),
            ..Default::default()
        };
        assert!(!changes.is_empty());
        assert_eq!(changes.trimmed().country.as_deref(), Some("USA"));
    }

    #[test]
    fn test_filter_matches_exactly() {
        let employee = create_test_employee();
        assert!(EmployeeFilter::Country("India".to_string()).matches(&employee));
        assert!(!EmployeeFilter::Country("india".to_string()).matches(&employee));
        assert!(EmployeeFilter::JobTitle("Software Engineer".to_string()).matches(&employee));
        assert!(!EmployeeFilter::JobTitle("Engineer".to_string()).matches(&employee));
    }
}
