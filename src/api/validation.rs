//! Request guards.
//!
//! Each guard checks one part of a request before it reaches the service
//! and rejects with a 400 response on failure. The guards are axum
//! extractors; on success they hand the handler the parsed value.

use async_trait::async_trait;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde_json::Value;
use tracing::warn;

use crate::error::{ServiceError, ServiceResult};
use crate::models::{EmployeeChanges, EmployeeId, NewEmployee};

use super::request::{EmployeePayload, SalaryQuery};
use super::response::ApiErrorResponse;

const INVALID_ID: &str = "Invalid ID parameter";
const GROSS_REQUIRED: &str = "gross query parameter is required";
const GROSS_INVALID: &str = "gross must be a non-negative number";
const SALARY_REQUIRED: &str = "salary is required";
const SALARY_INVALID: &str = "salary must be a non-negative number";

/// Coerces a JSON number or numeric string to a finite, non-negative amount.
fn coerce_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => parse_amount(text)?,
        _ => return None,
    };
    (amount.is_finite() && amount >= 0.0).then_some(amount)
}

fn parse_amount(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok()
}

/// Returns the value if it is a string with non-whitespace content.
fn non_empty_text(value: &Value) -> Option<&str> {
    value.as_str().filter(|text| !text.trim().is_empty())
}

fn required_text(value: Option<&Value>, field: &str) -> ServiceResult<String> {
    value
        .and_then(non_empty_text)
        .map(str::to_string)
        .ok_or_else(|| {
            ServiceError::validation(format!(
                "{field} is required and must be a non-empty string"
            ))
        })
}

fn optional_text(value: Option<&Value>, field: &str) -> ServiceResult<Option<String>> {
    value
        .map(|value| {
            non_empty_text(value)
                .map(str::to_string)
                .ok_or_else(|| ServiceError::validation(format!("{field} must be a non-empty string")))
        })
        .transpose()
}

fn salary_amount(value: &Value) -> ServiceResult<f64> {
    coerce_amount(value).ok_or_else(|| ServiceError::validation(SALARY_INVALID))
}

/// Checks a create body. All four fields are required.
///
/// Fields are checked in the order full name, job title, country, salary;
/// the first failure is reported.
pub fn validate_create(payload: &EmployeePayload) -> ServiceResult<NewEmployee> {
    let full_name = required_text(payload.full_name.as_ref(), "fullName")?;
    let job_title = required_text(payload.job_title.as_ref(), "jobTitle")?;
    let country = required_text(payload.country.as_ref(), "country")?;
    let salary = payload
        .salary
        .as_ref()
        .ok_or_else(|| ServiceError::validation(SALARY_REQUIRED))
        .and_then(salary_amount)?;

    Ok(NewEmployee {
        full_name,
        job_title,
        country,
        salary,
    })
}

/// Checks an update body. Absent fields are fine; present ones follow the
/// create rules.
pub fn validate_update(payload: &EmployeePayload) -> ServiceResult<EmployeeChanges> {
    Ok(EmployeeChanges {
        full_name: optional_text(payload.full_name.as_ref(), "fullName")?,
        job_title: optional_text(payload.job_title.as_ref(), "jobTitle")?,
        country: optional_text(payload.country.as_ref(), "country")?,
        salary: payload.salary.as_ref().map(salary_amount).transpose()?,
    })
}

/// Parses a path id. It must be a positive whole number.
///
/// # Examples
///
/// ```
/// use employee_service::api::parse_id;
///
/// assert_eq!(parse_id("42").unwrap(), 42);
/// assert!(parse_id("abc").is_err());
/// assert!(parse_id("0").is_err());
/// ```
pub fn parse_id(raw: &str) -> ServiceResult<EmployeeId> {
    let invalid = || ServiceError::validation(INVALID_ID);
    let text = raw.trim();

    if let Ok(id) = text.parse::<EmployeeId>() {
        return if id > 0 { Ok(id) } else { Err(invalid()) };
    }

    // Accept integral decimal forms such as "7.0".
    let number = parse_amount(text).ok_or_else(invalid)?;
    let in_range = number.is_finite() && number > 0.0 && number < u64::MAX as f64;
    if !in_range || number.fract() != 0.0 {
        return Err(invalid());
    }
    Ok(number as EmployeeId)
}

/// Parses the `gross` query value. It must be present and a finite,
/// non-negative number.
pub fn parse_gross(raw: Option<&str>) -> ServiceResult<f64> {
    let raw = raw
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ServiceError::validation(GROSS_REQUIRED))?;

    parse_amount(raw)
        .filter(|gross| gross.is_finite() && *gross >= 0.0)
        .ok_or_else(|| ServiceError::validation(GROSS_INVALID))
}

/// Maps a JSON body rejection onto a 400 response.
fn json_rejection(rejection: JsonRejection) -> ApiErrorResponse {
    let message = match rejection {
        JsonRejection::JsonDataError(err) => {
            warn!(error = %err.body_text(), "JSON data error");
            "Request body must be a JSON object".to_string()
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(error = %err, "JSON syntax error");
            format!("Invalid JSON syntax: {}", err.body_text())
        }
        JsonRejection::MissingJsonContentType(_) => {
            "Content-Type must be application/json".to_string()
        }
        _ => "Failed to parse request body".to_string(),
    };
    ApiErrorResponse::bad_request(message)
}

async fn read_payload<S>(req: Request, state: &S) -> Result<EmployeePayload, ApiErrorResponse>
where
    S: Send + Sync,
{
    let Json(payload) = Json::<EmployeePayload>::from_request(req, state)
        .await
        .map_err(json_rejection)?;
    Ok(payload)
}

/// A path id that passed the id guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidId(pub EmployeeId);

#[async_trait]
impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiErrorResponse;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiErrorResponse::from(ServiceError::validation(INVALID_ID)))?;
        Ok(Self(parse_id(&raw)?))
    }
}

/// A gross amount that passed the salary query guard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gross(pub f64);

#[async_trait]
impl<S> FromRequestParts<S> for Gross
where
    S: Send + Sync,
{
    type Rejection = ApiErrorResponse;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<SalaryQuery>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiErrorResponse::from(ServiceError::validation(GROSS_INVALID)))?;
        Ok(Self(parse_gross(query.gross.as_deref())?))
    }
}

/// A create body that passed the create guard.
#[derive(Debug, Clone)]
pub struct CreateEmployee(pub NewEmployee);

#[async_trait]
impl<S> FromRequest<S> for CreateEmployee
where
    S: Send + Sync,
{
    type Rejection = ApiErrorResponse;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let payload = read_payload(req, state).await?;
        Ok(Self(validate_create(&payload)?))
    }
}

/// An update body that passed the update guard.
#[derive(Debug, Clone)]
pub struct UpdateEmployee(pub EmployeeChanges);

#[async_trait]
impl<S> FromRequest<S> for UpdateEmployee
where
    S: Send + Sync,
{
    type Rejection = ApiErrorResponse;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let payload = read_payload(req, state).await?;
        Ok(Self(validate_update(&payload)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> EmployeePayload {
        serde_json::from_value(value).unwrap()
    }

    fn message(err: ServiceError) -> String {
        err.to_string()
    }

    #[test]
    fn test_create_accepts_valid_body() {
        let new = validate_create(&payload(json!({
            "fullName": "John Doe",
            "jobTitle": "Software Engineer",
            "country": "India",
            "salary": 50000
        })))
        .unwrap();

        assert_eq!(new.full_name, "John Doe");
        assert_eq!(new.salary, 50000.0);
    }

    #[test]
    fn test_create_coerces_numeric_string_salary() {
        let new = validate_create(&payload(json!({
            "fullName": "A",
            "jobTitle": "B",
            "country": "C",
            "salary": " 1234.5 "
        })))
        .unwrap();
        assert_eq!(new.salary, 1234.5);
    }

    #[test]
    fn test_create_reports_first_bad_field() {
        let err = validate_create(&payload(json!({
            "fullName": "   ",
            "jobTitle": "",
            "salary": -1
        })))
        .unwrap_err();
        assert_eq!(
            message(err),
            "fullName is required and must be a non-empty string"
        );

        let err = validate_create(&payload(json!({
            "fullName": "A",
            "jobTitle": 12,
            "country": "C",
            "salary": 1
        })))
        .unwrap_err();
        assert_eq!(
            message(err),
            "jobTitle is required and must be a non-empty string"
        );

        let err = validate_create(&payload(json!({
            "fullName": "A",
            "jobTitle": "B",
            "salary": 1
        })))
        .unwrap_err();
        assert_eq!(
            message(err),
            "country is required and must be a non-empty string"
        );
    }

    #[test]
    fn test_create_requires_salary() {
        for body in [
            json!({ "fullName": "A", "jobTitle": "B", "country": "C" }),
            json!({ "fullName": "A", "jobTitle": "B", "country": "C", "salary": null }),
        ] {
            let err = validate_create(&payload(body)).unwrap_err();
            assert_eq!(message(err), SALARY_REQUIRED);
        }
    }

    #[test]
    fn test_create_rejects_bad_salary() {
        for salary in [json!(-5), json!("abc"), json!(""), json!(true), json!([1])] {
            let err = validate_create(&payload(json!({
                "fullName": "A",
                "jobTitle": "B",
                "country": "C",
                "salary": salary
            })))
            .unwrap_err();
            assert_eq!(message(err), SALARY_INVALID);
        }
    }

    #[test]
    fn test_create_rejects_non_finite_salary_strings() {
        for salary in ["inf", "NaN", "-infinity"] {
            let err = validate_create(&payload(json!({
                "fullName": "A",
                "jobTitle": "B",
                "country": "C",
                "salary": salary
            })))
            .unwrap_err();
            assert_eq!(message(err), SALARY_INVALID);
        }
    }

    #[test]
    fn test_create_accepts_zero_salary() {
        let new = validate_create(&payload(json!({
            "fullName": "A",
            "jobTitle": "B",
            "country": "C",
            "salary": 0
        })))
        .unwrap();
        assert_eq!(new.salary, 0.0);
    }

    #[test]
    fn test_update_allows_empty_body() {
        let changes = validate_update(&payload(json!({}))).unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn test_update_keeps_only_supplied_fields() {
        let changes = validate_update(&payload(json!({ "fullName": "Updated User" }))).unwrap();
        assert_eq!(changes.full_name.as_deref(), Some("Updated User"));
        assert!(changes.job_title.is_none());
        assert!(changes.country.is_none());
        assert!(changes.salary.is_none());
    }

    #[test]
    fn test_update_rejects_present_but_invalid_fields() {
        let err = validate_update(&payload(json!({ "country": "  " }))).unwrap_err();
        assert_eq!(message(err), "country must be a non-empty string");

        let err = validate_update(&payload(json!({ "salary": -0.01 }))).unwrap_err();
        assert_eq!(message(err), SALARY_INVALID);
    }

    #[test]
    fn test_update_rejects_blank_and_boolean_salary() {
        for salary in [json!(""), json!("   "), json!(true), json!(false)] {
            let err = validate_update(&payload(json!({ "salary": salary.clone() }))).unwrap_err();
            assert_eq!(message(err), SALARY_INVALID, "salary {salary}");
        }
    }

    #[test]
    fn test_update_treats_null_as_absent() {
        let changes = validate_update(&payload(json!({ "salary": null, "jobTitle": "Lead" })))
            .unwrap();
        assert!(changes.salary.is_none());
        assert_eq!(changes.job_title.as_deref(), Some("Lead"));
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("1").unwrap(), 1);
        assert_eq!(parse_id(" 17 ").unwrap(), 17);
        assert_eq!(parse_id("7.0").unwrap(), 7);
        for raw in ["abc", "0", "-3", "1.5", "", "NaN", "inf", "1e400"] {
            let err = parse_id(raw).unwrap_err();
            assert_eq!(message(err), INVALID_ID, "raw {raw:?}");
        }
    }

    #[test]
    fn test_parse_gross() {
        assert_eq!(parse_gross(Some("100000")).unwrap(), 100000.0);
        assert_eq!(parse_gross(Some("0")).unwrap(), 0.0);
        assert_eq!(parse_gross(Some("2500.75")).unwrap(), 2500.75);

        assert_eq!(message(parse_gross(None).unwrap_err()), GROSS_REQUIRED);
        assert_eq!(message(parse_gross(Some("")).unwrap_err()), GROSS_REQUIRED);

        for raw in ["-1", "abc", "inf", " "] {
            assert_eq!(message(parse_gross(Some(raw)).unwrap_err()), GROSS_INVALID);
        }
    }
}
