//! HTTP request handlers for the employee service API.
//!
//! This module contains the router and the handler functions for all
//! API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Request, State},
    http::{HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use crate::models::{
    CountryMetrics, CountrySalaryReport, Employee, JobTitleMetrics, JobTitleSalaryReport,
    SalaryCalculation,
};

use super::response::ApiErrorResponse;
use super::state::AppState;
use super::validation::{CreateEmployee, Gross, UpdateEmployee, ValidId};

/// Response header carrying the per-request correlation id.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
///
/// Fixed segments under `/employees` are registered alongside `/employees/:id`;
/// the router always prefers a static segment over the id parameter, so
/// `/employees/country/India` never reaches the id guard.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/employees",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route(
            "/employees/metrics/country/:country",
            get(metrics_by_country_handler),
        )
        .route(
            "/employees/metrics/job-title/:job_title",
            get(average_by_job_title_handler),
        )
        .route("/employees/country/:country", get(report_by_country_handler))
        .route("/employees/job/:job_title", get(report_by_job_title_handler))
        .route(
            "/employees/:id",
            get(get_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .route("/employees/:id/salary", get(salary_handler))
        // Root-level aliases kept for older clients.
        .route("/metrics/country/:country", get(metrics_by_country_handler))
        .route("/metrics/job/:job_title", get(average_by_job_title_handler))
        .layer(middleware::from_fn(correlation_middleware))
        .with_state(state)
}

/// Runs each request inside a span tagged with a fresh correlation id and
/// echoes the id back in [`CORRELATION_ID_HEADER`].
async fn correlation_middleware(request: Request, next: Next) -> Response {
    let correlation_id = Uuid::new_v4();
    let span = info_span!(
        "request",
        correlation_id = %correlation_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    let mut response = next.run(request).instrument(span).await;
    if let Ok(value) = HeaderValue::from_str(&correlation_id.to_string()) {
        response.headers_mut().insert(CORRELATION_ID_HEADER, value);
    }
    response
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

/// Handler for POST /employees.
async fn create_employee_handler(
    State(state): State<AppState>,
    CreateEmployee(new_employee): CreateEmployee,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let employee = state.service().create(new_employee).await?;
    info!(employee_id = employee.id, "Employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<Employee>>> {
    Ok(Json(state.service().get_all().await?))
}

/// Handler for GET /employees/:id.
async fn get_employee_handler(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> ApiResult<Json<Employee>> {
    Ok(Json(state.service().get_by_id(id).await?))
}

/// Handler for PUT /employees/:id.
///
/// Only the fields present in the body are changed.
async fn update_employee_handler(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    UpdateEmployee(changes): UpdateEmployee,
) -> ApiResult<Json<Employee>> {
    let employee = state.service().update(id, changes).await?;
    info!(employee_id = id, "Employee updated");
    Ok(Json(employee))
}

/// Handler for DELETE /employees/:id.
async fn delete_employee_handler(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> ApiResult<StatusCode> {
    state.service().delete(id).await?;
    info!(employee_id = id, "Employee deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /employees/:id/salary?gross=N.
async fn salary_handler(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    Gross(gross): Gross,
) -> ApiResult<Json<SalaryCalculation>> {
    Ok(Json(state.service().calculate_salary(id, gross).await?))
}

/// Handler for GET /employees/metrics/country/:country.
async fn metrics_by_country_handler(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> ApiResult<Json<CountryMetrics>> {
    Ok(Json(state.service().get_metrics_by_country(&country).await?))
}

/// Handler for GET /employees/metrics/job-title/:job_title.
async fn average_by_job_title_handler(
    State(state): State<AppState>,
    Path(job_title): Path<String>,
) -> ApiResult<Json<JobTitleMetrics>> {
    Ok(Json(
        state.service().get_average_by_job_title(&job_title).await?,
    ))
}

/// Handler for GET /employees/country/:country.
async fn report_by_country_handler(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> ApiResult<Json<CountrySalaryReport>> {
    Ok(Json(
        state
            .service()
            .get_salary_report_by_country(&country)
            .await?,
    ))
}

/// Handler for GET /employees/job/:job_title.
async fn report_by_job_title_handler(
    State(state): State<AppState>,
    Path(job_title): Path<String>,
) -> ApiResult<Json<JobTitleSalaryReport>> {
    Ok(Json(
        state
            .service()
            .get_salary_report_by_job_title(&job_title)
            .await?,
    ))
}
