//! Employee API handlers

use crate::api::ListEmployeesQuery;
use crate::domain::{CreateEmployeeInput, EmployeeQuery};
use crate::error::{AppError, Result};
use crate::state::HasEmployees;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Search employees by name or department; no term lists everyone.
pub async fn list<S: HasEmployees>(
    State(state): State<S>,
    Query(params): Query<ListEmployeesQuery>,
) -> Result<impl IntoResponse> {
    let query = EmployeeQuery {
        term: params.search,
        limit: params.limit,
        offset: params.offset,
    };
    let employees = state.employee_service().search_employees(&query).await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get<S: HasEmployees>(
    State(state): State<S>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let employee = state
        .employee_service()
        .get_employee_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))?;
    Ok(Json(employee))
}

/// Create employee
pub async fn create<S: HasEmployees>(
    State(state): State<S>,
    Json(input): Json<CreateEmployeeInput>,
) -> Result<impl IntoResponse> {
    let employee = state.employee_service().create_employee(input).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}
