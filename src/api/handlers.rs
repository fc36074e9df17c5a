//! Employee endpoint handlers
//!
//! Core calls do blocking file I/O, so they run on the blocking pool.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use crate::service::SearchCriteria;

use super::dto::{today, EmployeeRequest, EmployeeResponse, NewEmployeeResponse, SearchParams};
use super::error::{ApiError, ApiResult};
use super::state::AppState;

/// `POST /employees`
pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> ApiResult<Json<NewEmployeeResponse>> {
    let Json(request) = payload?;
    let new_employee = request.validate(today())?;

    let service = Arc::clone(&state.service);
    let id = blocking(move || service.create(new_employee)).await?;

    Ok(Json(NewEmployeeResponse { id }))
}

/// `GET /employees/:id`
pub async fn get_employee(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<EmployeeResponse>> {
    let Path(id) = id?;

    let service = Arc::clone(&state.service);
    let employee = blocking(move || service.get_by_id(id)).await?;

    Ok(Json(employee.into()))
}

/// `GET /employees?name=&fromSalary=&toSalary=`
pub async fn search_employees(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Json<Vec<EmployeeResponse>>> {
    let Query(params) = params?;
    params.validate()?;
    let criteria = SearchCriteria::new(params.name, params.from_salary, params.to_salary)?;

    let service = Arc::clone(&state.service);
    let found = blocking(move || service.search(&criteria)).await?;

    Ok(Json(found.into_iter().map(EmployeeResponse::from).collect()))
}

async fn blocking<T, F>(task: F) -> ApiResult<T>
where
    F: FnOnce() -> crate::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| ApiError::Internal(format!("worker task failed: {}", e)))?
        .map_err(ApiError::from)
}
