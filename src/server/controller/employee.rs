use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        employee::{EmployeeDto, SaveEmployeeDto},
    },
    server::{
        error::AppError,
        model::employee::{SaveEmployeeParam, UpdateEmployeeParam},
        service::employee::EmployeeService,
        state::AppState,
    },
};

/// Tag for grouping employee endpoints in OpenAPI documentation
pub static EMPLOYEE_TAG: &str = "employee";

/// POST /api/employees - Create a new employee.
///
/// Persists a new employee record with the provided first name, last name and
/// email. The id is assigned by the server; any id in the request body is
/// ignored. Creation fails when another employee already holds the email.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Employee fields (firstName, lastName, email)
///
/// # Returns
/// - `201 Created` - Successfully created employee, body includes assigned id
/// - `400 Bad Request` - Request body is not a valid employee payload
/// - `409 Conflict` - Email already belongs to another employee
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = EMPLOYEE_TAG,
    request_body = SaveEmployeeDto,
    responses(
        (status = 201, description = "Successfully created employee", body = EmployeeDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<SaveEmployeeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|err| AppError::BadRequest(err.body_text()))?;

    let service = EmployeeService::new(&state.db);

    let employee = service
        .save_employee(SaveEmployeeParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(employee.into_dto())))
}

/// GET /api/employees - Get all employees.
///
/// Returns every persisted employee in unspecified order. An empty store yields
/// an empty array with status 200.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - JSON array of EmployeeDto (possibly empty)
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = EMPLOYEE_TAG,
    responses(
        (status = 200, description = "All employees", body = Vec<EmployeeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_employees(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = EmployeeService::new(&state.db);

    let employees = service.get_all_employees().await?;

    let employees_dto: Vec<EmployeeDto> = employees.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(employees_dto)))
}

/// GET /api/employees/{id} - Get an employee by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Server-assigned employee id from the path
///
/// # Returns
/// - `200 OK` - Employee found
/// - `404 Not Found` - No employee with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    tag = EMPLOYEE_TAG,
    params(
        ("id" = i64, Path, description = "Employee id")
    ),
    responses(
        (status = 200, description = "Employee found", body = EmployeeDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let service = EmployeeService::new(&state.db);

    match service.get_employee_by_id(id).await? {
        Some(employee) => Ok((StatusCode::OK, Json(employee.into_dto()))),
        None => Err(AppError::NotFound(format!(
            "Employee with id {} not found",
            id
        ))),
    }
}

/// PUT /api/employees/{id} - Update an existing employee.
///
/// Fetches the employee for the path id first and returns 404 when it is absent.
/// Otherwise the first name, last name and email from the request body replace
/// the stored values; the id is preserved.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Server-assigned employee id from the path
/// - `payload` - Replacement employee fields
///
/// # Returns
/// - `200 OK` - Updated employee with its id unchanged
/// - `400 Bad Request` - Request body is not a valid employee payload
/// - `404 Not Found` - No employee with that id; no row is created
/// - `409 Conflict` - New email collides with another employee's (database constraint)
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    tag = EMPLOYEE_TAG,
    params(
        ("id" = i64, Path, description = "Employee id")
    ),
    request_body = SaveEmployeeDto,
    responses(
        (status = 200, description = "Successfully updated employee", body = EmployeeDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<SaveEmployeeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|err| AppError::BadRequest(err.body_text()))?;

    let service = EmployeeService::new(&state.db);

    if service.get_employee_by_id(id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Employee with id {} not found",
            id
        )));
    }

    let employee = service
        .update_employee(UpdateEmployeeParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(employee.into_dto())))
}

/// DELETE /api/employees/{id} - Delete an employee.
///
/// Checks existence first and returns 404 for absent ids; the repository-level
/// delete itself treats absent ids as a no-op.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Server-assigned employee id from the path
///
/// # Returns
/// - `200 OK` - Employee deleted, empty body
/// - `404 Not Found` - No employee with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = EMPLOYEE_TAG,
    params(
        ("id" = i64, Path, description = "Employee id")
    ),
    responses(
        (status = 200, description = "Employee deleted"),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let service = EmployeeService::new(&state.db);

    if service.get_employee_by_id(id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Employee with id {} not found",
            id
        )));
    }

    service.delete_employee(id).await?;

    Ok(StatusCode::OK)
}
