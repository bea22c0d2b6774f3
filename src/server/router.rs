use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;

use crate::server::{
    controller::employee::{
        create_employee, delete_employee, get_employee_by_id, get_employees, update_employee,
    },
    state::AppState,
};

/// OpenAPI document covering the employee endpoints.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::controller::employee::create_employee,
        crate::server::controller::employee::get_employees,
        crate::server::controller::employee::get_employee_by_id,
        crate::server::controller::employee::update_employee,
        crate::server::controller::employee::delete_employee,
    ),
    components(schemas(
        crate::model::employee::EmployeeDto,
        crate::model::employee::SaveEmployeeDto,
        crate::model::api::ErrorDto,
    ))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/employees", post(create_employee).get(get_employees))
        .route(
            "/api/employees/{id}",
            get(get_employee_by_id)
                .put(update_employee)
                .delete(delete_employee),
        )
}
