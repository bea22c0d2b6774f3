use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::{json, Value};
use test_utils::builder::TestBuilder;
use test_utils::factory::employee::{create_employee, create_employee_with_email, EmployeeFactory};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};

mod create_employee;

/// Builds the employee router on a fresh in-memory database.
///
/// The connection is returned alongside the app so tests can seed rows directly.
async fn test_app() -> (Router, DatabaseConnection) {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.unwrap();
    let app = router().with_state(AppState::new(db.clone()));

    (app, db)
}

/// Sends a bodyless request to the app and returns the raw response.
async fn send(app: &Router, method: Method, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Sends a JSON request to the app and returns the raw response.
async fn send_json(app: &Router, method: Method, uri: &str, body: &Value) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Collects a response body and parses it as JSON.
async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
