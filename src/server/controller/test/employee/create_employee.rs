use super::*;

/// Tests POST /api/employees followed by GET of the created resource.
///
/// Expected: 201 with the assigned id, then 200 on the fetch
#[tokio::test]
async fn creates_employee_then_fetches_it() -> Result<(), DbErr> {
    let (app, _db) = test_app().await;

    let response = send_json(
        &app,
        Method::POST,
        "/api/employees",
        &json!({
            "firstName": "Djibril",
            "lastName": "Thiandoum",
            "email": "dgthian@gmail.com"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["firstName"], "Djibril");
    assert_eq!(body["lastName"], "Thiandoum");
    assert_eq!(body["email"], "dgthian@gmail.com");

    let response = send(&app, Method::GET, "/api/employees/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["email"], "dgthian@gmail.com");

    Ok(())
}

/// Tests POST /api/employees with an email that is already taken.
///
/// Expected: 409 with an error body and no second row created
#[tokio::test]
async fn duplicate_email_returns_409() -> Result<(), DbErr> {
    let (app, db) = test_app().await;

    create_employee_with_email(&db, "dgthian@gmail.com").await?;

    let response = send_json(
        &app,
        Method::POST,
        "/api/employees",
        &json!({
            "firstName": "Someone",
            "lastName": "Else",
            "email": "dgthian@gmail.com"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert!(body["error"].is_string());

    let response = send(&app, Method::GET, "/api/employees").await;
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    Ok(())
}

/// Tests POST /api/employees with a client-supplied id in the body.
///
/// Expected: 201 with a server-assigned id, not the client's
#[tokio::test]
async fn ignores_client_supplied_id() -> Result<(), DbErr> {
    let (app, _db) = test_app().await;

    let response = send_json(
        &app,
        Method::POST,
        "/api/employees",
        &json!({
            "id": 999,
            "firstName": "Awa",
            "lastName": "Ndiaye",
            "email": "awa@gmail.com"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["id"], 1);

    Ok(())
}

/// Tests POST /api/employees with a body that is not valid JSON.
///
/// Expected: 400 with an error body
#[tokio::test]
async fn malformed_body_returns_400() -> Result<(), DbErr> {
    let (app, _db) = test_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/employees")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"firstName\":"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].is_string());

    Ok(())
}

/// Tests POST /api/employees without a last name.
///
/// Expected: 201 with lastName null in the response
#[tokio::test]
async fn accepts_missing_last_name() -> Result<(), DbErr> {
    let (app, _db) = test_app().await;

    let response = send_json(
        &app,
        Method::POST,
        "/api/employees",
        &json!({
            "firstName": "Awa",
            "email": "awa@gmail.com"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert!(body["lastName"].is_null());

    Ok(())
}
