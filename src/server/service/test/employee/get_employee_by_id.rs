use super::*;

/// Tests fetching an existing employee through the service.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn returns_employee_when_present() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = create_employee(db).await?;

    let service = EmployeeService::new(db);
    let found = service.get_employee_by_id(existing.id).await.unwrap();

    assert!(found.is_some());
    assert_eq!(found.unwrap().email, existing.email);

    Ok(())
}

/// Tests fetching an absent id through the service.
///
/// Absence is a valid result here; turning it into an error is the controller's
/// job.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = EmployeeService::new(db);
    let found = service.get_employee_by_id(42).await.unwrap();

    assert!(found.is_none());

    Ok(())
}
