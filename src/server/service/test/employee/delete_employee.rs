use super::*;

/// Tests deleting an existing employee through the service.
///
/// Expected: Ok with the row gone and the others untouched
#[tokio::test]
async fn removes_only_the_requested_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doomed = create_employee(db).await?;
    let survivor = create_employee(db).await?;

    let service = EmployeeService::new(db);
    service.delete_employee(doomed.id).await.unwrap();

    let remaining = service.get_all_employees().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, survivor.id);

    Ok(())
}

/// Tests deleting an absent id through the service.
///
/// The service deletes unconditionally; the controller owns the 404 for missing
/// rows.
///
/// Expected: Ok
#[tokio::test]
async fn absent_id_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = EmployeeService::new(db);
    let result = service.delete_employee(7).await;

    assert!(result.is_ok());

    Ok(())
}
