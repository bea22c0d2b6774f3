use super::*;

/// Tests listing employees when the table is empty.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = EmployeeService::new(db);
    let employees = service.get_all_employees().await.unwrap();

    assert!(employees.is_empty());

    Ok(())
}

/// Tests listing employees after several creates.
///
/// Expected: Ok with every persisted row present
#[tokio::test]
async fn returns_all_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = create_employee(db).await?;
    let second = create_employee(db).await?;

    let service = EmployeeService::new(db);
    let employees = service.get_all_employees().await.unwrap();

    assert_eq!(employees.len(), 2);
    assert!(employees.iter().any(|e| e.id == first.id));
    assert!(employees.iter().any(|e| e.id == second.id));

    Ok(())
}
