use super::*;

/// Tests replacing the fields of an existing employee.
///
/// Verifies that first name, last name and email are all overwritten while the
/// id stays the same.
///
/// Expected: Ok with new field values and the original id
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = EmployeeFactory::new(db)
        .first_name("Djibril")
        .last_name("Thiandoum")
        .email("dgthian@gmail.com")
        .build()
        .await?;

    let repo = EmployeeRepository::new(db);
    let updated = repo
        .update(UpdateEmployeeParam {
            id: existing.id,
            first_name: "Awa".to_string(),
            last_name: Some("Ndiaye".to_string()),
            email: "awa@gmail.com".to_string(),
        })
        .await?;

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.first_name, "Awa");
    assert_eq!(updated.last_name.as_deref(), Some("Ndiaye"));
    assert_eq!(updated.email, "awa@gmail.com");

    Ok(())
}

/// Tests clearing the optional last name through an update.
///
/// Expected: Ok with last_name stored as None afterwards
#[tokio::test]
async fn can_clear_last_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = create_employee(db).await?;

    let repo = EmployeeRepository::new(db);
    let updated = repo
        .update(UpdateEmployeeParam {
            id: existing.id,
            first_name: existing.first_name.clone(),
            last_name: None,
            email: existing.email.clone(),
        })
        .await?;

    assert_eq!(updated.last_name, None);

    Ok(())
}

/// Tests updating an id that does not exist.
///
/// The repository does not check existence; the update of an absent row
/// surfaces as a database error. Callers needing a 404 check first.
///
/// Expected: Err and no row created
#[tokio::test]
async fn fails_for_absent_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmployeeRepository::new(db);
    let result = repo
        .update(UpdateEmployeeParam {
            id: 42,
            first_name: "Nobody".to_string(),
            last_name: None,
            email: "nobody@example.com".to_string(),
        })
        .await;

    assert!(result.is_err());
    assert!(repo.find_all().await?.is_empty());

    Ok(())
}
