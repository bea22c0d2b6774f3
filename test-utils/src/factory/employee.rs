//! Employee factory for creating test employee entities.
//!
//! This module provides factory methods for creating employee entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test employees with customizable fields.
///
/// Provides a builder pattern for creating employee entities with default values
/// that can be overridden as needed for specific test scenarios. Default emails
/// are unique per factory instance so multiple employees can be inserted without
/// tripping the unique email constraint.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::employee::EmployeeFactory;
///
/// let employee = EmployeeFactory::new(&db)
///     .first_name("Djibril")
///     .last_name("Thiandoum")
///     .email("dgthian@gmail.com")
///     .build()
///     .await?;
/// ```
pub struct EmployeeFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: Option<String>,
    email: String,
}

impl<'a> EmployeeFactory<'a> {
    /// Creates a new EmployeeFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Employee{id}"` where id is auto-incremented
    /// - last_name: `"Test"`
    /// - email: `"employee{id}@example.com"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `EmployeeFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("Employee{}", id),
            last_name: Some("Test".to_string()),
            email: format!("employee{}@example.com", id),
        }
    }

    /// Sets the first name for the employee.
    ///
    /// # Arguments
    /// - `first_name` - Given name for the employee
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the last name for the employee.
    ///
    /// # Arguments
    /// - `last_name` - Family name for the employee
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Clears the last name, creating an employee without one.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn no_last_name(mut self) -> Self {
        self.last_name = None;
        self
    }

    /// Sets the email for the employee.
    ///
    /// # Arguments
    /// - `email` - Email address, must be unique across inserted employees
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Builds and inserts the employee entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::employee::Model)` - Created employee entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::employee::Model, DbErr> {
        entity::employee::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an employee with default values.
///
/// Shorthand for `EmployeeFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::employee::Model)` - Created employee entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_employee(db: &DatabaseConnection) -> Result<entity::employee::Model, DbErr> {
    EmployeeFactory::new(db).build().await
}

/// Creates an employee with a specific email.
///
/// Shorthand for `EmployeeFactory::new(db).email(email).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `email` - Email address for the employee
///
/// # Returns
/// - `Ok(entity::employee::Model)` - Created employee entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_employee_with_email(
    db: &DatabaseConnection,
    email: impl Into<String>,
) -> Result<entity::employee::Model, DbErr> {
    EmployeeFactory::new(db).email(email).build().await
}
