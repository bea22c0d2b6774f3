//! Employee service for business logic.
//!
//! This module provides the `EmployeeService` enforcing the business rules of the
//! employee resource: email uniqueness on create, and mediation between the HTTP
//! layer and the repository. Existence checks for update and delete belong to the
//! controller, which owns the translation of absence into status codes.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::employee::EmployeeRepository,
    error::AppError,
    model::employee::{Employee, SaveEmployeeParam, UpdateEmployeeParam},
};

/// Service providing business logic for employee management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, querying, updating and deleting employees.
pub struct EmployeeService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> EmployeeService<'a> {
    /// Creates a new EmployeeService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `EmployeeService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new employee after checking email uniqueness.
    ///
    /// Looks up the requested email first; if any employee already holds it the
    /// save is rejected without touching the table. Two concurrent creates may
    /// both pass this pre-check, in which case the database's unique constraint
    /// rejects the second insert.
    ///
    /// # Arguments
    /// - `param` - Employee fields to persist
    ///
    /// # Returns
    /// - `Ok(Employee)` - The persisted employee including its assigned id
    /// - `Err(AppError::EmailAlreadyExists)` - Another employee holds the email
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn save_employee(&self, param: SaveEmployeeParam) -> Result<Employee, AppError> {
        let employee_repo = EmployeeRepository::new(self.db);

        if employee_repo.find_by_email(&param.email).await?.is_some() {
            return Err(AppError::EmailAlreadyExists(param.email));
        }

        let employee = employee_repo.save(param).await?;

        Ok(employee)
    }

    /// Retrieves all employees.
    ///
    /// An empty store yields an empty vector; that is a valid result, not an
    /// error.
    ///
    /// # Returns
    /// - `Ok(Vec<Employee>)` - All persisted employees in unspecified order
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_employees(&self) -> Result<Vec<Employee>, AppError> {
        let employee_repo = EmployeeRepository::new(self.db);
        let employees = employee_repo.find_all().await?;
        Ok(employees)
    }

    /// Retrieves an employee by id.
    ///
    /// This operation never raises for absence; the caller decides what a missing
    /// row means.
    ///
    /// # Arguments
    /// - `id` - Server-assigned employee id
    ///
    /// # Returns
    /// - `Ok(Some(Employee))` - Employee found
    /// - `Ok(None)` - No employee with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_employee_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        let employee_repo = EmployeeRepository::new(self.db);
        let employee = employee_repo.find_by_id(id).await?;
        Ok(employee)
    }

    /// Replaces the fields of an existing employee.
    ///
    /// Does not re-check existence; the controller verifies the id before calling.
    /// Email uniqueness is not re-validated here either; the database's unique
    /// constraint is the backstop and surfaces as a conflict when violated.
    ///
    /// # Arguments
    /// - `param` - Replacement fields plus the id of the row to update
    ///
    /// # Returns
    /// - `Ok(Employee)` - The updated employee with its id unchanged
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_employee(&self, param: UpdateEmployeeParam) -> Result<Employee, AppError> {
        let employee_repo = EmployeeRepository::new(self.db);
        let employee = employee_repo.update(param).await?;
        Ok(employee)
    }

    /// Deletes an employee by id.
    ///
    /// Unconditional at this layer; deleting an absent id is a repository-level
    /// no-op. The controller performs the existence check that turns absence into
    /// a 404.
    ///
    /// # Arguments
    /// - `id` - Server-assigned employee id
    ///
    /// # Returns
    /// - `Ok(())` - Row removed, or no matching row existed
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_employee(&self, id: i64) -> Result<(), AppError> {
        let employee_repo = EmployeeRepository::new(self.db);
        employee_repo.delete_by_id(id).await?;
        Ok(())
    }
}
