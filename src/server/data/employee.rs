//! Employee data repository for database operations.
//!
//! This module provides the `EmployeeRepository` for managing employee records in
//! the database. It handles creation, updates, queries and deletion with proper
//! conversion between entity models and domain models at the infrastructure
//! boundary. Business rules (such as email uniqueness) are enforced a layer up;
//! the unique constraint on the email column is the database-level backstop.

use crate::server::model::employee::{Employee, SaveEmployeeParam, UpdateEmployeeParam};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Statement,
};

/// Repository providing database operations for employee management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating and deleting employee records.
pub struct EmployeeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeRepository<'a> {
    /// Creates a new EmployeeRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `EmployeeRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new employee row.
    ///
    /// The id is assigned by the database. A duplicate email fails here with the
    /// unique-constraint violation even if the caller skipped its own check.
    ///
    /// # Arguments
    /// - `param` - Employee fields to persist
    ///
    /// # Returns
    /// - `Ok(Employee)` - The persisted row including its assigned id
    /// - `Err(DbErr)` - Database error during insert (including unique-email violation)
    pub async fn save(&self, param: SaveEmployeeParam) -> Result<Employee, DbErr> {
        let entity = entity::employee::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            email: ActiveValue::Set(param.email),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Employee::from_entity(entity))
    }

    /// Replaces the fields of the row identified by `param.id`.
    ///
    /// The id itself is never changed. Updating a row that does not exist fails;
    /// callers that need a 404 check existence first.
    ///
    /// # Arguments
    /// - `param` - Replacement fields plus the id of the row to update
    ///
    /// # Returns
    /// - `Ok(Employee)` - The updated row
    /// - `Err(DbErr)` - Database error, including updates of absent ids
    pub async fn update(&self, param: UpdateEmployeeParam) -> Result<Employee, DbErr> {
        let entity = entity::employee::ActiveModel {
            id: ActiveValue::Set(param.id),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            email: ActiveValue::Set(param.email),
        }
        .update(self.db)
        .await?;

        Ok(Employee::from_entity(entity))
    }

    /// Gets all employees.
    ///
    /// Row order is unspecified. An empty table yields an empty vector, not an
    /// error.
    ///
    /// # Returns
    /// - `Ok(Vec<Employee>)` - All persisted employees
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_all(&self) -> Result<Vec<Employee>, DbErr> {
        let entities = entity::prelude::Employee::find().all(self.db).await?;

        Ok(entities.into_iter().map(Employee::from_entity).collect())
    }

    /// Finds an employee by id.
    ///
    /// # Arguments
    /// - `id` - Server-assigned employee id
    ///
    /// # Returns
    /// - `Ok(Some(Employee))` - Employee found
    /// - `Ok(None)` - No employee with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, DbErr> {
        let entity = entity::prelude::Employee::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Employee::from_entity))
    }

    /// Finds an employee by email.
    ///
    /// Comparison is exact and case-sensitive; no normalization is applied.
    ///
    /// # Arguments
    /// - `email` - Email address to look up
    ///
    /// # Returns
    /// - `Ok(Some(Employee))` - Employee found
    /// - `Ok(None)` - No employee with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DbErr> {
        let entity = entity::prelude::Employee::find()
            .filter(entity::employee::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Employee::from_entity))
    }

    /// Finds the employee matching both names using the query builder.
    ///
    /// Behavior when multiple rows match is unspecified; callers work with
    /// datasets that are unique by email.
    ///
    /// # Arguments
    /// - `first_name` - Given name to match exactly
    /// - `last_name` - Family name to match exactly
    ///
    /// # Returns
    /// - `Ok(Some(Employee))` - A row matching both names
    /// - `Ok(None)` - No row matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, DbErr> {
        let entity = entity::prelude::Employee::find()
            .filter(entity::employee::Column::FirstName.eq(first_name))
            .filter(entity::employee::Column::LastName.eq(last_name))
            .one(self.db)
            .await?;

        Ok(entity.map(Employee::from_entity))
    }

    /// Finds the employee matching both names using a raw parameterized statement.
    ///
    /// Semantic twin of `find_by_name`; the two exist to exercise both binding
    /// styles and must return equivalent results on the same data.
    ///
    /// # Arguments
    /// - `first_name` - Given name to match exactly
    /// - `last_name` - Family name to match exactly
    ///
    /// # Returns
    /// - `Ok(Some(Employee))` - A row matching both names
    /// - `Ok(None)` - No row matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name_raw(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, DbErr> {
        let entity = entity::prelude::Employee::find()
            .from_raw_sql(Statement::from_sql_and_values(
                self.db.get_database_backend(),
                "SELECT * FROM employees WHERE first_name = ? AND last_name = ?",
                [first_name.into(), last_name.into()],
            ))
            .one(self.db)
            .await?;

        Ok(entity.map(Employee::from_entity))
    }

    /// Deletes the employee with the given id.
    ///
    /// Deleting an absent id is a no-op; it does not fail. Callers that need a
    /// 404 check existence first.
    ///
    /// # Arguments
    /// - `id` - Server-assigned employee id
    ///
    /// # Returns
    /// - `Ok(())` - Row removed, or no matching row existed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_id(&self, id: i64) -> Result<(), DbErr> {
        entity::prelude::Employee::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Removes every employee row.
    ///
    /// Test support only; not exposed over HTTP.
    ///
    /// # Returns
    /// - `Ok(())` - Table emptied
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_all(&self) -> Result<(), DbErr> {
        entity::prelude::Employee::delete_many()
            .exec(self.db)
            .await?;

        Ok(())
    }
}
