//! Employee domain model and parameters.
//!
//! Provides the domain model for persisted employees along with parameter types
//! for create and update operations. Employee values are plain data carriers;
//! the database row is the source of truth.

use crate::model::employee::{EmployeeDto, SaveEmployeeDto};

/// Persisted employee record.
///
/// Carries the server-assigned id; values of this type only exist for rows that
/// were read from or written to the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    /// Server-assigned identifier, unique and immutable.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name, optional.
    pub last_name: Option<String>,
    /// Email address, unique across all employees.
    pub email: String,
}

impl Employee {
    /// Converts the employee domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `EmployeeDto` - The converted employee DTO
    pub fn into_dto(self) -> EmployeeDto {
        EmployeeDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }

    /// Converts an entity model to an employee domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Employee` - The converted employee domain model
    pub fn from_entity(entity: entity::employee::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
        }
    }
}

/// Parameters for creating a new employee.
///
/// Deliberately carries no id: creation always assigns a fresh one.
#[derive(Debug, Clone)]
pub struct SaveEmployeeParam {
    /// Given name.
    pub first_name: String,
    /// Family name, optional.
    pub last_name: Option<String>,
    /// Email address; the service rejects the save when it is already taken.
    pub email: String,
}

impl SaveEmployeeParam {
    /// Builds create parameters from a request DTO.
    ///
    /// Any client-supplied id on the DTO is dropped here.
    ///
    /// # Arguments
    /// - `dto` - Request body fields
    ///
    /// # Returns
    /// - `SaveEmployeeParam` - Parameters for the service layer
    pub fn from_dto(dto: SaveEmployeeDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
        }
    }
}

/// Parameters for replacing the fields of an existing employee.
#[derive(Debug, Clone)]
pub struct UpdateEmployeeParam {
    /// Identifier of the row to update; taken from the request path, never the body.
    pub id: i64,
    /// Replacement given name.
    pub first_name: String,
    /// Replacement family name.
    pub last_name: Option<String>,
    /// Replacement email address.
    pub email: String,
}

impl UpdateEmployeeParam {
    /// Builds update parameters from a path id and a request DTO.
    ///
    /// The path id wins over any id present in the body.
    ///
    /// # Arguments
    /// - `id` - Identifier from the request path
    /// - `dto` - Request body fields
    ///
    /// # Returns
    /// - `UpdateEmployeeParam` - Parameters for the service layer
    pub fn from_dto(id: i64, dto: SaveEmployeeDto) -> Self {
        Self {
            id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
        }
    }
}
