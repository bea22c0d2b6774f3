//! Employee data transfer objects.
//!
//! Request and response bodies share the same field set; `id` is server-assigned
//! and ignored on input (POST ignores it entirely, PUT takes the id from the path).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Employee as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    /// Server-assigned identifier, unique and immutable.
    pub id: i64,
    /// Given name, required.
    pub first_name: String,
    /// Family name, optional.
    pub last_name: Option<String>,
    /// Email address, unique across all employees.
    pub email: String,
}

/// Employee fields accepted on create and update requests.
///
/// A client-supplied `id` is accepted for shape compatibility but never used:
/// creation assigns a fresh id and updates take the id from the request path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveEmployeeDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    pub email: String,
}
