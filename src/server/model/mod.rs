//! Domain models and operation-specific parameter types.
//!
//! Server-side models sit between the entity models of the data layer and the
//! DTOs of the API surface. Conversions happen at the boundaries: `from_entity`
//! when rows leave the repository, `into_dto` when domain values leave the
//! controller.

pub mod employee;
