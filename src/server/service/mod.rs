//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Rules**: Enforcing invariants such as email uniqueness on create
//! - **Orchestration**: Coordinating repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Absence of a record is data here, not an error: lookups return `Option` and the
//! controller decides whether that becomes a 404.

pub mod employee;
