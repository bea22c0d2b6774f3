//! Database repository layer.
//!
//! This module contains repository structs that handle database operations (CRUD)
//! for each domain entity. Repositories use SeaORM entity models internally and
//! return domain models to maintain separation between the data layer and the
//! business logic layer. No business rules live here.

pub mod employee;
