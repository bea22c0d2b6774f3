//! SeaORM entity models for the employee service database schema.

pub mod prelude;

pub mod employee;
