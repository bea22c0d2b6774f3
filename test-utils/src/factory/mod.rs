//! Factories for creating test entities with sensible defaults.
//!
//! Each factory provides a builder pattern for inserting entities into a test
//! database with default values that can be overridden per test scenario.

pub mod employee;
pub mod helpers;
