//! HTTP request handlers.
//!
//! Controllers are the only layer that assigns status codes. They deserialize
//! request bodies, convert DTOs to parameter types, call into the service layer
//! and convert domain models back to DTOs for the response.

pub mod employee;
