//! API data transfer objects shared by the HTTP surface.

pub mod api;
pub mod employee;
