pub use super::employee::Entity as Employee;
