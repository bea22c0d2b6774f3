//! Employee entity model for the `employees` table.

use sea_orm::entity::prelude::*;

/// Database model for a persisted employee record.
///
/// The id is assigned by the database on insert and never chosen by
/// callers. The email column carries a unique constraint; it is the
/// final authority on email uniqueness regardless of any checks
/// performed above the data layer.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    #[sea_orm(unique)]
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
