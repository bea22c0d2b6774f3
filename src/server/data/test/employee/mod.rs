use crate::server::{
    data::employee::EmployeeRepository,
    model::employee::{SaveEmployeeParam, UpdateEmployeeParam},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::employee::{create_employee, create_employee_with_email, EmployeeFactory};

mod update;
