//! Business logic layer

pub mod employee;

pub use employee::EmployeeService;
