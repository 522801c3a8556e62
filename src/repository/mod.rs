//! Data access layer (Repository pattern)

pub mod employee;

pub use employee::EmployeeRepository;
