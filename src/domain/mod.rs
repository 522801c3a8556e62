//! Domain models for Staffdir Core

pub mod employee;

pub use employee::*;
