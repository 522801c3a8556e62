//! Staffdir Core - Employee Directory Backend
//!
//! This crate provides the backend for the staff directory: a read-heavy
//! search API over employee records plus record creation, backed by MySQL.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod keepalive;
pub mod migration;
pub mod repository;
pub mod server;
pub mod service;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
