//! Application state trait for dependency injection
//!
//! Handlers are generic over this trait, enabling the same handler code to
//! work with both the production `AppState` and test implementations
//! backed by mock repositories.

use crate::config::Config;
use crate::repository::EmployeeRepository;
use crate::service::EmployeeService;

/// Trait for application state that provides access to the employee service.
pub trait HasEmployees: Clone + Send + Sync + 'static {
    /// The employee repository type
    type EmployeeRepo: EmployeeRepository;

    /// Get the application configuration
    fn config(&self) -> &Config;

    /// Get the employee service
    fn employee_service(&self) -> &EmployeeService<Self::EmployeeRepo>;

    /// Check if the record store is reachable
    fn check_ready(&self) -> impl std::future::Future<Output = bool> + Send;
}
