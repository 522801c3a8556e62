//! Employee business logic
//!
//! The service owns the rules the store cannot express on its own (the
//! proactive duplicate-email check) and is the single place where raw
//! storage failures are classified into the domain error taxonomy; no
//! `sqlx::Error` escapes past this layer.

use crate::domain::{CreateEmployeeInput, Employee, EmployeeQuery};
use crate::error::{AppError, Result};
use crate::repository::EmployeeRepository;
use std::sync::Arc;
use validator::Validate;

pub struct EmployeeService<R: EmployeeRepository> {
    repo: Arc<R>,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Search employees by name or department.
    pub async fn search_employees(&self, query: &EmployeeQuery) -> Result<Vec<Employee>> {
        self.repo.search(query).await.map_err(storage_unavailable)
    }

    /// Get a single employee by id. Absence is `Ok(None)`; the boundary
    /// decides whether that is a 404.
    pub async fn get_employee_by_id(&self, id: i64) -> Result<Option<Employee>> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(storage_unavailable)
    }

    /// Create a new employee record.
    ///
    /// The duplicate-email check here is proactive; the unique index on
    /// `email` remains the backstop for two concurrent creates that both
    /// pass this check. The lookup and the insert run on separately pooled
    /// connections, which is safe: no transaction spans them, and the
    /// insert itself pins one connection for its INSERT plus read-back.
    pub async fn create_employee(&self, input: CreateEmployeeInput) -> Result<Employee> {
        input.validate()?;

        let existing = self
            .repo
            .find_by_email(&input.email)
            .await
            .map_err(storage_unavailable)?;
        if existing.is_some() {
            return Err(AppError::Validation(format!(
                "An employee with email '{}' already exists",
                input.email
            )));
        }

        self.repo.create(&input).await.map_err(storage_unavailable)
    }
}

/// Classify raw storage failures as [`AppError::StorageUnavailable`].
/// Domain errors (`NotFound`, `Validation`) pass through untouched.
fn storage_unavailable(err: AppError) -> AppError {
    match err {
        AppError::Database(e) => {
            tracing::error!("Record store query failed: {:?}", e);
            AppError::StorageUnavailable("Failed to reach the record store".to_string())
        }
        AppError::Internal(e) => {
            tracing::error!("Unexpected repository failure: {:?}", e);
            AppError::StorageUnavailable("Failed to reach the record store".to_string())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::employee::MockEmployeeRepository;
    use chrono::NaiveDate;
    use mockall::predicate::*;

    fn sample_employee(id: i64, email: &str) -> Employee {
        Employee {
            id,
            name: "Anita Desai".to_string(),
            email: email.to_string(),
            department: "Engineering".to_string(),
            designation: "QA Engineer".to_string(),
            date_of_joining: NaiveDate::from_ymd_opt(2021, 9, 15).unwrap(),
        }
    }

    fn sample_input(email: &str) -> CreateEmployeeInput {
        CreateEmployeeInput {
            name: "Anita Desai".to_string(),
            email: email.to_string(),
            department: "Engineering".to_string(),
            designation: "QA Engineer".to_string(),
            date_of_joining: NaiveDate::from_ymd_opt(2021, 9, 15).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_employee_success() {
        let mut mock = MockEmployeeRepository::new();

        mock.expect_find_by_email()
            .with(eq("anita.desai@company.com"))
            .returning(|_| Ok(None));

        mock.expect_create()
            .returning(|input| Ok(sample_employee(1, &input.email)));

        let service = EmployeeService::new(Arc::new(mock));
        let employee = service
            .create_employee(sample_input("anita.desai@company.com"))
            .await
            .unwrap();

        assert_eq!(employee.id, 1);
        assert_eq!(employee.email, "anita.desai@company.com");
    }

    #[tokio::test]
    async fn test_create_employee_duplicate_email() {
        let mut mock = MockEmployeeRepository::new();

        mock.expect_find_by_email()
            .with(eq("anita.desai@company.com"))
            .returning(|email| Ok(Some(sample_employee(1, email))));
        // create must never be invoked when the email is already taken
        mock.expect_create().never();

        let service = EmployeeService::new(Arc::new(mock));
        let result = service
            .create_employee(sample_input("anita.desai@company.com"))
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_employee_invalid_input() {
        let mut mock = MockEmployeeRepository::new();
        mock.expect_find_by_email().never();
        mock.expect_create().never();

        let service = EmployeeService::new(Arc::new(mock));
        let result = service.create_employee(sample_input("not-an-email")).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_employee_storage_failure_on_lookup() {
        let mut mock = MockEmployeeRepository::new();

        mock.expect_find_by_email()
            .returning(|_| Err(AppError::Database(sqlx::Error::PoolClosed)));
        mock.expect_create().never();

        let service = EmployeeService::new(Arc::new(mock));
        let result = service
            .create_employee(sample_input("anita.desai@company.com"))
            .await;

        assert!(matches!(result, Err(AppError::StorageUnavailable(_))));
    }

    #[tokio::test]
    async fn test_search_employees_delegates() {
        let mut mock = MockEmployeeRepository::new();

        mock.expect_search()
            .withf(|query| query.term.as_deref() == Some("eng") && query.limit == 50)
            .returning(|_| Ok(vec![sample_employee(1, "anita.desai@company.com")]));

        let service = EmployeeService::new(Arc::new(mock));
        let query = EmployeeQuery {
            term: Some("eng".to_string()),
            limit: 50,
            offset: 0,
        };
        let employees = service.search_employees(&query).await.unwrap();

        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].department, "Engineering");
    }

    #[tokio::test]
    async fn test_search_employees_storage_failure() {
        let mut mock = MockEmployeeRepository::new();

        mock.expect_search()
            .returning(|_| Err(AppError::Database(sqlx::Error::PoolTimedOut)));

        let service = EmployeeService::new(Arc::new(mock));
        let result = service.search_employees(&EmployeeQuery::default()).await;

        assert!(matches!(result, Err(AppError::StorageUnavailable(_))));
    }

    #[tokio::test]
    async fn test_get_employee_by_id_absent() {
        let mut mock = MockEmployeeRepository::new();

        mock.expect_find_by_id().with(eq(42)).returning(|_| Ok(None));

        let service = EmployeeService::new(Arc::new(mock));
        let result = service.get_employee_by_id(42).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_employee_by_id_found() {
        let mut mock = MockEmployeeRepository::new();

        mock.expect_find_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(sample_employee(id, "anita.desai@company.com"))));

        let service = EmployeeService::new(Arc::new(mock));
        let employee = service.get_employee_by_id(1).await.unwrap().unwrap();

        assert_eq!(employee.name, "Anita Desai");
    }
}
