//! Employee domain model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Employee entity
///
/// `id` is assigned by the store on insert and never reused or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: String,
    pub designation: String,
    pub date_of_joining: NaiveDate,
}

/// Input for creating a new employee
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEmployeeInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email, length(min = 1, max = 100))]
    pub email: String,
    #[validate(length(min = 1, max = 50))]
    pub department: String,
    #[validate(length(min = 1, max = 100))]
    pub designation: String,
    pub date_of_joining: NaiveDate,
}

/// Partial update shape accepted at the boundary.
///
/// No endpoint, service, or repository operation consumes this yet: how
/// absent fields are distinguished from explicit nulls, and who is allowed
/// to mutate records, are both still undecided.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEmployeeInput {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(email, length(min = 1, max = 100))]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub department: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub designation: Option<String>,
    pub date_of_joining: Option<NaiveDate>,
}

/// Search parameters passed through to the repository.
///
/// `limit` and `offset` are validated at the API boundary (limit 1-100,
/// offset >= 0); the repository trusts them as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeQuery {
    pub term: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

impl Default for EmployeeQuery {
    fn default() -> Self {
        Self {
            term: None,
            limit: 50,
            offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> CreateEmployeeInput {
        CreateEmployeeInput {
            name: "Anita Desai".to_string(),
            email: "anita.desai@company.com".to_string(),
            department: "Engineering".to_string(),
            designation: "QA Engineer".to_string(),
            date_of_joining: NaiveDate::from_ymd_opt(2021, 9, 15).unwrap(),
        }
    }

    #[test]
    fn test_create_input_valid() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn test_create_input_invalid_email() {
        let mut input = valid_input();
        input.email = "not-an-email".to_string();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_input_name_too_long() {
        let mut input = valid_input();
        input.name = "x".repeat(101);
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_input_empty_department() {
        let mut input = valid_input();
        input.department = String::new();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_update_input_partial() {
        let input = UpdateEmployeeInput {
            name: Some("Anita D. Desai".to_string()),
            email: None,
            department: None,
            designation: None,
            date_of_joining: None,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_employee_query_defaults() {
        let query = EmployeeQuery::default();
        assert_eq!(query.term, None);
        assert_eq!(query.limit, 50);
        assert_eq!(query.offset, 0);
    }
}
