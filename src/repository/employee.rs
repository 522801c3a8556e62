//! Employee repository
//!
//! Owns query construction and the ordering/pagination contract; business
//! rules live in the service layer. Raw storage failures surface as
//! [`AppError::Database`](crate::error::AppError) and are classified by the
//! service.

use crate::domain::{CreateEmployeeInput, Employee, EmployeeQuery};
use crate::error::Result;
use async_trait::async_trait;
use sqlx::{MySql, MySqlPool, QueryBuilder};

const EMPLOYEE_COLUMNS: &str = "id, name, email, department, designation, date_of_joining";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Search by name or department with AND-combined whitespace tokens,
    /// ordered by `name` (ties broken by `id`), then paginated.
    async fn search(&self, query: &EmployeeQuery) -> Result<Vec<Employee>>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>>;
    async fn create(&self, input: &CreateEmployeeInput) -> Result<Employee>;
    /// Unfiltered listing with the same ordering and pagination contract
    /// as [`search`](EmployeeRepository::search).
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Employee>>;
}

pub struct EmployeeRepositoryImpl {
    pool: MySqlPool,
}

impl EmployeeRepositoryImpl {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

/// Split a search term into lowercased whitespace-delimited tokens.
fn search_tokens(term: &str) -> Vec<String> {
    term.split_whitespace().map(|t| t.to_lowercase()).collect()
}

/// Build the search query: every token must match name or department as a
/// case-insensitive substring.
fn build_search_query(
    tokens: &[String],
    limit: i64,
    offset: i64,
) -> QueryBuilder<'static, MySql> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT {} FROM employees",
        EMPLOYEE_COLUMNS
    ));

    for (i, token) in tokens.iter().enumerate() {
        builder.push(if i == 0 { " WHERE " } else { " AND " });
        let pattern = format!("%{}%", token);
        builder.push("(LOWER(name) LIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR LOWER(department) LIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }

    builder.push(" ORDER BY name ASC, id ASC LIMIT ");
    builder.push_bind(limit);
    builder.push(" OFFSET ");
    builder.push_bind(offset);
    builder
}

#[async_trait]
impl EmployeeRepository for EmployeeRepositoryImpl {
    async fn search(&self, query: &EmployeeQuery) -> Result<Vec<Employee>> {
        let tokens = query
            .term
            .as_deref()
            .map(search_tokens)
            .unwrap_or_default();

        let mut builder = build_search_query(&tokens, query.limit, query.offset);
        let employees = builder
            .build_query_as::<Employee>()
            .fetch_all(&self.pool)
            .await?;

        Ok(employees)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {} FROM employees WHERE id = ?",
            EMPLOYEE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>> {
        // The email column carries a binary collation, so this match is
        // exact and case-sensitive even though MySQL defaults to CI.
        let employee = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {} FROM employees WHERE email = ?",
            EMPLOYEE_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn create(&self, input: &CreateEmployeeInput) -> Result<Employee> {
        // One connection for the insert and the read-back; LAST_INSERT_ID
        // is per-connection state in MySQL.
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO employees (name, email, department, designation, date_of_joining)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.department)
        .bind(&input.designation)
        .bind(input.date_of_joining)
        .execute(&mut *conn)
        .await?;

        let id = result.last_insert_id() as i64;

        let employee = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {} FROM employees WHERE id = ?",
            EMPLOYEE_COLUMNS
        ))
        .bind(id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(employee)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {} FROM employees ORDER BY name ASC, id ASC LIMIT ? OFFSET ?",
            EMPLOYEE_COLUMNS
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }
}
