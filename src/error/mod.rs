//! Unified error handling for Staffdir Core

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The record store could not be reached or a query failed for
    /// infrastructure reasons. Raised by the service layer; the repository
    /// itself surfaces raw [`AppError::Database`] errors.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation", msg.clone()),
            AppError::StorageUnavailable(msg) => {
                tracing::error!("Storage unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "storage_unavailable",
                    msg.clone(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

// Conversion from validation errors
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::NotFound("Employee not found".to_string());
        assert_eq!(err.to_string(), "Not found: Employee not found");
    }

    #[test]
    fn test_error_conversion() {
        let err: AppError = anyhow::anyhow!("Something went wrong").into();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn test_validation_errors_conversion() {
        use validator::Validate;

        #[derive(Validate)]
        struct Probe {
            #[validate(email)]
            email: String,
        }

        let probe = Probe {
            email: "not-an-email".to_string(),
        };
        let err: AppError = probe.validate().unwrap_err().into();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
