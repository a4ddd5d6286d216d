use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

use crate::response::ApiErrorResponse;

/// Main API error enum
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Resource not found: {resource_type}")]
    NotFound { resource_type: String },

    #[error("Referenced entity not found: {resource_type}")]
    ReferenceNotFound { resource_type: String },

    #[error("Database error: {0}")]
    Database(#[from] database_layer::DatabaseError),

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl ApiError {
    /// Create a simple validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(resource_type: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
        }
    }

    /// Create an error for a failed cross-entity existence check
    pub fn reference_not_found(resource_type: impl Into<String>) -> Self {
        Self::ReferenceNotFound {
            resource_type: resource_type.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::ReferenceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Database(db_err) => match db_err {
                database_layer::DatabaseError::ConnectionFailed(_) => {
                    StatusCode::SERVICE_UNAVAILABLE
                }
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "validation_error",
            ApiError::BadRequest { .. } => "bad_request",
            ApiError::NotFound { .. } => "not_found",
            ApiError::ReferenceNotFound { .. } => "referenced_entity_not_found",
            ApiError::Database(_) => "database_error",
            ApiError::Internal { .. } => "internal_error",
        }
    }

    /// Pretty format database errors for better user experience
    fn format_database_error(db_error: &database_layer::DatabaseError) -> String {
        match db_error {
            database_layer::DatabaseError::ConnectionFailed(msg) => {
                format!("Unable to connect to the database. {}", msg)
            }
            database_layer::DatabaseError::ConfigurationError(msg) => {
                format!("Database configuration error: {}", msg)
            }
            database_layer::DatabaseError::SqlxError(sqlx_err) => match sqlx_err {
                sqlx::Error::RowNotFound => "Requested record not found.".to_string(),
                sqlx::Error::ColumnNotFound(col) => {
                    format!("Database schema error: Column '{}' not found.", col)
                }
                _ => "Database operation failed. Please try again.".to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4().to_string();
        let status_code = self.status_code();

        // Log the error with correlation ID
        error!(
            error_id = %error_id,
            error_type = %self.error_type(),
            status_code = %status_code.as_u16(),
            error = %self,
            "API error occurred"
        );

        let message = match &self {
            ApiError::Database(db_err) => ApiError::format_database_error(db_err),
            _ => self.to_string(),
        };

        let error_response = ApiErrorResponse {
            error_id,
            error_type: self.error_type().to_string(),
            message,
            timestamp: chrono::Utc::now(),
        };

        (status_code, Json(error_response)).into_response()
    }
}

/// Convert SQLx errors to API errors
impl From<sqlx::Error> for ApiError {
    fn from(sqlx_error: sqlx::Error) -> Self {
        ApiError::Database(database_layer::DatabaseError::SqlxError(sqlx_error))
    }
}

/// Convert anyhow errors to API errors
impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        ApiError::Internal {
            message: error.to_string(),
        }
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use database_layer::DatabaseError;

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::not_found("patient");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_type(), "not_found");
        assert!(err.to_string().contains("patient"));
    }

    #[test]
    fn reference_not_found_maps_to_404() {
        let err = ApiError::reference_not_found("patient");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_type(), "referenced_entity_not_found");
    }

    #[test]
    fn connection_failure_maps_to_503() {
        let err = ApiError::Database(DatabaseError::ConnectionFailed("refused".into()));
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn configuration_error_maps_to_500() {
        let err = ApiError::Database(DatabaseError::ConfigurationError("DB_PORT".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_type(), "database_error");
    }

    #[test]
    fn bad_request_maps_to_400() {
        let err = ApiError::bad_request("status is required");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
