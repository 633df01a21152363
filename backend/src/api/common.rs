//! Error handling utilities for API responses.
//!
//! Provides structured error responses and conversion between service-layer
//! errors and HTTP responses. Includes:
//! - Standard response envelope
//! - ServiceError to HTTP status code mapping
//! - Validation error formatting helpers
//!
//! # Response Format
//! All errors return consistent JSON responses containing:
//! - `error`: Human-readable message
//! - `error_type`: Machine-readable error category
//! - `details`: Optional field-specific validation errors
//!
//! # Error Handling Flow
//! 1. Service layer returns domain-specific `ServiceError`
//! 2. `service_error_to_http` converts to appropriate HTTP response
//! 3. Validation errors are automatically formatted with field details

use crate::errors::ServiceError;
use axum::http::StatusCode;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Standard API response wrapper for all endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Indicates if the request was successful
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message
    pub message: String,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
    /// Request timestamp
    pub timestamp: String,
}

/// Error details for failed requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Machine-readable error type identifier
    pub error_type: String,
    /// Field-specific validation errors when applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-specific validation error details
#[derive(Debug, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the field with validation error
    pub field: String,
    /// Description of the validation failure
    pub message: String,
}

impl<T> ApiResponse<T> {
    /// Successful response with data.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            message: message.into(),
            error: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    /// Failed response with an error type and optional field details.
    pub fn error(
        message: impl Into<String>,
        error_type: impl Into<String>,
        details: Option<Vec<FieldError>>,
    ) -> Self {
        ApiResponse {
            success: false,
            data: None,
            message: message.into(),
            error: Some(ErrorDetails {
                error_type: error_type.into(),
                details,
            }),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Flattens `validator` errors into the field-error response format.
pub fn validation_errors_to_field_errors(errors: validator::ValidationErrors) -> Vec<FieldError> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Invalid value".to_string()),
            })
        })
        .collect()
}

/// Converts a service error into an HTTP status and serialized error body.
pub fn service_error_to_http(error: ServiceError) -> (StatusCode, String) {
    let (status, error_type, message) = match error {
        ServiceError::Validation { message } => {
            (StatusCode::BAD_REQUEST, "validation_error", message)
        }
        // Duplicate signups have always surfaced as 401 on this API;
        // existing clients key off that status.
        ServiceError::AlreadyExists { entity } => (
            StatusCode::UNAUTHORIZED,
            "already_exists",
            format!("{} already exists", entity),
        ),
        ServiceError::UnknownCredentials => (
            StatusCode::NOT_FOUND,
            "invalid_credentials",
            "Invalid email or password".to_string(),
        ),
        ServiceError::InvalidCredentials => (
            StatusCode::BAD_REQUEST,
            "invalid_credentials",
            "Invalid email or password".to_string(),
        ),
        ServiceError::Unauthorized => (
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "Unauthorized".to_string(),
        ),
        ServiceError::Database { source } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "database_error",
            format!("Database error: {}", source),
        ),
        ServiceError::InternalError { message } => {
            (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
        }
    };

    let error_response = ApiResponse::<()>::error(message, error_type, None);
    (
        status,
        serde_json::to_string(&error_response).unwrap_or_default(),
    )
}

/// Helper to create validation error response
pub fn validation_error_response(errors: validator::ValidationErrors) -> (StatusCode, String) {
    let field_errors = validation_errors_to_field_errors(errors);
    let error_response =
        ApiResponse::<()>::error("Validation failed", "validation_error", Some(field_errors));
    (
        StatusCode::BAD_REQUEST,
        serde_json::to_string(&error_response).unwrap_or_default(),
    )
}
