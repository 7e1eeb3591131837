use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use nurovia_core::error::{self, ApiError};

/// Internal error type that converts to structured API responses
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Validation error (400)
    #[error("validation failed: {message}")]
    Validation {
        message: String,
        field: Option<String>,
        received: Option<serde_json::Value>,
        docs_hint: Option<String>,
    },
    /// Route or resource not found (404)
    #[error("not found: {resource}")]
    NotFound { resource: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // TODO: extract request_id from extensions once request-id middleware is wired
        let request_id = uuid::Uuid::now_v7().to_string();

        let (status, api_error) = match self {
            AppError::Validation {
                message,
                field,
                received,
                docs_hint,
            } => (
                StatusCode::BAD_REQUEST,
                ApiError {
                    error: error::codes::VALIDATION_FAILED.to_string(),
                    message,
                    field,
                    received,
                    request_id,
                    docs_hint,
                },
            ),
            AppError::NotFound { resource } => (
                StatusCode::NOT_FOUND,
                ApiError {
                    error: error::codes::NOT_FOUND.to_string(),
                    message: format!("No such endpoint: {resource}"),
                    field: None,
                    received: None,
                    request_id,
                    docs_hint: Some(
                        "See /swagger-ui or GET /api-doc/openapi.json for the available endpoints."
                            .to_string(),
                    ),
                },
            ),
        };

        (status, Json(api_error)).into_response()
    }
}
