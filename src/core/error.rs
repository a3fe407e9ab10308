//! Typed error handling for the API
//!
//! Every handler returns `Result<_, ApiError>`. The error carries enough
//! information to pick the HTTP status and body, so a failed request is
//! always answered and never propagates past the handler boundary.
//!
//! # Error Categories
//!
//! - [`ApiError::Validation`]: client data failed the declared rules (400)
//! - [`ApiError::NotFound`]: no document matched the identifier (404)
//! - [`ApiError::NoChanges`]: a document matched but the write changed nothing (400)
//! - [`ApiError::Store`]: the store failed (500)

use crate::core::store::StoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// One failed validation rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field path (`id` for the route parameter, `body` for the whole payload)
    pub field: String,
    /// Human-readable message declared with the rule
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The main error type for request handling
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request parameters or body failed validation
    #[error("Validation failed: {} error(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// No document matched the identifier
    #[error("{message}")]
    NotFound { message: &'static str },

    /// A document matched but the write left it unchanged
    #[error("{message}")]
    NoChanges { message: &'static str },

    /// The store failed; `message` names the operation
    #[error("{message}: {source}")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

/// Body for operational errors
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body for validation errors
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

impl ApiError {
    /// Shorthand for a single field error
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Validation(vec![FieldError::new(field, message)])
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::NoChanges { .. } => StatusCode::BAD_REQUEST,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Validation(errors) => {
                (status, Json(ValidationErrorResponse { errors })).into_response()
            }
            ApiError::NotFound { message } | ApiError::NoChanges { message } => (
                status,
                Json(ErrorResponse {
                    message: message.to_string(),
                    error: None,
                }),
            )
                .into_response(),
            ApiError::Store { message, source } => {
                tracing::error!(error = %source, "{}", message);
                (
                    status,
                    Json(ErrorResponse {
                        message: message.to_string(),
                        error: Some(source.to_string()),
                    }),
                )
                    .into_response()
            }
        }
    }
}
