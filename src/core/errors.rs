//! Custom error types for translation operations

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::core::models::ErrorResponse;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Outbound call to the pipeline failed before a body was received
    #[error("Network error: {message}")]
    NetworkError {
        /// Transport error reported by the HTTP client
        message: String,
    },

    /// Pipeline body was not valid JSON
    #[error("Invalid response: {message}")]
    InvalidResponseError {
        /// JSON parser error
        message: String,
    },

    /// Inbound request could not be decoded
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Status to answer with
        status: StatusCode,
        /// Rejection reason
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What is wrong with the configuration
        message: String,
    },

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl TranslationError {
    /// HTTP status reported to the caller
    pub fn status_code(&self) -> StatusCode {
        match self {
            TranslationError::InvalidRequest { status, .. } => *status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<config::ConfigError> for TranslationError {
    fn from(err: config::ConfigError) -> Self {
        TranslationError::ConfigError {
            message: err.to_string(),
        }
    }
}

impl IntoResponse for TranslationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, axum::Json(body)).into_response()
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
