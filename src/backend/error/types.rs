/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and during startup, and can be
 * converted to HTTP responses.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Request-level failures with an explicit status:
 * - Malformed JSON bodies
 * - Unknown item identifiers
 *
 * ## Store Errors
 *
 * A failed store call. The response carries only a static message naming
 * the operation; the underlying `sqlx::Error` is logged, never returned.
 *
 * ## Startup Errors
 *
 * Migration and socket failures raised before or while serving.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use todoflow::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::NOT_FOUND, "Todo not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., invalid request, unknown item)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Store call failure
    ///
    /// `message` is the static text returned to the caller.
    #[error("Store error: {message}")]
    StoreError {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// Database migrations failed at startup
    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    /// Socket or filesystem failure
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Shared validation error
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Wrap a failed store call
    ///
    /// # Arguments
    ///
    /// * `message` - Static text returned to the caller, e.g. `"Failed to add todo"`
    /// * `source` - The underlying error, kept for logging only
    pub fn store(message: &'static str, source: sqlx::Error) -> Self {
        Self::StoreError { message, source }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `SharedError::ValidationError` - 400 Bad Request
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::SharedError(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
            Self::StoreError { .. } | Self::MigrationError(_) | Self::IoError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message sent to the caller
    ///
    /// Store and I/O failures never expose their source here.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::StoreError { message, .. } => (*message).to_string(),
            Self::MigrationError(_) => "Failed to run database migrations".to_string(),
            Self::IoError(_) => "I/O error".to_string(),
            Self::SharedError(err) => err.detail().to_string(),
        }
    }
}
