//! Shared Error Types
//!
//! Error types used by both the server and the native client.
//!
//! # Error Categories
//!
//! - `ValidationError` - Request fields that fail validation
//!
//! # Usage
//!
//! ```rust
//! use todoflow::shared::error::SharedError;
//!
//! let error = SharedError::validation("text", "Todo text is required");
//! ```
use thiserror::Error;

/// Shared error types that can occur in both client and server
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Message without the category prefix, suitable for a response body
    pub fn detail(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}
