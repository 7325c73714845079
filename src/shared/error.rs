//! Shared Error Types
//!
//! This module defines error types that are shared between the server and the
//! API client. These errors represent failures that can be detected on either
//! side of the wire, before a request ever reaches the store.
//!
//! # Error Categories
//!
//! - `ValidationError` - A request field is missing or malformed
//! - `TokenPayloadError` - A session token payload could not be decoded
//!
//! # Usage
//!
//! ```rust
//! use taskboard::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "Title is required");
//! assert_eq!(error.user_message(), "Title is required");
//! ```
use thiserror::Error;

/// Shared error types that can occur on the server and in the client
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

    /// The payload segment of a session token could not be read
    #[error("Token payload error: {message}")]
    TokenPayloadError {
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

    /// Create a new token payload error
    pub fn token_payload(message: impl Into<String>) -> Self {
        Self::TokenPayloadError {
            message: message.into(),
        }
    }

    /// The message shown to the user, without the field prefix
    pub fn user_message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
            Self::TokenPayloadError { message } => message,
        }
    }
}
