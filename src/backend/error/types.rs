/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the HTTP API. Every handler
 * returns `Result<_, ApiError>`; lower layers (store, token service,
 * password hashing, body extraction) convert into it with `?`.
 *
 * # Error Categories
 *
 * - `Validation` - missing or malformed field (400)
 * - `Unauthorized` - missing, invalid or expired token, bad credentials (401)
 * - `Forbidden` - valid token, wrong owner (403)
 * - `NotFound` - resource id absent (404)
 * - `Server` - unexpected store or crypto failure (500)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::passwords::PasswordError;
use crate::backend::auth::sessions::TokenError;
use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// API error returned by every handler
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request field
    #[error("{0}")]
    Validation(String),

    /// Caller identity could not be established
    #[error("{0}")]
    Unauthorized(String),

    /// Caller is authenticated but does not own the resource
    #[error("{0}")]
    Forbidden(String),

    /// Resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Unexpected failure; the detail is logged, never returned
    #[error("Server error: {0}")]
    Server(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn unauthorized() -> Self {
        Self::Unauthorized("Unauthorized".to_string())
    }

    pub fn forbidden() -> Self {
        Self::Forbidden("Forbidden".to_string())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn server(detail: impl Into<String>) -> Self {
        Self::Server(detail.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message sent to the client
    ///
    /// Server errors are redacted to a fixed string.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(message)
            | Self::Unauthorized(message)
            | Self::Forbidden(message)
            | Self::NotFound(message) => message.clone(),
            Self::Server(_) => "Server error".to_string(),
        }
    }
}

impl From<SharedError> for ApiError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ValidationError { message, .. } => Self::Validation(message),
            SharedError::TokenPayloadError { .. } => Self::unauthorized(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => Self::NotFound(format!("{what} not found")),
            StoreError::Conflict(message) => Self::Validation(message),
            other => Self::Server(other.to_string()),
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => Self::Unauthorized("Token expired".to_string()),
            TokenError::InvalidSignature | TokenError::Malformed(_) => {
                Self::Unauthorized("Invalid token".to_string())
            }
            TokenError::Encoding(detail) => Self::Server(detail),
        }
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        Self::Server(err.to_string())
    }
}
