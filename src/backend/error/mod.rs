//! Backend Error Module
//!
//! This module defines the errors returned by HTTP handlers and their
//! conversion to JSON responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ApiError and conversions from lower layers
//! └── conversion.rs - IntoResponse implementation
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;

/// Result alias for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;
