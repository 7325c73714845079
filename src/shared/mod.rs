//! Shared Module
//!
//! Types shared between the server and the API client: the records the API
//! returns, the request and response bodies, the session token claims and
//! the field validation both sides apply.
//!
//! Everything here is plain data plus pure functions, so it compiles without
//! the `ssr` feature.

/// Board, list, task and user records
pub mod models;

/// Request and response bodies
pub mod api;

/// Session token claims
pub mod claims;

/// Field validation
pub mod validation;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use models::{Board, BoardList, ListWithTasks, PublicUser, Task, DEFAULT_BOARD_COLOR};
pub use claims::{peek_claims, Identity, SessionClaims};
pub use error::SharedError;
