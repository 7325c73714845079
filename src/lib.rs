//! Taskboard - Main Library
//!
//! A board/list/task tracker served as a JSON API, with JWT sessions and
//! owner-scoped access to every board, list and task.
//!
//! # Module Structure
//!
//! - **`shared`** - Types used by both the server and the client
//!   - Board, list and task records; request and response bodies
//!   - Session claims and field validation
//!   - Error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, auth middleware, ownership guard
//!   - `BoardStore` port with PostgreSQL and in-memory adapters
//!
//! - **`client`** - API client (only compiled with `client` feature)
//!
//! # Feature Flags
//!
//! - **`ssr`** - the server, its binaries and the PostgreSQL store
//! - **`client`** - the `reqwest`-based API client
//!
//! Both are enabled by default.
//!
//! # Usage
//!
//! ```rust,no_run
//! use taskboard::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::builder("change-me").build()?;
//! let app = create_app(config).await?;
//! // Use app with axum::serve
//! # Ok(())
//! # }
//! ```

/// Shared types between server and client
pub mod shared;

/// Server-side code (only compiled with `ssr` feature)
#[cfg(feature = "ssr")]
pub mod backend;

/// API client (only compiled with `client` feature)
#[cfg(feature = "client")]
pub mod client;
