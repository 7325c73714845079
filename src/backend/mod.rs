//! Backend Module
//!
//! This module contains all server-side code: an Axum HTTP API for boards,
//! lists and tasks with JWT authentication and owner-scoped access.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Route configuration and router assembly
//! - **`auth`** - Passwords, session tokens, ownership guard, `/auth` handlers
//! - **`boards`**, **`lists`**, **`tasks`** - Resource CRUD handlers
//! - **`store`** - `BoardStore` port with PostgreSQL and in-memory adapters
//! - **`middleware`** - Bearer-token authentication
//! - **`extract`** - Request extractors with JSON error rejections
//! - **`error`** - `ApiError` and its JSON rendering
//! - **`seed`** - Demo data
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── bin/seed.rs     - Seeding binary
//! ├── server/         - Config, state, initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication and authorization
//! ├── boards/         - Board handlers
//! ├── lists/          - List handlers
//! ├── tasks/          - Task handlers
//! ├── store/          - Persistence port and adapters
//! ├── middleware/     - Request middleware
//! ├── extract.rs      - Extractors
//! ├── seed.rs         - Demo data
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! client → bearer token → `auth_middleware` (verify) → handler →
//! guard (load resource, compare owner) → store → JSON response
//!
//! # Error Handling
//!
//! Handlers return `ApiResult<T>`. Lower-layer errors convert into
//! `ApiError` with `?` and render as `{"error": ..., "status": ...}`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and authorization
pub mod auth;

/// Board handlers
pub mod boards;

/// List handlers
pub mod lists;

/// Task handlers
pub mod tasks;

/// Persistence port and adapters
pub mod store;

/// Middleware for request processing
pub mod middleware;

/// Request extractors
pub mod extract;

/// Demo data
pub mod seed;

pub use error::{ApiError, ApiResult};
pub use server::{create_app, AppState, ServerConfig};
pub use store::BoardStore;
