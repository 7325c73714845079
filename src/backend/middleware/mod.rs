//! Middleware Module
//!
//! HTTP middleware that runs before the handlers.
//!
//! - **`auth`** - bearer-token authentication for protected routes
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use taskboard::backend::middleware::auth_middleware;
//!
//! let protected = protected_routes.route_layer(from_fn_with_state(state.clone(), auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, authenticate, bearer_token, AuthUser};
