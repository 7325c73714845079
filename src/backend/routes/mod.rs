//! Routes Module
//!
//! HTTP route configuration and router assembly.
//!
//! - **`router`** - top-level router: health, API mounts, fallback, layers
//! - **`api_routes`** - auth, board, list and task routes
//!
//! ```text
//! routes/
//! ├── mod.rs         - Module exports and documentation
//! ├── router.rs      - Main router creation
//! └── api_routes.rs  - API endpoints
//! ```

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
