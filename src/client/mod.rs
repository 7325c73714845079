//! Client Module
//!
//! A Rust client for the taskboard API, compiled with the `client` feature.
//!
//! - **`api`** - `BoardClient`, async calls for every endpoint
//! - **`session`** - token cookie handling and page routing decisions
//! - **`error`** - `ClientError`
//!
//! # Example
//!
//! ```rust,no_run
//! use taskboard::client::BoardClient;
//!
//! # async fn example() -> Result<(), taskboard::client::ClientError> {
//! let mut client = BoardClient::new("http://127.0.0.1:3000");
//! client.login("john@example.com", "Password123!").await?;
//! for board in client.boards().await? {
//!     println!("{} ({})", board.title, board.background_color);
//! }
//! # Ok(())
//! # }
//! ```

/// HTTP client
pub mod api;

/// Session cookie and routing
pub mod session;

/// Client error types
pub mod error;

pub use api::BoardClient;
pub use error::ClientError;
pub use session::{route, RouteDecision, Session};
