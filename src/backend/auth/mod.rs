//! Authentication Module
//!
//! This module handles user registration, login, session tokens and the
//! ownership checks applied to boards, lists and tasks.
//!
//! # Architecture
//!
//! - **`users`** - User record and email normalization
//! - **`passwords`** - bcrypt hashing on the blocking pool
//! - **`sessions`** - JWT issuance and verification
//! - **`guard`** - Owner-chain authorization for resources
//! - **`handlers`** - HTTP handlers for the `/auth` endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model
//! ├── passwords.rs    - Password hashing
//! ├── sessions.rs     - JWT token management
//! ├── guard.rs        - Ownership checks
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email and password → user created (no token)
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Requests**: `Authorization: Bearer <token>` → token verified → caller identity
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are stateless HS256 JWTs; logout discards the token client-side
//! - Tokens expire after 7 days by default
//! - Invalid credentials return 401 without saying which part was wrong

/// User record
pub mod users;

/// Password hashing
pub mod passwords;

/// JWT token generation and validation
pub mod sessions;

/// Ownership checks
pub mod guard;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use guard::{authorize_board, authorize_list, authorize_task};
pub use handlers::{get_me, login, register, update_me};
pub use sessions::{TokenError, TokenService};
