//! Store Port
//!
//! Every handler reaches persistence through the [`BoardStore`] trait. Two
//! adapters implement it:
//!
//! - **`postgres`** - `PgStore`, backed by a `sqlx::PgPool`
//! - **`memory`** - `MemoryStore`, used when no database is configured and
//!   by the test suite
//!
//! # Ordering
//!
//! Lists and tasks are append-only. The store assigns each new record the
//! next free position of its parent (`max + 1`, starting at 0) while holding
//! a single-writer lock on the parent, so concurrent creates never collide.
//!
//! # Cascades
//!
//! Deleting a board removes its lists and their tasks; deleting a list
//! removes its tasks.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::shared::{Board, BoardList, ListWithTasks, Task};

/// PostgreSQL adapter
pub mod postgres;

/// In-memory adapter
pub mod memory;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Store failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// The addressed record does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A uniqueness constraint rejected the write
    #[error("{0}")]
    Conflict(String),

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Message used when an email is already registered
pub const DUPLICATE_EMAIL: &str = "Email already exists";

/// Data for a new user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Profile changes; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub password_hash: Option<String>,
}

/// Data for a new board
#[derive(Debug, Clone)]
pub struct NewBoard {
    pub owner_id: Uuid,
    pub title: String,
    pub background_color: String,
}

/// Board changes; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct BoardUpdate {
    pub title: Option<String>,
    pub background_color: Option<String>,
}

impl BoardUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.background_color.is_none()
    }
}

/// Task changes; `None` leaves a field untouched
///
/// `description: Some(None)` clears the description.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
}

/// Persistence operations used by the HTTP handlers
#[async_trait]
pub trait BoardStore: Send + Sync {
    // === Users ===

    /// Insert a user; a taken email yields `StoreError::Conflict`
    async fn create_user(&self, user: NewUser) -> StoreResult<User>;

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;

    async fn update_user(&self, id: Uuid, update: UserUpdate) -> StoreResult<User>;

    // === Boards ===

    /// Boards of one owner, newest first
    async fn list_boards(&self, owner_id: Uuid) -> StoreResult<Vec<Board>>;

    async fn create_board(&self, board: NewBoard) -> StoreResult<Board>;

    async fn find_board(&self, id: Uuid) -> StoreResult<Option<Board>>;

    async fn update_board(&self, id: Uuid, update: BoardUpdate) -> StoreResult<Board>;

    /// Delete a board with its lists and tasks
    async fn delete_board(&self, id: Uuid) -> StoreResult<Board>;

    // === Lists ===

    /// Lists of a board by position, each with its tasks by position
    async fn lists_with_tasks(&self, board_id: Uuid) -> StoreResult<Vec<ListWithTasks>>;

    /// Append a list to the end of a board
    async fn create_list(&self, board_id: Uuid, title: String) -> StoreResult<BoardList>;

    async fn find_list(&self, id: Uuid) -> StoreResult<Option<BoardList>>;

    async fn update_list(&self, id: Uuid, title: String) -> StoreResult<BoardList>;

    /// Delete a list with its tasks
    async fn delete_list(&self, id: Uuid) -> StoreResult<BoardList>;

    // === Tasks ===

    /// Tasks of a list by position
    async fn list_tasks(&self, list_id: Uuid) -> StoreResult<Vec<Task>>;

    /// Append a task to the end of a list
    async fn create_task(
        &self,
        list_id: Uuid,
        title: String,
        description: Option<String>,
    ) -> StoreResult<Task>;

    async fn find_task(&self, id: Uuid) -> StoreResult<Option<Task>>;

    async fn update_task(&self, id: Uuid, update: TaskUpdate) -> StoreResult<Task>;

    async fn delete_task(&self, id: Uuid) -> StoreResult<Task>;
}
