//! Board, list and task records
//!
//! These are the JSON shapes returned by the API. The same structs are read
//! back by the client, so field names follow the wire format
//! (`backgroundColor`, `owner_id`, `board_id`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Color given to a board when none is supplied.
pub const DEFAULT_BOARD_COLOR: &str = "#ffffff";

/// User information that is safe to return to clients.
///
/// Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// A board owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
pub struct Board {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    #[serde(rename = "backgroundColor")]
    #[cfg_attr(feature = "ssr", sqlx(rename = "background_color"))]
    pub background_color: String,
    pub created_at: DateTime<Utc>,
}

/// An ordered column within a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
pub struct BoardList {
    pub id: Uuid,
    pub board_id: Uuid,
    pub title: String,
    /// Append-only; unique within the board.
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

/// A list together with its tasks, ordered by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListWithTasks {
    #[serde(flatten)]
    pub list: BoardList,
    pub tasks: Vec<Task>,
}

/// A unit of work within a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
pub struct Task {
    pub id: Uuid,
    pub list_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Append-only; unique within the list.
    pub position: i32,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}
