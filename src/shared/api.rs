/**
 * API Request and Response Types
 *
 * Request bodies accepted by the HTTP handlers and the envelopes they return.
 * The client module serializes the same types, so both sides agree on the
 * wire format by construction.
 */

use serde::{Deserialize, Serialize};

use crate::shared::models::{BoardList, PublicUser, Task};

/// Registration request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Plain password, hashed before storage
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Profile update for `PATCH /auth/me`
///
/// The password only changes when both `current_password` and
/// `new_password` are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

/// Returned by `POST /auth/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: PublicUser,
}

/// Returned by `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    /// Signed session token (7-day expiry by default)
    pub token: String,
}

/// `{ "user": ... }` envelope used by the `/auth/me` endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEnvelope {
    pub user: PublicUser,
}

/// Board creation body (JSON or multipart form fields of the same names)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBoardRequest {
    #[serde(default)]
    pub title: String,
    #[serde(
        rename = "backgroundColor",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub background_color: Option<String>,
}

/// Partial board update
///
/// The color may arrive as `backgroundColor`, `background` or `color`; the
/// first non-null one wins (see [`UpdateBoardRequest::color`]). An empty
/// color resets the board to the default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBoardRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        rename = "backgroundColor",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl UpdateBoardRequest {
    /// The requested color, in key precedence order
    pub fn color(&self) -> Option<&str> {
        self.background_color
            .as_deref()
            .or(self.background.as_deref())
            .or(self.color.as_deref())
    }
}

/// List creation body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateListRequest {
    #[serde(default)]
    pub title: String,
}

/// Partial list update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateListRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Task creation body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial task update
///
/// An empty `description` clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Plain `{ "message": ... }` acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Returned by `DELETE /lists/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedList {
    pub message: String,
    pub list: BoardList,
}

/// Returned by `DELETE /tasks/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedTask {
    pub message: String,
    pub task: Task,
}
