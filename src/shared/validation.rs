//! Field validation shared by the handlers and the client.

use crate::shared::error::SharedError;
use crate::shared::models::DEFAULT_BOARD_COLOR;

/// Trim a required title, rejecting blank input.
pub fn require_title(title: &str) -> Result<String, SharedError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(SharedError::validation("title", "Title is required"));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional title from a partial update.
///
/// `None` and blank input both mean "leave unchanged".
pub fn optional_title(title: Option<&str>) -> Option<String> {
    title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Normalize a board color, falling back to the default for blank input.
pub fn board_color(color: Option<&str>) -> String {
    color
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_BOARD_COLOR)
        .to_string()
}

/// Basic email shape check: something on both sides of a single `@`.
pub fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
