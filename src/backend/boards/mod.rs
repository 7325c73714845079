//! Boards Module
//!
//! HTTP handlers for `/boards` and `/boards/{id}`. The board's lists are
//! served by `backend::lists` under `/boards/{id}/lists`.

/// Board CRUD handlers
pub mod handlers;

pub use handlers::{create_board, delete_board, get_board, list_boards, update_board};
