//! Lists Module
//!
//! HTTP handlers for the lists of a board and for single lists.

/// List CRUD handlers
pub mod handlers;

pub use handlers::{create_list, delete_list, get_list, list_lists, update_list};
