//! Tasks Module
//!
//! HTTP handlers for the tasks of a list and for single tasks.

/// Task CRUD handlers
pub mod handlers;

pub use handlers::{create_task, delete_task, get_task, list_tasks, update_task};
