//! HTTP handlers for the task API.
//!
//! Each handler extracts its input, delegates to the storage adapter (and
//! optionally the completion client), and transforms the result into a
//! response DTO. No state is shared between requests.

pub mod tasks;

pub use tasks::{create_task, delete_task, list_tasks, update_task};
