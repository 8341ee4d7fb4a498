//! Domain layer: the task record and its id-assignment rule.

pub mod task;

pub use task::{Task, next_task_id};
