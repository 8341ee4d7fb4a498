//! The task record and id assignment.
//!
//! A [`Task`] is a to-do entry: numeric id, title, completion status.
//! Ids are assigned monotonically by [`next_task_id`]: one past the highest
//! id currently in the list, starting at 1. Deleted ids are never reused,
//! so gaps in the sequence are expected.

use serde::{Deserialize, Serialize};

/// A to-do record.
///
/// # Example JSON
///
/// ```json
/// {
///     "id": 1,
///     "title": "buy milk",
///     "status": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique numeric identifier. Assigned once at creation, never reused.
    pub id: u64,
    /// Human-readable task title. The only field the update operation
    /// may change.
    pub title: String,
    /// Completion status. Defaults to `false` at creation.
    #[serde(default)]
    pub status: bool,
}

impl Task {
    /// Creates a new task with the given id and title, not yet completed.
    #[must_use]
    pub const fn new(id: u64, title: String) -> Self {
        Self {
            id,
            title,
            status: false,
        }
    }
}

/// Computes the id for the next task to be created.
///
/// Returns `max(existing ids) + 1`, or 1 when the list is empty. Ids freed
/// by deleting from the middle of the sequence are never handed out again,
/// so gaps accumulate over time.
#[must_use]
pub fn next_task_id(tasks: &[Task]) -> u64 {
    tasks.iter().map(|task| task.id).max().map_or(1, |id| id + 1)
}
