//! Commands accepted by the application container.

use crate::todo::domain::{Filter, TaskId, TaskName};

/// A single user-initiated change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoCommand {
    /// Append a new task.
    Add(TaskName),
    /// Invert completion of a task.
    ToggleCompleted(TaskId),
    /// Remove a task.
    Delete(TaskId),
    /// Rename a task.
    Edit {
        /// Task to rename.
        id: TaskId,
        /// Replacement name.
        name: TaskName,
    },
    /// Select a known filter.
    SetFilter(Filter),
    /// Select a filter by its display name.
    SetFilterNamed(String),
}
