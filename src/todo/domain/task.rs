//! Task record.

use super::{TaskId, TaskName};
use serde::{Deserialize, Serialize};

/// A single to-do item.
///
/// Tasks are values: every change produces a new record through
/// [`Task::with_completed_toggled`] or [`Task::renamed`], and the identifier
/// never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: TaskName,
    completed: bool,
}

impl Task {
    /// Creates an incomplete task with a freshly generated identifier.
    #[must_use]
    pub fn new(name: TaskName) -> Self {
        Self {
            id: TaskId::new(),
            name,
            completed: false,
        }
    }

    /// Reconstructs a task from known parts, for seeding an initial list.
    #[must_use]
    pub const fn from_parts(id: TaskId, name: TaskName, completed: bool) -> Self {
        Self {
            id,
            name,
            completed,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns a copy with the completion flag inverted.
    #[must_use]
    pub fn with_completed_toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }

    /// Returns a copy carrying `name`.
    #[must_use]
    pub fn renamed(&self, name: TaskName) -> Self {
        Self {
            id: self.id,
            name,
            completed: self.completed,
        }
    }
}
