//! Error types for to-do domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing or rebuilding task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// No task with the identifier exists in the list.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Two tasks in a seeded list share an identifier.
    #[error("duplicate task identifier: {0}")]
    DuplicateTaskId(TaskId),

    /// The identifier text is not a valid task identifier.
    #[error("invalid task identifier '{0}', expected todo-<uuid>")]
    InvalidTaskId(String),
}

/// Error returned when a filter name is not one of the known filters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown filter: {0}")]
pub struct ParseFilterError(pub String);
