//! Configuration for the to-do application container.
//!
//! The defaults keep the tolerant behaviour of the reference list: unknown
//! task identifiers are ignored and unknown filter names show no tasks.

use crate::todo::domain::Filter;
use serde::{Deserialize, Serialize};

/// How operations treat a task identifier that is not in the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingTaskPolicy {
    /// Leave the list unchanged and report success.
    #[default]
    Ignore,
    /// Leave the list unchanged and return a not-found error.
    Report,
}

/// How name-based filter selection treats an unknown filter name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownFilterPolicy {
    /// Select the unknown name; the derived view is empty.
    #[default]
    ShowNothing,
    /// Keep the current filter and return a parse error.
    Reject,
}

/// Configuration for [`TodoApp`](crate::todo::services::TodoApp).
///
/// # Examples
///
/// ```
/// use todomatic::todo::config::{MissingTaskPolicy, TodoConfig};
///
/// let config = TodoConfig::default();
/// assert_eq!(config.missing_task, MissingTaskPolicy::Ignore);
///
/// let strict = TodoConfig::strict();
/// assert_eq!(strict.missing_task, MissingTaskPolicy::Report);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Handling of operations on unknown task identifiers.
    pub missing_task: MissingTaskPolicy,
    /// Handling of unknown filter names.
    pub unknown_filter: UnknownFilterPolicy,
    /// Filter selected when the container is created.
    pub initial_filter: Filter,
}

impl TodoConfig {
    /// Creates a configuration that reports unknown identifiers and rejects
    /// unknown filter names.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            missing_task: MissingTaskPolicy::Report,
            unknown_filter: UnknownFilterPolicy::Reject,
            initial_filter: Filter::All,
        }
    }

    /// Returns a copy starting at `filter`.
    #[must_use]
    pub const fn with_initial_filter(mut self, filter: Filter) -> Self {
        self.initial_filter = filter;
        self
    }
}
