//! Filter names, the predicate table, and the active-filter selector.

use super::{ParseFilterError, Task};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Predicate deciding whether a task is visible under a filter.
pub type TaskPredicate = fn(&Task) -> bool;

/// Named task filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Filter {
    /// Every task.
    #[default]
    All,
    /// Tasks that are not completed.
    Active,
    /// Tasks that are completed.
    Completed,
}

impl Filter {
    /// Every filter, in the order the button group renders them.
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// Returns the display name of the filter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    /// Looks up the predicate for this filter.
    #[must_use]
    pub const fn predicate(self) -> TaskPredicate {
        match self {
            Self::All => any_task,
            Self::Active => is_active,
            Self::Completed => Task::is_completed,
        }
    }

    /// Returns `true` when `task` is visible under this filter.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        (self.predicate())(task)
    }
}

const fn any_task(_: &Task) -> bool {
    true
}

const fn is_active(task: &Task) -> bool {
    !task.is_completed()
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Filter {
    type Error = ParseFilterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseFilterError(value.to_owned())),
        }
    }
}

/// The filter currently applied to the list.
///
/// `Unrecognised` keeps a name that matched no known filter; it selects no
/// tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveFilter {
    /// A known filter.
    Known(Filter),
    /// A name that matched no known filter.
    Unrecognised(String),
}

impl ActiveFilter {
    /// Returns `true` when `task` is visible under the active filter.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::Known(filter) => filter.matches(task),
            Self::Unrecognised(_) => false,
        }
    }

    /// Returns `true` when `filter` is the active filter.
    #[must_use]
    pub fn is(&self, filter: Filter) -> bool {
        matches!(self, Self::Known(active) if *active == filter)
    }

    /// Returns the active name as rendered.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Known(filter) => filter.as_str(),
            Self::Unrecognised(name) => name,
        }
    }
}

impl From<Filter> for ActiveFilter {
    fn from(value: Filter) -> Self {
        Self::Known(value)
    }
}

/// Holds exactly one active filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelector {
    active: ActiveFilter,
}

impl FilterSelector {
    /// Creates a selector starting at `initial`.
    #[must_use]
    pub const fn new(initial: Filter) -> Self {
        Self {
            active: ActiveFilter::Known(initial),
        }
    }

    /// Returns the active filter.
    #[must_use]
    pub const fn active(&self) -> &ActiveFilter {
        &self.active
    }

    /// Selects a known filter.
    pub fn set_filter(&mut self, filter: Filter) {
        self.active = ActiveFilter::Known(filter);
    }

    /// Records a name that matched no known filter.
    pub fn set_unrecognised(&mut self, name: impl Into<String>) {
        self.active = ActiveFilter::Unrecognised(name.into());
    }
}

impl Default for FilterSelector {
    fn default() -> Self {
        Self::new(Filter::default())
    }
}
