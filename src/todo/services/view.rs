//! Derivation of the visible list and its summary.

use serde::Serialize;
use tracing::trace;

use crate::todo::domain::{ActiveFilter, Filter, Task, TaskList};

/// State of one button in the filter group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterButton {
    /// Filter selected by the button.
    pub filter: Filter,
    /// Whether the filter is the active one, for `aria-pressed`.
    pub is_active: bool,
}

/// Everything the rendering layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoView {
    /// Tasks passing the active filter, in list order.
    pub tasks: Vec<Task>,
    /// Number of visible tasks.
    pub count: usize,
    /// Number of tasks in the full list.
    pub total: usize,
    /// Summary heading text, such as `"2 tasks remaining"`.
    pub heading: String,
    /// Name of the active filter.
    pub active_filter: String,
    /// Filter buttons in table order.
    pub filters: Vec<FilterButton>,
}

/// Derives the view for `tasks` under `active`.
///
/// The result is computed from scratch on every call.
///
/// # Examples
///
/// ```
/// use todomatic::todo::domain::{ActiveFilter, Filter, TaskList, TaskName};
/// use todomatic::todo::services::compose_view;
///
/// let (list, _) = TaskList::new().add(TaskName::new("Walk dog").expect("valid name"));
/// let view = compose_view(&list, &ActiveFilter::Known(Filter::Active));
/// assert_eq!(view.heading, "1 task remaining");
/// ```
#[must_use]
pub fn compose_view(tasks: &TaskList, active: &ActiveFilter) -> TodoView {
    let visible: Vec<Task> = tasks
        .iter()
        .filter(|task| active.matches(task))
        .cloned()
        .collect();
    let count = visible.len();
    trace!(total = tasks.len(), count, filter = active.name(), "derived todo view");

    TodoView {
        tasks: visible,
        count,
        total: tasks.len(),
        heading: summary_label(count),
        active_filter: active.name().to_owned(),
        filters: Filter::ALL
            .into_iter()
            .map(|filter| FilterButton {
                filter,
                is_active: active.is(filter),
            })
            .collect(),
    }
}

/// Formats the summary heading for `count` visible tasks.
#[must_use]
pub fn summary_label(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("{count} {noun} remaining")
}
