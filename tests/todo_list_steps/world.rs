//! Shared world state for to-do list BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use todomatic::todo::{
    adapters::memory::{RecordingHeadingFocus, RecordingViewObserver},
    domain::TaskId,
    services::TodoApp,
};

/// Scenario world for to-do list behaviour tests.
pub struct TodoWorld {
    pub app: TodoApp,
    pub heading: RecordingHeadingFocus,
    pub observer: RecordingViewObserver,
}

impl TodoWorld {
    /// Creates a world with an empty list and recording adapters attached.
    #[must_use]
    pub fn new() -> Self {
        let heading = RecordingHeadingFocus::new();
        let observer = RecordingViewObserver::new();
        let mut app = TodoApp::new();
        app.attach_heading(Arc::new(heading.clone()));
        app.subscribe(Arc::new(observer.clone()));
        Self {
            app,
            heading,
            observer,
        }
    }

    /// Finds the identifier of the task named `name`.
    pub fn task_id(&self, name: &str) -> Result<TaskId, eyre::Report> {
        self.app
            .tasks()
            .iter()
            .find(|task| task.name().as_str() == name)
            .map(|task| task.id())
            .ok_or_else(|| eyre::eyre!("no task named '{name}' in scenario world"))
    }
}

impl Default for TodoWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoWorld {
    TodoWorld::default()
}

/// Splits a step argument such as `"A", "B", "C"` into names.
pub fn quoted_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim().trim_matches('"').to_owned())
        .filter(|part| !part.is_empty())
        .collect()
}
