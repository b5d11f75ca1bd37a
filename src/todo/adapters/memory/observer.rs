//! View observer that keeps every view it receives.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::warn;

use crate::todo::{ports::ViewObserver, services::TodoView};

/// Thread-safe observer recording each delivered view in order.
///
/// Clones share the same history. A poisoned history lock is logged and
/// recovered, so a panic elsewhere never hides the views already recorded.
#[derive(Debug, Clone, Default)]
pub struct RecordingViewObserver {
    views: Arc<RwLock<Vec<TodoView>>>,
}

impl RecordingViewObserver {
    /// Creates an observer with an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every view received so far.
    #[must_use]
    pub fn views(&self) -> Vec<TodoView> {
        self.read().clone()
    }

    /// Returns the most recently received view.
    #[must_use]
    pub fn last_view(&self) -> Option<TodoView> {
        self.read().last().cloned()
    }

    /// Returns the number of notifications received.
    #[must_use]
    pub fn notification_count(&self) -> usize {
        self.read().len()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<TodoView>> {
        self.views.read().unwrap_or_else(|err| {
            warn!("view history lock poisoned, reading recovered history");
            err.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<TodoView>> {
        self.views.write().unwrap_or_else(|err| {
            warn!("view history lock poisoned, recording into recovered history");
            err.into_inner()
        })
    }
}

impl ViewObserver for RecordingViewObserver {
    fn view_changed(&self, view: &TodoView) {
        self.write().push(view.clone());
    }
}
