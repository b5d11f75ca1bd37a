//! Observer port for derived-view notifications.

use crate::todo::services::TodoView;
use std::fmt;

/// Receives the freshly derived view after every committed change.
///
/// Notifications are delivered synchronously, before the mutating call
/// returns.
pub trait ViewObserver: Send + Sync {
    /// Called with the view derived from the latest committed state.
    fn view_changed(&self, view: &TodoView);
}

/// Handle identifying a registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates an identifier from its raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
