//! Edge-triggered heading focus after single deletions.

/// Outcome of observing a committed task count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum FocusRequest {
    /// Move input focus to the summary heading.
    Heading,
    /// Leave focus where it is.
    Nothing,
}

/// Remembers the previous task count and asks for heading focus when
/// exactly one task has just been removed.
///
/// Only the transition fires: observing the same count again after a
/// deletion requests nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusCoordinator {
    previous_count: Option<usize>,
}

impl FocusCoordinator {
    /// Creates a coordinator with no count observed yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            previous_count: None,
        }
    }

    /// Creates a coordinator that has already observed `count`.
    #[must_use]
    pub const fn starting_at(count: usize) -> Self {
        Self {
            previous_count: Some(count),
        }
    }

    /// Returns the last observed count.
    #[must_use]
    pub const fn previous_count(&self) -> Option<usize> {
        self.previous_count
    }

    /// Records `count` and reports whether the heading should take focus.
    pub fn observe(&mut self, count: usize) -> FocusRequest {
        let single_removal = self
            .previous_count
            .is_some_and(|previous| previous.checked_sub(1) == Some(count));
        self.previous_count = Some(count);
        if single_removal {
            FocusRequest::Heading
        } else {
            FocusRequest::Nothing
        }
    }
}
