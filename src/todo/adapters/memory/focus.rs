//! Counting heading-focus adapter.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use crate::todo::ports::HeadingFocus;

/// Heading adapter that counts focus requests.
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct RecordingHeadingFocus {
    requests: Arc<AtomicUsize>,
}

impl RecordingHeadingFocus {
    /// Creates an adapter with no recorded requests.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many focus requests have been received.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl HeadingFocus for RecordingHeadingFocus {
    fn focus_heading(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }
}
