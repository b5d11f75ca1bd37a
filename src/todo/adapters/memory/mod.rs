//! In-memory port adapters that record what the container asked for.
//!
//! Useful for embedding the container in headless hosts and for tests.

mod focus;
mod observer;

pub use focus::RecordingHeadingFocus;
pub use observer::RecordingViewObserver;
