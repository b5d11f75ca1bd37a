//! Port contracts for the rendering layer.
//!
//! Ports define how the application container talks to whatever draws the
//! list, without depending on a particular UI toolkit.

pub mod focus;
pub mod observer;

pub use focus::HeadingFocus;
pub use observer::{SubscriptionId, ViewObserver};
