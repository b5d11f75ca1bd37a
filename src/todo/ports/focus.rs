//! Focus port for the list summary heading.

/// Focusable summary heading rendered outside the core.
///
/// The container calls [`HeadingFocus::focus_heading`] after a commit that
/// removed exactly one task. Implementations must move input focus to the
/// heading element.
pub trait HeadingFocus: Send + Sync {
    /// Requests that the heading receive input focus.
    fn focus_heading(&self);
}
