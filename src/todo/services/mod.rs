//! Application services: the state container, view derivation, and focus
//! coordination.

mod app;
mod command;
mod focus;
mod view;

pub use app::{TodoApp, TodoAppError, TodoAppResult};
pub use command::TodoCommand;
pub use focus::{FocusCoordinator, FocusRequest};
pub use view::{FilterButton, TodoView, compose_view, summary_label};
