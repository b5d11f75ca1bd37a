//! Domain model for the to-do list.
//!
//! Tasks, the ordered task list, and filters are plain values. Nothing in
//! this module notifies observers or knows about rendering.

mod error;
mod filter;
mod ids;
mod name;
mod task;
mod task_list;

pub use error::{ParseFilterError, TaskDomainError};
pub use filter::{ActiveFilter, Filter, FilterSelector, TaskPredicate};
pub use ids::TaskId;
pub use name::TaskName;
pub use task::Task;
pub use task_list::TaskList;
