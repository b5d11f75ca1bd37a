//! TodoMatic: in-memory to-do list state for a client-side task list.
//!
//! This crate owns the task list behind a to-do user interface. It covers
//! adding, completing, renaming, deleting, and filtering tasks, derives the
//! visible list with its summary heading, and signals when the heading should
//! take focus after a task is removed.
//!
//! # Architecture
//!
//! TodoMatic follows hexagonal architecture principles:
//!
//! - **Domain**: Pure values with no knowledge of rendering
//! - **Ports**: Abstract trait interfaces towards the rendering layer
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`todo`]: Task list, filters, view derivation, and heading focus

pub mod todo;
