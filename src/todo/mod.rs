//! To-do list state management for TodoMatic.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]: tasks, the ordered task list, filters
//! - Port contracts in [`ports`]: heading focus and view observers
//! - Adapter implementations in [`adapters`]
//! - The application container and view derivation in [`services`]
//! - Behaviour switches in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
