//! Adapter implementations for the rendering ports.

pub mod memory;
