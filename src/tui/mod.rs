//! TUI presentation layer with signal handling
//!
//! This module provides the terminal user interface for Snapdeck.
//! It is organized into focused submodules:
//!
//! - `runner`: Main entry point and event loop
//! - `actions`: Action dispatch and task execution
//! - `process`: Message processing
//! - `spawn`: Background task spawning
//! - `event`: Terminal event handling
//! - `layout`: Layout calculation
//! - `render`: Frame rendering
//! - `terminal`: Terminal setup/restore
//! - `widgets`: Reusable UI components

pub mod actions;
pub mod event;
pub mod layout;
pub mod process;
pub mod render;
pub mod runner;
pub mod spawn;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
