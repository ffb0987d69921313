//! Snapdeck Library
//!
//! A TUI dashboard for snapper snapshots with package and file diffs.

// Module declarations
pub mod app;
pub mod common;
pub mod config;
pub mod core;
pub mod snapper;
pub mod tui;

// Re-export main entry point
pub use app::run;
