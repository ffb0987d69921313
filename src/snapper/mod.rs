//! External tool infrastructure layer
//!
//! Wraps the snapper and sndiff command-line tools: elevated invocation,
//! output capture, and JSON parsing into core types.

pub mod availability;
pub mod command;
pub mod diff;
pub mod list;
pub mod rollback;

pub use availability::ToolAvailability;
pub use command::{extract_json_object, run_tool, Tool, ToolOutput};
pub use diff::fetch_diff;
pub use list::{list_configs, list_snapshots};
pub use rollback::rollback;
