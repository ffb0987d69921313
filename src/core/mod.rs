//! Core domain types - pure business logic with no external dependencies

pub mod diff;
pub mod types;

pub use diff::*;
pub use types::*;
