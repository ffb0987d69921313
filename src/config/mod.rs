//! Configuration file parsing for Snapdeck
//!
//! Supports:
//! - `$XDG_CONFIG_HOME/snapdeck/config.toml` - Global settings

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_dir, load_settings, load_settings_from};
pub use types::*;
