//! Configuration types for Snapdeck
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Related sub-types and enums

use serde::{Deserialize, Serialize};

/// Application settings (config.toml in the user config dir)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub tools: ToolSettings,

    #[serde(default)]
    pub privilege: PrivilegeSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// External tool binaries
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolSettings {
    /// snapper binary name or path
    #[serde(default = "default_snapper")]
    pub snapper: String,

    /// sndiff binary name or path
    #[serde(default = "default_sndiff")]
    pub sndiff: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            snapper: default_snapper(),
            sndiff: default_sndiff(),
        }
    }
}

fn default_snapper() -> String {
    "snapper".to_string()
}

fn default_sndiff() -> String {
    "sndiff".to_string()
}

/// Privilege escalation settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PrivilegeSettings {
    /// How to elevate snapper/sndiff invocations
    #[serde(default)]
    pub elevation: Elevation,
}

/// Privilege escalation method for external tool invocations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Elevation {
    #[default]
    Pkexec,
    Sudo,
    None,
}

impl Elevation {
    /// The wrapper binary to prepend, if any
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            Elevation::Pkexec => Some("pkexec"),
            Elevation::Sudo => Some("sudo"),
            Elevation::None => None,
        }
    }
}

impl std::fmt::Display for Elevation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Elevation::Pkexec => write!(f, "pkexec"),
            Elevation::Sudo => write!(f, "sudo"),
            Elevation::None => write!(f, "none"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// chrono format string for snapshot dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}
