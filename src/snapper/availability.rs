//! Tool availability checking
//!
//! Probes for the external binaries once at startup. sndiff is optional:
//! without it the dashboard works but comparison features are hidden.

use crate::config::Settings;

/// Cached availability of the external tools
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolAvailability {
    /// Whether the snapper binary is on PATH
    pub snapper: bool,

    /// Whether the sndiff binary is on PATH
    pub sndiff: bool,
}

impl ToolAvailability {
    /// Check tool availability (run once at startup)
    pub fn check(settings: &Settings) -> Self {
        Self {
            snapper: Self::check_binary(&settings.tools.snapper),
            sndiff: Self::check_binary(&settings.tools.sndiff),
        }
    }

    fn check_binary(binary: &str) -> bool {
        which::which(binary)
            .inspect_err(|e| tracing::debug!("{} not found: {}", binary, e))
            .is_ok()
    }

    /// Get user-friendly message when snapper is missing
    pub fn snapper_unavailable_message(&self) -> Option<&'static str> {
        if self.snapper {
            None
        } else {
            Some("snapper not found. Install snapper to manage snapshots.")
        }
    }

    /// Get user-friendly message when sndiff is missing
    pub fn sndiff_unavailable_message(&self) -> Option<&'static str> {
        if self.sndiff {
            None
        } else {
            Some("sndiff not found. Install sndiff to compare snapshots.")
        }
    }
}
