//! Shared machinery for invoking snapper and sndiff
//!
//! Both tools need root to read snapshot metadata, so every invocation goes
//! through the configured elevation wrapper (pkexec by default).

use crate::common::prelude::*;
use crate::config::Settings;
use std::process::Stdio;
use tokio::process::Command;

/// Which external tool an invocation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Snapper,
    Sndiff,
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Snapper => "snapper",
            Tool::Sndiff => "sndiff",
        }
    }

    /// Binary name or path from settings
    pub fn binary<'a>(&self, settings: &'a Settings) -> &'a str {
        match self {
            Tool::Snapper => &settings.tools.snapper,
            Tool::Sndiff => &settings.tools.sndiff,
        }
    }

    fn not_found_error(&self) -> Error {
        match self {
            Tool::Snapper => Error::SnapperNotFound,
            Tool::Sndiff => Error::SndiffNotFound,
        }
    }
}

/// Captured output of a finished tool invocation
#[derive(Debug)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
    pub code: Option<i32>,
    success: bool,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.success
    }

    /// Error for a non-success exit, carrying the captured stderr
    pub fn exit_error(&self, tool: Tool) -> Error {
        Error::tool_exit(tool.name(), self.code, self.stderr.trim())
    }
}

/// Build the elevation-wrapped command for a tool
fn build_command(settings: &Settings, tool: Tool) -> Command {
    let binary = tool.binary(settings);
    match settings.privilege.elevation.prefix() {
        Some(wrapper) => {
            let mut cmd = Command::new(wrapper);
            cmd.arg(binary);
            cmd
        }
        None => Command::new(binary),
    }
}

/// Run a tool to completion and capture both streams
pub async fn run_tool(settings: &Settings, tool: Tool, args: &[&str]) -> Result<ToolOutput> {
    let mut cmd = build_command(settings, tool);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    debug!("Running {} {:?}", tool.name(), args);

    let output = cmd.output().await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            tool.not_found_error()
        } else {
            Error::tool_spawn(tool.name(), e.to_string())
        }
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    debug!("{} stdout: {}", tool.name(), stdout);
    if !stderr.is_empty() {
        debug!("{} stderr: {}", tool.name(), stderr);
    }

    Ok(ToolOutput {
        stdout,
        stderr,
        code: output.status.code(),
        success: output.status.success(),
    })
}

/// Extract the outermost JSON object from possibly noisy tool output
///
/// Elevation wrappers and the tools themselves may print banner or warning
/// lines around the JSON payload.
pub fn extract_json_object(output: &str) -> Option<&str> {
    let start = output.find('{')?;
    let end = output.rfind('}')?;
    if end > start {
        Some(&output[start..=end])
    } else {
        None
    }
}
