//! Snapshot and configuration listing via snapper --jsonout

use super::command::{extract_json_object, run_tool, Tool, ToolOutput};
use crate::common::prelude::*;
use crate::config::Settings;
use crate::core::{Snapshot, SnapshotConfig};
use serde::Deserialize;

/// List available snapper configurations
pub async fn list_configs(settings: &Settings) -> Result<Vec<SnapshotConfig>> {
    let output = run_tool(settings, Tool::Snapper, &["--jsonout", "list-configs"]).await?;
    let stdout = usable_stdout(Tool::Snapper, &output)?;
    parse_configs_output(stdout)
}

/// List all snapshots of one configuration
pub async fn list_snapshots(settings: &Settings, config: &str) -> Result<Vec<Snapshot>> {
    let output = run_tool(settings, Tool::Snapper, &["--jsonout", "-c", config, "list"]).await?;
    let stdout = usable_stdout(Tool::Snapper, &output)?;
    parse_snapshots_output(stdout, config)
}

/// Accept output from a failed invocation only when it still carries JSON
///
/// snapper can exit non-zero for secondary reasons (a broken config among
/// several) while printing a valid payload for the rest.
fn usable_stdout<'a>(tool: Tool, output: &'a ToolOutput) -> Result<&'a str> {
    if !output.success() {
        if extract_json_object(&output.stdout).is_some() {
            warn!(
                "{} exited with code {:?} but has JSON output, parsing anyway",
                tool.name(),
                output.code
            );
        } else {
            return Err(output.exit_error(tool));
        }
    }
    Ok(&output.stdout)
}

#[derive(Debug, Deserialize)]
struct ConfigList {
    #[serde(default)]
    configs: Vec<SnapshotConfig>,
}

/// Parse the JSON output of snapper --jsonout list-configs
fn parse_configs_output(output: &str) -> Result<Vec<SnapshotConfig>> {
    let json_str = extract_json_object(output)
        .ok_or_else(|| Error::tool_output("snapper", "no JSON object in list-configs output"))?;

    let list: ConfigList = serde_json::from_str(json_str)
        .map_err(|e| Error::tool_output("snapper", format!("failed to parse config list: {}", e)))?;

    Ok(list.configs)
}

/// Parse the JSON output of snapper --jsonout -c <config> list
///
/// The payload is an object keyed by configuration name; only the requested
/// key is read, other keys are ignored.
fn parse_snapshots_output(output: &str, config: &str) -> Result<Vec<Snapshot>> {
    let json_str = extract_json_object(output)
        .ok_or_else(|| Error::tool_output("snapper", "no JSON object in list output"))?;

    let mut map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json_str)
        .map_err(|e| Error::tool_output("snapper", format!("failed to parse snapshot list: {}", e)))?;

    let entries = map
        .remove(config)
        .ok_or_else(|| Error::tool_output("snapper", format!("no '{}' key in list output", config)))?;

    let snapshots: Vec<Snapshot> = serde_json::from_value(entries).map_err(|e| {
        Error::tool_output("snapper", format!("failed to parse snapshot entries: {}", e))
    })?;

    Ok(snapshots)
}
