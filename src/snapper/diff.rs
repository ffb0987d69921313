//! Snapshot comparison via sndiff

use super::command::{extract_json_object, run_tool, Tool};
use crate::common::prelude::*;
use crate::config::Settings;
use crate::core::DiffResult;

/// Compare two snapshots of a configuration
///
/// A failed invocation (missing binary, spawn error, non-zero exit) is an
/// error. Unparseable output from a successful run degrades to the all-empty
/// result with a warning, so a misbehaving sndiff shows "no changes" instead
/// of taking the view down.
pub async fn fetch_diff(settings: &Settings, pre: u64, post: u64) -> Result<DiffResult> {
    let pre_arg = pre.to_string();
    let post_arg = post.to_string();
    let output = run_tool(settings, Tool::Sndiff, &["--json", &pre_arg, &post_arg]).await?;

    if !output.success() {
        return Err(output.exit_error(Tool::Sndiff));
    }

    Ok(parse_diff_output(&output.stdout))
}

/// Parse sndiff JSON output, degrading to empty on any parse failure
fn parse_diff_output(output: &str) -> DiffResult {
    let Some(json_str) = extract_json_object(output) else {
        error!("sndiff returned invalid json: no JSON object in output");
        return DiffResult::empty();
    };

    match serde_json::from_str(json_str) {
        Ok(diff) => diff,
        Err(e) => {
            error!("sndiff returned invalid json: {}", e);
            DiffResult::empty()
        }
    }
}
