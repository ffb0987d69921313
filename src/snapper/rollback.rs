//! Rollback to a snapshot via snapper

use super::command::{run_tool, Tool};
use crate::common::prelude::*;
use crate::config::Settings;

/// Roll the default subvolume back to the given snapshot
///
/// Returns snapper's stdout on success so the caller can log it. A failed
/// invocation carries the captured stderr in the error.
pub async fn rollback(settings: &Settings, number: u64) -> Result<String> {
    let number_arg = number.to_string();
    let output = run_tool(settings, Tool::Snapper, &["rollback", &number_arg]).await?;

    if !output.success() {
        return Err(output.exit_error(Tool::Snapper));
    }

    info!("Rollback to snapshot {} finished", number);
    Ok(output.stdout)
}
