//! Snapdeck - a terminal dashboard for snapper snapshots
//!
//! This is the binary entry point. All logic lives in the library.

use clap::Parser;
use snapdeck::common::prelude::*;

/// Snapdeck - a terminal dashboard for snapper snapshots
#[derive(Parser, Debug)]
#[command(name = "snapdeck")]
#[command(about = "Browse snapper snapshots and their package/file diffs", long_about = None)]
struct Args {
    /// Snapper config to browse
    #[arg(short, long, default_value = "root", value_name = "NAME")]
    config: String,

    /// Pre snapshot number; opens the comparison page directly
    #[arg(value_name = "PRE", requires = "post")]
    pre: Option<u64>,

    /// Post snapshot number to compare PRE against
    #[arg(value_name = "POST")]
    post: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let compare = args.pre.zip(args.post);

    snapdeck::run(&args.config, compare).await
}
