//! Postdeck - a TUI client for browsing posts and comments
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use postdeck::common::prelude::*;

/// Postdeck - browse users, posts, and comments from the terminal
#[derive(Parser, Debug)]
#[command(name = "postdeck")]
#[command(about = "A TUI client for a posts-and-comments REST API", long_about = None)]
struct Args {
    /// Base URL of the resource API (overrides config.toml)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Path to an alternate config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    postdeck::run(args.config.as_deref(), args.api_url).await
}
