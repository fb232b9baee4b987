//! To-do List Manager - Main Entry Point
//!
//! Runs the interactive menu on stdin/stdout. The actual implementation is in
//! the `todo_history` library.

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use todo_history::{ConfigLoader, Shell};
use tracing_subscriber::EnvFilter;

/// To-do List Manager - in-memory tasks with undo/redo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file for the shell
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log history operations to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Quiet by default so logs do not interleave with the menu.
    // RUST_LOG overrides the level.
    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = ConfigLoader::new(args.config.as_ref()).load()?;
    tracing::debug!(?config, "starting shell");

    let stdin = io::stdin();
    let mut shell = Shell::new(config, stdin.lock(), io::stdout());
    shell.run()?;
    Ok(())
}
