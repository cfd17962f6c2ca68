//! Command-line interface for noughts.

use clap::Parser;
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe with an event log
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player terminal tic-tac-toe with an event log", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,
}
