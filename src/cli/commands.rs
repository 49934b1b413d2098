use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "moodgrid", about = concat!("moodgrid v", env!("CARGO_PKG_VERSION"), " - a year of days, one square each"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read settings from this file instead of ./moodgrid.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Treat this day as today (MM-DD)
    #[arg(long, value_name = "MM-DD")]
    pub today: Option<String>,

    /// Seed for note prompt selection
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write TUI logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the moods with their colors and note prompts
    Moods,
    /// Print how many days each month row holds
    Calendar,
}
