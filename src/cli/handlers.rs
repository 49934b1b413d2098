use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use crate::cli::commands::{Cli, Commands};
use crate::cli::output::*;
use crate::grid::Today;
use crate::io::config_io;
use crate::logging;
use crate::model::MoodKind;

/// Bad command-line input
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid --today '{0}': expected MM-DD")]
    TodayFormat(String),
    #[error("invalid --today '{0}': no such day")]
    TodayOutOfRange(String),
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match (&cli.command, &cli.log_file) {
        (Some(_), _) => logging::init_stderr(cli.verbose),
        (None, Some(path)) => logging::init_file(cli.verbose, path)
            .map_err(|e| format!("cannot open log file {}: {}", path.display(), e))?,
        // The TUI owns the terminal; without a log file nothing is installed
        (None, None) => {}
    }

    let today = match cli.today.as_deref() {
        Some(arg) => Some(parse_today(arg)?),
        None => Today::now(),
    };
    let cwd = std::env::current_dir()?;
    let config = config_io::load_config(cli.config.as_deref(), &cwd)?;

    match cli.command {
        None => {
            let rng = build_rng(cli.seed);
            tracing::info!(today = ?today, seed = ?cli.seed, "launching tui");
            crate::tui::run(config, today, rng)
        }
        Some(Commands::Moods) => cmd_moods(cli.json),
        Some(Commands::Calendar) => cmd_calendar(cli.json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse `MM-DD` into today's grid position. Any real calendar day is
/// accepted, Feb 29 included (it has no cell, so nothing gets marked).
pub fn parse_today(arg: &str) -> Result<Today, CliError> {
    let (m, d) = arg
        .split_once('-')
        .ok_or_else(|| CliError::TodayFormat(arg.to_string()))?;
    let month: u32 = m
        .parse()
        .map_err(|_| CliError::TodayFormat(arg.to_string()))?;
    let day: u32 = d
        .parse()
        .map_err(|_| CliError::TodayFormat(arg.to_string()))?;
    // 2024 is a leap year, so this accepts exactly the days any year can have
    NaiveDate::from_ymd_opt(2024, month, day)
        .and_then(Today::from_date)
        .ok_or_else(|| CliError::TodayOutOfRange(arg.to_string()))
}

/// Seeded for reproducible prompts, otherwise from OS entropy
pub fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_moods(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let moods: Vec<MoodJson> = MoodKind::ALL.into_iter().map(mood_json).collect();
        println!("{}", serde_json::to_string_pretty(&moods)?);
    } else {
        print!("{}", format_moods());
    }
    tracing::debug!(json, "moods printed");
    Ok(())
}

fn cmd_calendar(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&calendar_json())?);
    } else {
        print!("{}", format_calendar());
    }
    tracing::debug!(json, "calendar printed");
    Ok(())
}
