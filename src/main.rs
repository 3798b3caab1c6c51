mod render;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use owo_colors::OwoColorize;
use weekview_core::{Session, DEFAULT_MAX_OCCURRENCES};

use crate::render::Render;

#[derive(Parser)]
#[command(name = "weekview")]
#[command(about = "View the events in an iCalendar file, one week at a time")]
struct Cli {
    /// Path to the .ics file
    file: PathBuf,

    /// Show the week containing this date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    week: Option<String>,

    /// Jump this many weeks forward from the selected week
    #[arg(long, conflicts_with = "back")]
    forward: Option<i64>,

    /// Jump this many weeks back from the selected week
    #[arg(long)]
    back: Option<i64>,

    /// Maximum occurrences to expand per recurring event
    #[arg(long, default_value_t = DEFAULT_MAX_OCCURRENCES)]
    cap: u16,

    /// Print the week view as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let today = match &cli.week {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}'. Expected YYYY-MM-DD", s))?,
        None => Utc::now().date_naive(),
    };

    let content = fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;

    let mut session = Session::with_cap(today, cli.cap);
    let report = session
        .load_ics(&content)
        .with_context(|| format!("Failed to parse {}", cli.file.display()))?;

    for warning in &report.warnings {
        eprintln!("{}", format!("warning: {}", warning).dimmed());
    }

    let delta = cli.forward.unwrap_or(0) - cli.back.unwrap_or(0);
    if delta != 0 {
        session.navigate(delta);
    }

    let view = session.week_view();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", view.render());
    }

    Ok(())
}
