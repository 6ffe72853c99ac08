use std::path::PathBuf;

use clap::{Parser, Subcommand};
use luach_calendar::DayCode;

/// Luach lunisolar calendar grids.
#[derive(Parser)]
#[command(
    name = "luach",
    version,
    about = "Hebrew calendar month grids, year grids and month windows"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file. Defaults apply when omitted.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the 42-cell grid of one month.
    Month(MonthArgs),
    /// Print the event markers of a whole year.
    Year(YearArgs),
    /// Print the month window used for paged navigation.
    Window(WindowArgs),
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Any day of the month to show, as YYYYMMDD. Defaults to today.
    #[arg(short, long)]
    pub date: Option<DayCode>,

    /// TOML file with `[[event]]` entries.
    #[arg(short, long)]
    pub events: Option<PathBuf>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Hebrew year to show. Defaults to the current year.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// TOML file with `[[event]]` entries.
    #[arg(short, long)]
    pub events: Option<PathBuf>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `window` subcommand.
#[derive(clap::Args)]
pub struct WindowArgs {
    /// Day the window is centered on, as YYYYMMDD. Defaults to today.
    #[arg(short, long)]
    pub date: Option<DayCode>,

    /// Override the window size from config (odd).
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}
