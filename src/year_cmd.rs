//! Year command: build and print the event markers of one year.

use anyhow::{Context, Result};
use luach_calendar::{CalendarOracle, HebrewCalendar};
use luach_grid::YearGridBuilder;
use tracing::{info, info_span};

use crate::cli::YearArgs;
use crate::config::LuachConfig;
use crate::{convert, events, render};

/// Run the year command.
pub fn run(args: YearArgs, config: &LuachConfig) -> Result<()> {
    let _cmd = info_span!("year").entered();
    let grid_cfg = convert::build_grid_config(&config.display)?;
    let cal = HebrewCalendar::new();
    let today = convert::today(grid_cfg.offset())?;
    let year = args
        .year
        .unwrap_or_else(|| cal.to_lunisolar(today.date()).year());
    info!(year, "building year grid");

    let store = events::load(args.events.as_deref())?;
    let mut builder = YearGridBuilder::new(year, grid_cfg.offset()).with_today(today);
    let grid = builder
        .refresh(&cal, &store)
        .context("event store returned no answer for the year")?;

    if args.json {
        let json = serde_json::to_string_pretty(&grid).context("failed to serialize year grid")?;
        println!("{json}");
    } else {
        print!("{}", render::year(&grid, cal.is_leap_year(year)));
    }
    Ok(())
}
