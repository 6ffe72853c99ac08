//! Month command: build and print one month grid.

use anyhow::{Context, Result};
use luach_calendar::{HebrewCalendar, MonthAnchor};
use luach_grid::MonthSession;
use tracing::{info, info_span};

use crate::cli::MonthArgs;
use crate::config::LuachConfig;
use crate::{convert, events, render};

/// Run the month command.
pub fn run(args: MonthArgs, config: &LuachConfig) -> Result<()> {
    let _cmd = info_span!("month").entered();
    let grid_cfg = convert::build_grid_config(&config.display)?;
    let cal = HebrewCalendar::new();
    let today = convert::today(grid_cfg.offset())?;
    let day = args.date.unwrap_or(today);
    let anchor = MonthAnchor::containing(&cal, day.date());
    info!(%day, year = anchor.year(), month = anchor.month(), "building month grid");

    let store = events::load(args.events.as_deref())?;
    let mut session = MonthSession::new(grid_cfg.clone(), today);
    session.navigate(&cal, anchor);
    let grid = session
        .refresh(&store)
        .context("event store returned no answer for the month")?;

    if args.json {
        let json = serde_json::to_string_pretty(&grid).context("failed to serialize month grid")?;
        println!("{json}");
    } else {
        print!("{}", render::month(&grid, &grid_cfg));
    }
    Ok(())
}
