//! Window command: print the month window around a day.

use anyhow::{Context, Result};
use luach_calendar::HebrewCalendar;
use luach_grid::month_window;
use tracing::{info, info_span};

use crate::cli::WindowArgs;
use crate::config::LuachConfig;
use crate::{convert, render};

/// Run the window command.
pub fn run(args: WindowArgs, config: &LuachConfig) -> Result<()> {
    let _cmd = info_span!("window").entered();
    let grid_cfg = convert::build_grid_config(&config.display)?;
    let cal = HebrewCalendar::new();
    let day = match args.date {
        Some(day) => day,
        None => convert::today(grid_cfg.offset())?,
    };
    let size = args.size.unwrap_or(config.navigation.window_size);

    let window = month_window(&cal, day, size).context("failed to build month window")?;
    info!(%day, size, "month window built");

    if args.json {
        let json = serde_json::to_string_pretty(&window).context("failed to serialize window")?;
        println!("{json}");
    } else {
        print!("{}", render::window(&cal, &window));
    }
    Ok(())
}
