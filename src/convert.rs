//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};
use chrono::{FixedOffset, Utc};
use luach_calendar::DayCode;
use luach_grid::GridConfig;

use crate::config::DisplayToml;

/// Builds a validated [`GridConfig`] from the TOML display configuration.
pub fn build_grid_config(display: &DisplayToml) -> Result<GridConfig> {
    let Some(offset_secs) = display.utc_offset_minutes.checked_mul(60) else {
        bail!(
            "utc_offset_minutes out of range: {}",
            display.utc_offset_minutes
        );
    };
    let cfg = GridConfig::new()
        .with_first_day_of_week(display.first_day_of_week)
        .with_weekend_days(display.weekend_days.clone())
        .with_utc_offset_secs(offset_secs);
    cfg.validate().context("invalid [display] configuration")?;
    Ok(cfg)
}

/// Returns today's day code at `offset`.
pub fn today(offset: FixedOffset) -> Result<DayCode> {
    DayCode::from_timestamp(Utc::now().timestamp(), offset).context("system clock out of range")
}
