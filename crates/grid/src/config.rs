//! Display policy shared by month and year grids.

use chrono::{Datelike, FixedOffset, NaiveDate, Offset, Utc, Weekday};

use crate::error::GridError;

/// Configuration for building grids.
///
/// Weekdays are numbered from Sunday: 0 = Sunday, ..., 6 = Saturday.
///
/// # Example
///
/// ```
/// use luach_grid::GridConfig;
///
/// let config = GridConfig::new()
///     .with_first_day_of_week(1)
///     .with_weekend_days(vec![6])
///     .with_utc_offset_secs(2 * 3600);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Weekday shown in the first grid column.
    first_day_of_week: u8,
    /// Weekdays highlighted as weekend.
    weekend_days: Vec<u8>,
    /// Offset used to turn epoch seconds into day codes.
    utc_offset_secs: i32,
}

impl GridConfig {
    /// Creates a configuration with the defaults: weeks start on Sunday,
    /// Saturday and Sunday are weekend days, timestamps are read in UTC.
    pub fn new() -> Self {
        Self {
            first_day_of_week: 0,
            weekend_days: vec![0, 6],
            utc_offset_secs: 0,
        }
    }

    /// Sets the weekday shown in the first column.
    pub fn with_first_day_of_week(mut self, day: u8) -> Self {
        self.first_day_of_week = day;
        self
    }

    /// Replaces the set of weekend days.
    pub fn with_weekend_days(mut self, days: Vec<u8>) -> Self {
        self.weekend_days = days;
        self
    }

    /// Sets the fixed UTC offset, in seconds east of UTC.
    pub fn with_utc_offset_secs(mut self, secs: i32) -> Self {
        self.utc_offset_secs = secs;
        self
    }

    /// Returns the first day of the week (0 = Sunday).
    pub fn first_day_of_week(&self) -> u8 {
        self.first_day_of_week
    }

    /// Returns the weekend days.
    pub fn weekend_days(&self) -> &[u8] {
        &self.weekend_days
    }

    /// Returns the UTC offset in seconds.
    pub fn utc_offset_secs(&self) -> i32 {
        self.utc_offset_secs
    }

    /// Returns the UTC offset as a chrono offset.
    ///
    /// Falls back to UTC if the configured value is out of range; call
    /// [`GridConfig::validate`] to reject such values up front.
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_secs).unwrap_or_else(|| Utc.fix())
    }

    /// Returns `true` if `date` falls on a weekend day.
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend_days.contains(&weekday_number(date.weekday()))
    }

    /// Column (0..=6) in which a day falling on `weekday` is shown.
    pub fn column_of(&self, weekday: Weekday) -> usize {
        usize::from((weekday_number(weekday) + 7 - self.first_day_of_week % 7) % 7)
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the first day of week or any weekend day is
    /// outside `0..=6`, or the UTC offset is not strictly within ±24h.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.first_day_of_week > 6 {
            return Err(GridError::InvalidFirstDayOfWeek {
                day: self.first_day_of_week,
            });
        }
        if let Some(&day) = self.weekend_days.iter().find(|&&d| d > 6) {
            return Err(GridError::InvalidWeekendDay { day });
        }
        if FixedOffset::east_opt(self.utc_offset_secs).is_none() {
            return Err(GridError::InvalidUtcOffset {
                secs: self.utc_offset_secs,
            });
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn weekday_number(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn defaults() {
        let cfg = GridConfig::default();
        assert_eq!(cfg.first_day_of_week(), 0);
        assert_eq!(cfg.weekend_days(), &[0, 6]);
        assert_eq!(cfg.utc_offset_secs(), 0);
        assert!(cfg.validate().is_ok());
        // 2024-01-06 is a Saturday, 2024-01-07 a Sunday, 2024-01-08 a Monday.
        assert!(cfg.is_weekend(date(2024, 1, 6)));
        assert!(cfg.is_weekend(date(2024, 1, 7)));
        assert!(!cfg.is_weekend(date(2024, 1, 8)));
    }

    #[test]
    fn custom_weekend() {
        let cfg = GridConfig::new().with_weekend_days(vec![5, 6]);
        assert!(cfg.is_weekend(date(2024, 1, 5)));
        assert!(!cfg.is_weekend(date(2024, 1, 7)));
    }

    #[test]
    fn columns_follow_first_day_of_week() {
        let sunday_first = GridConfig::new();
        assert_eq!(sunday_first.column_of(Weekday::Sun), 0);
        assert_eq!(sunday_first.column_of(Weekday::Sat), 6);

        let monday_first = GridConfig::new().with_first_day_of_week(1);
        assert_eq!(monday_first.column_of(Weekday::Mon), 0);
        assert_eq!(monday_first.column_of(Weekday::Sun), 6);
        assert_eq!(monday_first.column_of(Weekday::Wed), 2);
    }

    #[test]
    fn invalid_first_day_of_week() {
        let cfg = GridConfig::new().with_first_day_of_week(7);
        assert_eq!(
            cfg.validate().unwrap_err(),
            GridError::InvalidFirstDayOfWeek { day: 7 }
        );
    }

    #[test]
    fn invalid_weekend_day() {
        let cfg = GridConfig::new().with_weekend_days(vec![6, 9]);
        assert_eq!(
            cfg.validate().unwrap_err(),
            GridError::InvalidWeekendDay { day: 9 }
        );
    }

    #[test]
    fn invalid_offset_falls_back_to_utc() {
        let cfg = GridConfig::new().with_utc_offset_secs(86_400);
        assert_eq!(
            cfg.validate().unwrap_err(),
            GridError::InvalidUtcOffset { secs: 86_400 }
        );
        assert_eq!(cfg.offset().local_minus_utc(), 0);
    }
}
