//! The calendar oracle capability.

use chrono::NaiveDate;

use crate::date::LunisolarDate;

/// Conversion primitives between the Gregorian calendar and a lunisolar
/// calendar.
///
/// Implementations own the astronomical or tabular rules; everything in
/// this workspace is written against this trait so that grids and windows
/// can be exercised with synthetic leap-year patterns.
///
/// Month numbers run `1..=12`, plus `13` in leap years. Month 12 is the
/// slot that splits in leap years: in a leap year months 12 and 13 are the
/// first and second halves of the split month.
///
/// Callers only pass months and days that exist in the given year; the
/// behavior for anything else is up to the implementation.
pub trait CalendarOracle {
    /// Returns `true` if `year` has a thirteenth month.
    fn is_leap_year(&self, year: i32) -> bool;

    /// Returns the number of days (29 or 30) in `month` of `year`.
    fn days_in_month(&self, year: i32, month: u8) -> u8;

    /// Converts a Gregorian date to its lunisolar date.
    fn to_lunisolar(&self, date: NaiveDate) -> LunisolarDate;

    /// Converts a lunisolar date to its Gregorian date.
    fn to_gregorian(&self, date: LunisolarDate) -> NaiveDate;

    /// Returns the number of months in `year` (12 or 13).
    fn months_in_year(&self, year: i32) -> u8 {
        if self.is_leap_year(year) { 13 } else { 12 }
    }

    /// Month number at which the year label increments.
    ///
    /// With the default of 1, the year ends with month 12 (or 13) and the
    /// next year starts at month 1. Calendars whose year turns over in the
    /// middle of the month numbering (the Hebrew calendar turns over at
    /// Tishrei, month 7) override this. Must be in `1..=12`.
    fn year_start_month(&self) -> u8 {
        1
    }
}

impl<O: CalendarOracle + ?Sized> CalendarOracle for &O {
    fn is_leap_year(&self, year: i32) -> bool {
        (**self).is_leap_year(year)
    }

    fn days_in_month(&self, year: i32, month: u8) -> u8 {
        (**self).days_in_month(year, month)
    }

    fn to_lunisolar(&self, date: NaiveDate) -> LunisolarDate {
        (**self).to_lunisolar(date)
    }

    fn to_gregorian(&self, date: LunisolarDate) -> NaiveDate {
        (**self).to_gregorian(date)
    }

    fn months_in_year(&self, year: i32) -> u8 {
        (**self).months_in_year(year)
    }

    fn year_start_month(&self) -> u8 {
        (**self).year_start_month()
    }
}
