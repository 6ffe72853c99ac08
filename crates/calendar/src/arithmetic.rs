//! Stepping month anchors across leap-month insertions.

use crate::date::MonthAnchor;
use crate::oracle::CalendarOracle;

/// Month number that splits into two months in a leap year.
pub const SPLIT_MONTH: u8 = 12;

/// Month number of the inserted second half of [`SPLIT_MONTH`].
pub const LEAP_MONTH: u8 = 13;

impl MonthAnchor {
    /// Returns the month following this one.
    ///
    /// In a leap year the split month is followed by the leap month; the
    /// last month of a year (12 or 13) is followed by month 1. The year
    /// increments on entering the oracle's year-start month.
    pub fn next<O: CalendarOracle + ?Sized>(self, oracle: &O) -> Self {
        let last = oracle.months_in_year(self.year());
        let month = if self.month() == SPLIT_MONTH && last == LEAP_MONTH {
            LEAP_MONTH
        } else if self.month() >= last {
            1
        } else {
            self.month() + 1
        };
        let year = if month == oracle.year_start_month() {
            self.year() + 1
        } else {
            self.year()
        };
        Self::from_parts(year, month)
    }

    /// Returns the month preceding this one.
    ///
    /// Mirror image of [`MonthAnchor::next`]: the leap month collapses back
    /// to the split month, and month 1 wraps to the last month of the year
    /// it belongs to, using that year's leap status.
    pub fn previous<O: CalendarOracle + ?Sized>(self, oracle: &O) -> Self {
        let year = if self.month() == oracle.year_start_month() {
            self.year() - 1
        } else {
            self.year()
        };
        let month = match self.month() {
            1 => oracle.months_in_year(year),
            LEAP_MONTH => SPLIT_MONTH,
            m => m - 1,
        };
        Self::from_parts(year, month)
    }
}

/// Returns the months of `year` in calendar order, starting at the
/// oracle's year-start month (12 or 13 anchors).
pub fn months_in_display_order<O: CalendarOracle + ?Sized>(
    oracle: &O,
    year: i32,
) -> Vec<MonthAnchor> {
    let mut months = Vec::with_capacity(usize::from(LEAP_MONTH));
    let mut current = MonthAnchor::from_parts(year, oracle.year_start_month());
    while current.year() == year {
        months.push(current);
        current = current.next(oracle);
    }
    months
}
