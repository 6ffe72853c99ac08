//! Lunisolar dates and month anchors.

use chrono::NaiveDate;

use crate::error::CalendarError;
use crate::oracle::CalendarOracle;

/// A date in a lunisolar calendar.
///
/// Month numbering is defined by the [`CalendarOracle`] in use; month 13
/// exists only in leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct LunisolarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl LunisolarDate {
    /// Creates a lunisolar date, validated against `oracle`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not part of
    /// `year`, or [`CalendarError::InvalidDay`] if `day` is outside the
    /// month.
    pub fn new<O: CalendarOracle + ?Sized>(
        oracle: &O,
        year: i32,
        month: u8,
        day: u8,
    ) -> Result<Self, CalendarError> {
        let anchor = MonthAnchor::new(oracle, year, month)?;
        let max_day = oracle.days_in_month(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self {
            year: anchor.year,
            month: anchor.month,
            day,
        })
    }

    /// Creates a lunisolar date without validation.
    ///
    /// Intended for [`CalendarOracle`] implementations, which only ever
    /// produce dates that exist in their own calendar.
    pub const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=13).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=30).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the month this date falls in.
    pub fn month_anchor(self) -> MonthAnchor {
        MonthAnchor {
            year: self.year,
            month: self.month,
        }
    }
}

/// A `(year, month)` pair identifying one lunisolar month.
///
/// Anchors can only be constructed for months that exist, which makes the
/// month arithmetic on them total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct MonthAnchor {
    year: i32,
    month: u8,
}

impl MonthAnchor {
    /// Creates an anchor, validated against `oracle`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] for month 0, months above 13,
    /// and month 13 in a non-leap year.
    pub fn new<O: CalendarOracle + ?Sized>(
        oracle: &O,
        year: i32,
        month: u8,
    ) -> Result<Self, CalendarError> {
        let max_month = oracle.months_in_year(year);
        if !(1..=max_month).contains(&month) {
            return Err(CalendarError::InvalidMonth {
                year,
                month,
                max_month,
            });
        }
        Ok(Self { year, month })
    }

    pub(crate) const fn from_parts(year: i32, month: u8) -> Self {
        Self { year, month }
    }

    /// Returns the anchor of the month containing a Gregorian date.
    pub fn containing<O: CalendarOracle + ?Sized>(oracle: &O, date: NaiveDate) -> Self {
        oracle.to_lunisolar(date).month_anchor()
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=13).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns day 1 of this month.
    pub fn first_day(self) -> LunisolarDate {
        LunisolarDate::new_unchecked(self.year, self.month, 1)
    }

    /// Returns the last day of this month.
    pub fn last_day<O: CalendarOracle + ?Sized>(self, oracle: &O) -> LunisolarDate {
        LunisolarDate::new_unchecked(self.year, self.month, self.days(oracle))
    }

    /// Returns the number of days in this month.
    pub fn days<O: CalendarOracle + ?Sized>(self, oracle: &O) -> u8 {
        oracle.days_in_month(self.year, self.month)
    }

    /// Returns the Gregorian date of day 1 of this month.
    pub fn first_gregorian<O: CalendarOracle + ?Sized>(self, oracle: &O) -> NaiveDate {
        oracle.to_gregorian(self.first_day())
    }
}
