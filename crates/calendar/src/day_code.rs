//! Fixed-width Gregorian day codes.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime};

use crate::error::CalendarError;

/// A Gregorian calendar day, rendered as the 8-character string `YYYYMMDD`.
///
/// Day codes are the canonical key for comparing and bucketing days. The
/// ordering is chronological and matches the lexical ordering of the
/// rendered string. Only years `0..=9999` are representable, so the
/// rendering is always exactly 8 characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayCode(NaiveDate);

fn in_range(date: NaiveDate) -> bool {
    (DayCode::MIN_YEAR..=DayCode::MAX_YEAR).contains(&date.year())
}

impl DayCode {
    /// First representable year.
    pub const MIN_YEAR: i32 = 0;
    /// Last representable year.
    pub const MAX_YEAR: i32 = 9999;

    /// The earliest day code, `00000101`.
    pub fn earliest() -> Self {
        Self(NaiveDate::from_ymd_opt(Self::MIN_YEAR, 1, 1).unwrap_or(NaiveDate::MIN))
    }

    /// The latest day code, `99991231`.
    pub fn latest() -> Self {
        Self(NaiveDate::from_ymd_opt(Self::MAX_YEAR, 12, 31).unwrap_or(NaiveDate::MAX))
    }

    /// Wraps a Gregorian date, saturating at [`DayCode::earliest`] and
    /// [`DayCode::latest`].
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date).clamp(Self::earliest(), Self::latest())
    }

    /// Creates a day code from a Gregorian year, month, and day.
    ///
    /// Returns `None` if the triple is not a real date or the year is
    /// outside `0..=9999`.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .filter(|d| in_range(*d))
            .map(Self)
    }

    /// Returns the day containing the instant `ts` (epoch seconds) as seen
    /// from a fixed UTC offset.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::TimestampOutOfRange`] if that day falls
    /// outside the years `0..=9999`.
    pub fn from_timestamp(ts: i64, offset: FixedOffset) -> Result<Self, CalendarError> {
        DateTime::from_timestamp(ts, 0)
            .map(|utc| utc.with_timezone(&offset).date_naive())
            .filter(|d| in_range(*d))
            .map(Self)
            .ok_or(CalendarError::TimestampOutOfRange { ts })
    }

    /// Like [`DayCode::from_timestamp`], but instants before or after the
    /// representable range map to [`DayCode::earliest`] or
    /// [`DayCode::latest`].
    pub fn saturating_from_timestamp(ts: i64, offset: FixedOffset) -> Self {
        match DateTime::from_timestamp(ts, 0) {
            Some(utc) => Self::from_date(utc.with_timezone(&offset).date_naive()),
            None if ts < 0 => Self::earliest(),
            None => Self::latest(),
        }
    }

    /// Returns the epoch second at which this day starts under `offset`.
    pub fn start_timestamp(self, offset: FixedOffset) -> i64 {
        let local_midnight = self.0.and_time(NaiveTime::MIN).and_utc().timestamp();
        local_midnight - i64::from(offset.local_minus_utc())
    }

    /// Returns the wrapped Gregorian date.
    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// Returns the day `days` after this one (negative moves backward).
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        self.0
            .checked_add_signed(chrono::TimeDelta::days(days))
            .filter(|d| in_range(*d))
            .map(Self)
    }

    /// Returns the following day.
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().filter(|d| in_range(*d)).map(Self)
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(self, other: Self) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Iterates every day from `self` through `last`, inclusive.
    ///
    /// Yields nothing when `last` precedes `self`.
    pub fn through(self, last: Self) -> impl Iterator<Item = DayCode> {
        self.0
            .iter_days()
            .take_while(move |d| *d <= last.0)
            .map(Self)
    }
}

impl fmt::Display for DayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{:02}{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for DayCode {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidDayCode {
            code: s.to_string(),
        };
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let year: i32 = s[0..4].parse().map_err(|_| invalid())?;
        let month: u32 = s[4..6].parse().map_err(|_| invalid())?;
        let day: u32 = s[6..8].parse().map_err(|_| invalid())?;
        Self::from_ymd(year, month, day).ok_or_else(invalid)
    }
}

impl serde::Serialize for DayCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
