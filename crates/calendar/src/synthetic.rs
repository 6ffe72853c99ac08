//! A deterministic synthetic lunisolar calendar.
//!
//! Odd months have 30 days, even months 29, and the leap month 29. Every
//! `leap_every`-th year (those divisible by it, including year 0) is leap.
//! Year 0 starts on the configured Gregorian epoch. The regularity makes
//! it convenient for exercising leap-year patterns that a real calendar
//! only produces every few centuries.

use chrono::NaiveDate;

use crate::arithmetic::{LEAP_MONTH, SPLIT_MONTH};
use crate::date::LunisolarDate;
use crate::oracle::CalendarOracle;

const COMMON_YEAR_DAYS: i64 = 354;
const LEAP_MONTH_DAYS: i64 = 29;

/// Synthetic calendar with a fixed leap cycle.
#[derive(Debug, Clone)]
pub struct SyntheticCalendar {
    leap_every: i32,
    year_start_month: u8,
    epoch: NaiveDate,
}

impl SyntheticCalendar {
    /// Creates a calendar where every `leap_every`-th year is leap.
    ///
    /// Defaults: year starts at month 1, year 0 begins on 2000-01-01.
    /// A `leap_every` below 1 is treated as 1 (every year leap).
    pub fn new(leap_every: i32) -> Self {
        Self {
            leap_every: leap_every.max(1),
            year_start_month: 1,
            epoch: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default(),
        }
    }

    /// Sets the month at which the year label increments (clamped to 1..=12).
    pub fn with_year_start_month(mut self, month: u8) -> Self {
        self.year_start_month = month.clamp(1, 12);
        self
    }

    /// Sets the Gregorian date on which year 0 begins.
    pub fn with_epoch(mut self, epoch: NaiveDate) -> Self {
        self.epoch = epoch;
        self
    }

    fn leap_years_before(&self, year: i32) -> i64 {
        let n = i64::from(self.leap_every);
        (i64::from(year) + n - 1).div_euclid(n)
    }

    /// Days from the epoch to the first day of `year`.
    fn year_start(&self, year: i32) -> i64 {
        COMMON_YEAR_DAYS * i64::from(year) + LEAP_MONTH_DAYS * self.leap_years_before(year)
    }

    fn following_month(&self, year: i32, month: u8) -> u8 {
        let last = self.months_in_year(year);
        if month == SPLIT_MONTH && last == LEAP_MONTH {
            LEAP_MONTH
        } else if month >= last {
            1
        } else {
            month + 1
        }
    }

    /// Days from the first day of `year` to the first day of `month`.
    fn month_offset(&self, year: i32, month: u8) -> i64 {
        let mut offset = 0;
        let mut m = self.year_start_month;
        for _ in 0..LEAP_MONTH {
            if m == month {
                break;
            }
            offset += i64::from(self.days_in_month(year, m));
            m = self.following_month(year, m);
        }
        offset
    }
}

impl CalendarOracle for SyntheticCalendar {
    fn is_leap_year(&self, year: i32) -> bool {
        year.rem_euclid(self.leap_every) == 0
    }

    fn days_in_month(&self, _year: i32, month: u8) -> u8 {
        if month == LEAP_MONTH || month % 2 == 0 {
            29
        } else {
            30
        }
    }

    fn to_lunisolar(&self, date: NaiveDate) -> LunisolarDate {
        let n = (date - self.epoch).num_days();
        let cycle = i64::from(self.leap_every);
        let estimate = (n * cycle).div_euclid(COMMON_YEAR_DAYS * cycle + LEAP_MONTH_DAYS);
        let mut year = i32::try_from(estimate).unwrap_or(i32::MAX);
        while self.year_start(year) > n {
            year -= 1;
        }
        while self.year_start(year + 1) <= n {
            year += 1;
        }

        let mut remaining = n - self.year_start(year);
        let mut month = self.year_start_month;
        for _ in 0..LEAP_MONTH {
            let len = i64::from(self.days_in_month(year, month));
            if remaining < len {
                break;
            }
            remaining -= len;
            month = self.following_month(year, month);
        }
        // remaining < 30 after the walk above.
        LunisolarDate::new_unchecked(year, month, remaining as u8 + 1)
    }

    fn to_gregorian(&self, date: LunisolarDate) -> NaiveDate {
        let days = self.year_start(date.year())
            + self.month_offset(date.year(), date.month())
            + i64::from(date.day())
            - 1;
        self.epoch + chrono::TimeDelta::days(days)
    }

    fn year_start_month(&self) -> u8 {
        self.year_start_month
    }
}
