//! Arithmetic Hebrew calendar oracle.
//!
//! Month numbering starts at Nissan (1) and runs through Elul (6), Tishrei
//! (7) and Adar (12); Adar II (13) exists in leap years. The year number
//! increments at Tishrei.
//!
//! Year starts follow the molad of Tishrei with the four postponement
//! rules, computed in whole days (R.D. fixed-day numbering, where
//! 0001-01-01 Gregorian is day 1).

use chrono::{Datelike, NaiveDate};

use crate::arithmetic::{LEAP_MONTH, SPLIT_MONTH};
use crate::date::LunisolarDate;
use crate::oracle::CalendarOracle;

/// Nissan, the first month in the numbering.
pub const NISSAN: u8 = 1;
/// Iyar.
pub const IYAR: u8 = 2;
/// Sivan.
pub const SIVAN: u8 = 3;
/// Tammuz.
pub const TAMMUZ: u8 = 4;
/// Av.
pub const AV: u8 = 5;
/// Elul, the last month of the year.
pub const ELUL: u8 = 6;
/// Tishrei, where the year number increments.
pub const TISHREI: u8 = 7;
/// Cheshvan, 29 or 30 days depending on the year length.
pub const CHESHVAN: u8 = 8;
/// Kislev, 29 or 30 days depending on the year length.
pub const KISLEV: u8 = 9;
/// Tevet.
pub const TEVET: u8 = 10;
/// Shevat.
pub const SHEVAT: u8 = 11;
/// Adar (Adar I in leap years).
pub const ADAR: u8 = SPLIT_MONTH;
/// Adar II, leap years only.
pub const ADAR_II: u8 = LEAP_MONTH;

/// Fixed day number of 1 Tishrei AM 1.
const EPOCH: i64 = -1_373_427;

const PARTS_PER_DAY: i64 = 25_920;

const MONTH_NAMES: [&str; 13] = [
    "Nissan", "Iyar", "Sivan", "Tammuz", "Av", "Elul", "Tishrei", "Cheshvan", "Kislev", "Tevet",
    "Shevat", "Adar", "Adar II",
];

/// The Hebrew calendar.
///
/// Supports every year whose dates fall inside chrono's date range;
/// conversions beyond it saturate at [`NaiveDate::MIN`] / [`NaiveDate::MAX`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HebrewCalendar;

impl HebrewCalendar {
    /// Creates the oracle.
    pub fn new() -> Self {
        Self
    }

    /// Returns the number of days in `year` (353–355 or 383–385).
    pub fn days_in_year(self, year: i32) -> u16 {
        let y = i64::from(year);
        (new_year(y + 1) - new_year(y)) as u16
    }

    fn fixed_from_hebrew(self, year: i32, month: u8, day: u8) -> i64 {
        let months_before: i64 = if month < TISHREI {
            (TISHREI..=self.months_in_year(year))
                .chain(NISSAN..month)
                .map(|m| i64::from(self.days_in_month(year, m)))
                .sum()
        } else {
            (TISHREI..month)
                .map(|m| i64::from(self.days_in_month(year, m)))
                .sum()
        };
        new_year(i64::from(year)) + months_before + i64::from(day) - 1
    }
}

/// Returns the transliterated name of `month`.
///
/// In leap years month 12 is "Adar I". Out-of-range months yield an empty
/// string.
pub fn month_name(month: u8, is_leap: bool) -> &'static str {
    match month {
        ADAR if is_leap => "Adar I",
        1..=13 => MONTH_NAMES[usize::from(month) - 1],
        _ => "",
    }
}

fn is_leap(year: i64) -> bool {
    (7 * year + 1).rem_euclid(19) < 7
}

/// Days from the epoch to the molad-based start of `year`, with the
/// "molad zaken" and weekday postponements applied.
fn elapsed_days(year: i64) -> i64 {
    let months = (235 * year - 234).div_euclid(19);
    let parts = 12_084 + 13_753 * months;
    let day = 29 * months + parts.div_euclid(PARTS_PER_DAY);
    if (3 * (day + 1)).rem_euclid(7) < 3 {
        day + 1
    } else {
        day
    }
}

/// Postponement that keeps year lengths within 353–355 / 383–385 days.
fn year_length_correction(year: i64) -> i64 {
    let ny0 = elapsed_days(year - 1);
    let ny1 = elapsed_days(year);
    let ny2 = elapsed_days(year + 1);
    if ny2 - ny1 == 356 {
        2
    } else if ny1 - ny0 == 382 {
        1
    } else {
        0
    }
}

/// Fixed day number of 1 Tishrei of `year`.
fn new_year(year: i64) -> i64 {
    EPOCH + elapsed_days(year) + year_length_correction(year)
}

impl CalendarOracle for HebrewCalendar {
    fn is_leap_year(&self, year: i32) -> bool {
        is_leap(i64::from(year))
    }

    fn days_in_month(&self, year: i32, month: u8) -> u8 {
        let year_days = self.days_in_year(year);
        let short = match month {
            IYAR | TAMMUZ | ELUL | TEVET | ADAR_II => true,
            ADAR => !self.is_leap_year(year),
            CHESHVAN => year_days % 10 != 5,
            KISLEV => year_days % 10 == 3,
            _ => false,
        };
        if short { 29 } else { 30 }
    }

    fn to_lunisolar(&self, date: NaiveDate) -> LunisolarDate {
        let fixed = i64::from(date.num_days_from_ce());
        let approx = ((fixed - EPOCH) * 98_496).div_euclid(35_975_351) + 1;
        let mut year = approx - 1;
        while new_year(year + 1) <= fixed {
            year += 1;
        }
        let year = year as i32;

        let start = if fixed < self.fixed_from_hebrew(year, NISSAN, 1) {
            TISHREI
        } else {
            NISSAN
        };
        let mut month = start;
        while month < self.months_in_year(year) {
            let last = self.days_in_month(year, month);
            if fixed <= self.fixed_from_hebrew(year, month, last) {
                break;
            }
            month += 1;
        }
        let day = fixed - self.fixed_from_hebrew(year, month, 1) + 1;
        LunisolarDate::new_unchecked(year, month, day as u8)
    }

    fn to_gregorian(&self, date: LunisolarDate) -> NaiveDate {
        let fixed = self.fixed_from_hebrew(date.year(), date.month(), date.day());
        let clamped = fixed.clamp(
            i64::from(NaiveDate::MIN.num_days_from_ce()),
            i64::from(NaiveDate::MAX.num_days_from_ce()),
        );
        NaiveDate::from_num_days_from_ce_opt(clamped as i32).unwrap_or(NaiveDate::MAX)
    }

    fn year_start_month(&self) -> u8 {
        TISHREI
    }
}
