//! Error types for the luach-calendar crate.

/// Error type for all fallible operations in the luach-calendar crate.
///
/// Every variant is a precondition violation: a month, day, or day code
/// that the calendar in use cannot represent. Arithmetic on values that
/// passed validation never fails.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month number is not part of the given year
    /// (0, 14+, or 13 in a non-leap year).
    #[error("invalid month: {month} for year {year} (must be 1..={max_month})")]
    InvalidMonth {
        /// The lunisolar year the month was checked against.
        year: i32,
        /// The invalid month number that was provided.
        month: u8,
        /// The number of months in `year` (12 or 13).
        max_month: u8,
    },

    /// Returned when a day number exceeds the length of the given month.
    #[error("invalid day: {day} for month {month} of year {year} (max {max_day})")]
    InvalidDay {
        /// The lunisolar year.
        year: i32,
        /// The lunisolar month.
        month: u8,
        /// The invalid day number that was provided.
        day: u8,
        /// The number of days in the month.
        max_day: u8,
    },

    /// Returned when a string is not an 8-digit `YYYYMMDD` Gregorian date.
    #[error("invalid day code: {code:?} (expected YYYYMMDD)")]
    InvalidDayCode {
        /// The rejected input.
        code: String,
    },

    /// Returned when an epoch timestamp cannot be represented as a date.
    #[error("timestamp out of range: {ts}")]
    TimestampOutOfRange {
        /// The offending epoch-second value.
        ts: i64,
    },
}
