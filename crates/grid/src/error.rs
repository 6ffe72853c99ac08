//! Error types for the luach-grid crate.

use luach_calendar::CalendarError;

/// Errors returned by grid building, bucketing and navigation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// A lunisolar date or day code failed validation.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// The configured first day of the week is not in `0..=6`.
    #[error("invalid first day of week: {day} (must be 0..=6, 0 = Sunday)")]
    InvalidFirstDayOfWeek {
        /// The rejected value.
        day: u8,
    },

    /// A configured weekend day is not in `0..=6`.
    #[error("invalid weekend day: {day} (must be 0..=6, 0 = Sunday)")]
    InvalidWeekendDay {
        /// The rejected value.
        day: u8,
    },

    /// The configured UTC offset is not a valid fixed offset (|offset| < 24h).
    #[error("invalid UTC offset: {secs} seconds")]
    InvalidUtcOffset {
        /// The rejected offset in seconds east of UTC.
        secs: i32,
    },

    /// A month window must have an odd, non-zero size so that it has a center.
    #[error("invalid window size: {size} (must be odd and at least 1)")]
    InvalidWindowSize {
        /// The rejected size.
        size: usize,
    },

    /// An event ends before it starts.
    #[error("malformed event {id}: ends at {end_ts} before it starts at {start_ts}")]
    MalformedEvent {
        /// Identifier of the rejected event.
        id: u64,
        /// Start, epoch seconds.
        start_ts: i64,
        /// End, epoch seconds.
        end_ts: i64,
    },
}
